//! RetakeQuiz - Command handler for editing answers and reclassifying.

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{
    CommandMetadata, DomainError, ErrorCode, Timestamp, UserId, UserProfileId,
};
use crate::domain::profile::{ProfileEvent, ProfileUpdater};
use crate::domain::quiz::{Catalog, GoalSet, QuizSession, Response, ResponseLedger};
use crate::domain::scoring::{ScoringResult, TerrainShift};
use crate::ports::ProfileRepository;

/// Command to change answers on an existing profile.
///
/// `responses` are applied over the stored answers, so a partial list only
/// changes the questions it names. `goals`, when set, replace the stored
/// goals before questions are selected.
#[derive(Debug, Clone)]
pub struct RetakeQuizCommand {
    pub user_id: UserId,
    pub goals: Option<GoalSet>,
    pub responses: Vec<Response>,
}

/// Result of a retake.
#[derive(Debug, Clone, Serialize)]
pub struct RetakeQuizResult {
    pub profile_id: UserProfileId,
    pub result: ScoringResult,
    pub shift: TerrainShift,
    pub events: Vec<ProfileEvent>,
}

/// Handler for quiz retakes.
pub struct RetakeQuizHandler {
    repository: Arc<dyn ProfileRepository>,
    catalog: Arc<Catalog>,
}

impl RetakeQuizHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, catalog: Arc<Catalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub async fn handle(
        &self,
        cmd: RetakeQuizCommand,
        metadata: CommandMetadata,
    ) -> Result<RetakeQuizResult, DomainError> {
        // 1. Load profile
        let mut profile = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;

        let now = Timestamp::now();
        let mut events = Vec::new();

        // 2. Apply goal changes, then overlay new answers on stored ones
        if let Some(goals) = cmd.goals {
            if &goals != profile.goals() {
                events.push(profile.set_goals(goals, now));
            }
        }

        let mut ledger = ResponseLedger::from_responses(profile.quiz_responses().iter().cloned());
        for response in cmd.responses {
            ledger.record(response.question_id, response.option_id);
        }

        // 3. Reclassify; the edited set must be complete
        let completed =
            QuizSession::resume(self.catalog.clone(), profile.goals().clone(), ledger)?.finish()?;
        let shift = completed
            .result
            .shift_from(profile.terrain_profile_id());

        // 4. Write in place and persist
        events.push(ProfileUpdater::apply(
            &mut profile,
            &completed.result,
            &completed.ledger,
            &self.catalog,
            now,
        ));
        self.repository.update(&profile).await?;

        info!(
            correlation_id = %metadata.correlation_id(),
            profile_id = %profile.id(),
            terrain = %completed.result.terrain_profile_id(),
            changed = shift.is_changed(),
            "Quiz retaken"
        );

        Ok(RetakeQuizResult {
            profile_id: profile.id(),
            result: completed.result,
            shift,
            events,
        })
    }
}
