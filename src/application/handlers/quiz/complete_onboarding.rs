//! CompleteOnboarding - Command handler creating a classified profile.

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{
    CommandMetadata, DomainError, ErrorCode, Timestamp, UserId, UserProfileId,
};
use crate::domain::profile::{ProfileEvent, ProfileUpdater, UserProfile};
use crate::domain::quiz::{Catalog, GoalSet, QuizSession, Response, ResponseLedger};
use crate::domain::scoring::ScoringResult;
use crate::ports::ProfileRepository;

/// Command to finish onboarding with a full set of answers.
#[derive(Debug, Clone)]
pub struct CompleteOnboardingCommand {
    pub user_id: UserId,
    pub goals: GoalSet,
    pub responses: Vec<Response>,
}

/// Result of successful onboarding.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteOnboardingResult {
    pub profile_id: UserProfileId,
    pub result: ScoringResult,
    pub events: Vec<ProfileEvent>,
}

/// Handler for completing onboarding.
pub struct CompleteOnboardingHandler {
    repository: Arc<dyn ProfileRepository>,
    catalog: Arc<Catalog>,
}

impl CompleteOnboardingHandler {
    pub fn new(repository: Arc<dyn ProfileRepository>, catalog: Arc<Catalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteOnboardingCommand,
        metadata: CommandMetadata,
    ) -> Result<CompleteOnboardingResult, DomainError> {
        // 1. One profile per user
        if self.repository.exists_for_user(&cmd.user_id).await? {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                "Profile already exists for this user",
            ));
        }

        // 2. Every selected question must be answered
        let ledger = ResponseLedger::from_responses(cmd.responses);
        let completed = QuizSession::resume(self.catalog.clone(), cmd.goals, ledger)?.finish()?;

        // 3. Build the profile and write the classification into it
        let now = Timestamp::now();
        let mut profile = UserProfile::new(cmd.user_id, completed.goals, now);
        let created = profile.created_event();
        let recalculated = ProfileUpdater::apply(
            &mut profile,
            &completed.result,
            &completed.ledger,
            &self.catalog,
            now,
        );

        // 4. Persist
        self.repository.create(&profile).await?;

        info!(
            correlation_id = %metadata.correlation_id(),
            profile_id = %profile.id(),
            terrain = %completed.result.terrain_profile_id(),
            "Onboarding completed"
        );

        Ok(CompleteOnboardingResult {
            profile_id: profile.id(),
            result: completed.result,
            events: vec![created, recalculated],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::{builtin_catalog, Goal, PrimaryType, QuestionSelector};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockProfileRepository {
        profiles: Mutex<Vec<UserProfile>>,
        should_fail: bool,
    }

    impl MockProfileRepository {
        fn new() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
                should_fail: true,
            }
        }

        fn with_existing_profile(self, profile: UserProfile) -> Self {
            self.profiles.lock().unwrap().push(profile);
            self
        }
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
            if self.should_fail {
                return Err(DomainError::new(ErrorCode::StorageError, "Repository error"));
            }
            self.profiles.lock().unwrap().push(profile.clone());
            Ok(())
        }

        async fn update(&self, _profile: &UserProfile) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.user_id() == user_id)
                .cloned())
        }

        async fn find_by_id(
            &self,
            _profile_id: UserProfileId,
        ) -> Result<Option<UserProfile>, DomainError> {
            unimplemented!()
        }

        async fn delete(&self, _profile_id: UserProfileId) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn exists_for_user(&self, user_id: &UserId) -> Result<bool, DomainError> {
            Ok(self.find_by_user(user_id).await?.is_some())
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test@example.com").unwrap()
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(builtin_catalog().clone())
    }

    /// Answers every selected question with the given option where it
    /// exists, the first option otherwise.
    fn answers(goals: &GoalSet, preferred: &str) -> Vec<Response> {
        QuestionSelector::select(builtin_catalog(), goals)
            .iter()
            .map(|q| {
                let option = q.find_option(preferred).unwrap_or(&q.options[0]);
                Response::new(q.id.clone(), option.id.clone())
            })
            .collect()
    }

    fn command(goals: GoalSet, responses: Vec<Response>) -> CompleteOnboardingCommand {
        CompleteOnboardingCommand {
            user_id: test_user_id(),
            goals,
            responses,
        }
    }

    #[tokio::test]
    async fn creates_classified_profile() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = CompleteOnboardingHandler::new(repo.clone(), catalog());
        let goals: GoalSet = [Goal::MenstrualComfort].into_iter().collect();

        let result = handler
            .handle(command(goals.clone(), answers(&goals, "cold")), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let stored = repo.find_by_user(&test_user_id()).await.unwrap().unwrap();
        assert_eq!(stored.id(), result.profile_id);
        assert_eq!(stored.goals(), &goals);
        assert_eq!(stored.terrain_profile_id(), Some(result.result.terrain_profile_id()));
        assert_eq!(stored.quiz_version(), 2);
        assert_eq!(stored.quiz_responses().len(), 16);
        assert_eq!(result.result.primary_type(), PrimaryType::ColdCore);
        assert_eq!(result.result.modifier(), None);
        assert_eq!(result.events.len(), 2);
        assert!(matches!(result.events[0], ProfileEvent::ProfileCreated { .. }));
        assert!(matches!(result.events[1], ProfileEvent::TerrainRecalculated { .. }));
    }

    #[tokio::test]
    async fn rejects_existing_profile() {
        let existing = UserProfile::new(test_user_id(), GoalSet::new(), Timestamp::now());
        let repo = Arc::new(MockProfileRepository::new().with_existing_profile(existing));
        let handler = CompleteOnboardingHandler::new(repo, catalog());

        let err = handler
            .handle(
                command(GoalSet::new(), answers(&GoalSet::new(), "cold")),
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn rejects_incomplete_answers() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = CompleteOnboardingHandler::new(repo.clone(), catalog());
        let mut responses = answers(&GoalSet::new(), "cold");
        responses.pop();

        let err = handler
            .handle(command(GoalSet::new(), responses), CommandMetadata::test_fixture())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::IncompleteQuiz);
        assert_eq!(err.details.get("missing"), Some(&"q15_smoking".to_string()));
        assert!(repo.profiles.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_conditional_answer_is_incomplete() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = CompleteOnboardingHandler::new(repo, catalog());
        let goals: GoalSet = [Goal::MenstrualComfort].into_iter().collect();

        let err = handler
            .handle(
                command(goals, answers(&GoalSet::new(), "cold")),
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::IncompleteQuiz);
    }

    #[tokio::test]
    async fn rejects_unknown_option() {
        let repo = Arc::new(MockProfileRepository::new());
        let handler = CompleteOnboardingHandler::new(repo, catalog());
        let mut responses = answers(&GoalSet::new(), "cold");
        responses[0] = Response::new("q1_temperature", "volcanic");

        let err = handler
            .handle(command(GoalSet::new(), responses), CommandMetadata::test_fixture())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MalformedResponse);
    }

    #[tokio::test]
    async fn repository_failure_propagates() {
        let repo = Arc::new(MockProfileRepository::failing());
        let handler = CompleteOnboardingHandler::new(repo, catalog());

        let err = handler
            .handle(
                command(GoalSet::new(), answers(&GoalSet::new(), "cold")),
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
