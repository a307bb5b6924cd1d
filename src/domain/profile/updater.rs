//! Profile Updater - commits a classification to a stored profile.
//!
//! Turns a scoring result plus the ledger it came from into a
//! [`TerrainUpdate`] and applies it. The profile keeps its identity; only
//! quiz-derived fields change.

use tracing::debug;

use super::{ProfileEvent, UserProfile};
use crate::domain::foundation::Timestamp;
use crate::domain::quiz::{Catalog, LifestyleField, PrimaryType, Response, ResponseLedger};
use crate::domain::scoring::{ScoreVector, ScoringResult, TerrainProfileId};

/// Every quiz-derived profile field, computed ahead of the write.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainUpdate {
    pub vector: ScoreVector,
    pub terrain_profile_id: TerrainProfileId,
    pub modifier: Option<PrimaryType>,
    /// Full ledger contents, including answers to unselected questions
    pub responses: Vec<Response>,
    pub alcohol_frequency: Option<String>,
    pub smoking_status: Option<String>,
    pub quiz_version: u32,
}

/// Stateless profile update functions.
pub struct ProfileUpdater;

impl ProfileUpdater {
    /// Computes the field values a classification writes.
    ///
    /// Lifestyle fields copy the option id answered for their bound
    /// question, or become None when that question was not answered.
    pub fn plan(result: &ScoringResult, ledger: &ResponseLedger, catalog: &Catalog) -> TerrainUpdate {
        let lifestyle = |field: LifestyleField| {
            catalog
                .lifestyle_question(field)
                .and_then(|question_id| ledger.answer_for(question_id))
                .map(str::to_string)
        };

        TerrainUpdate {
            vector: result.vector().clone(),
            terrain_profile_id: result.terrain_profile_id().clone(),
            modifier: result.modifier(),
            responses: ledger.responses().to_vec(),
            alcohol_frequency: lifestyle(LifestyleField::AlcoholFrequency),
            smoking_status: lifestyle(LifestyleField::SmokingStatus),
            quiz_version: catalog.version().as_u32(),
        }
    }

    /// Writes a classification into `profile` in place.
    pub fn apply(
        profile: &mut UserProfile,
        result: &ScoringResult,
        ledger: &ResponseLedger,
        catalog: &Catalog,
        timestamp: Timestamp,
    ) -> ProfileEvent {
        let update = Self::plan(result, ledger, catalog);
        let event = profile.apply_terrain(update, timestamp);

        debug!(
            profile_id = %profile.id(),
            terrain = %result.terrain_profile_id(),
            quiz_version = profile.quiz_version(),
            changed = event.is_terrain_change(),
            "Applied terrain to profile"
        );

        event
    }
}
