//! UserProfile aggregate root.

use serde::{Deserialize, Serialize};

use super::{ProfileEvent, ProfileUpdater, TerrainUpdate};
use crate::domain::foundation::{Timestamp, UserId, UserProfileId};
use crate::domain::quiz::{
    Catalog, CatalogVersion, GoalSet, LifestyleField, PrimaryType, Response, ResponseLedger,
};
use crate::domain::scoring::{ScoreVector, ScoringResult, TerrainProfileId};

/// A user's stored constitution profile.
///
/// Identity fields (`id`, `user_id`, `created_at`) are fixed at creation.
/// Everything derived from the quiz is replaced as a unit by
/// [`UserProfile::apply_terrain`]; a `quiz_version` of 0 means the profile
/// has never been classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserProfileId,
    user_id: UserId,
    #[serde(default)]
    goals: GoalSet,
    #[serde(default)]
    terrain_profile_id: Option<TerrainProfileId>,
    #[serde(default)]
    terrain_vector: ScoreVector,
    #[serde(default)]
    terrain_modifier: Option<PrimaryType>,
    #[serde(default)]
    quiz_responses: Vec<Response>,
    #[serde(default)]
    alcohol_frequency: Option<String>,
    #[serde(default)]
    smoking_status: Option<String>,
    #[serde(default)]
    quiz_version: u32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl UserProfile {
    /// Creates an unclassified profile.
    pub fn new(user_id: UserId, goals: GoalSet, timestamp: Timestamp) -> Self {
        Self {
            id: UserProfileId::new(),
            user_id,
            goals,
            terrain_profile_id: None,
            terrain_vector: ScoreVector::default(),
            terrain_modifier: None,
            quiz_responses: Vec::new(),
            alcohol_frequency: None,
            smoking_status: None,
            quiz_version: 0,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Creates a profile already carrying an onboarding classification.
    pub fn create(
        user_id: UserId,
        goals: GoalSet,
        result: &ScoringResult,
        ledger: &ResponseLedger,
        catalog: &Catalog,
        timestamp: Timestamp,
    ) -> Self {
        let mut profile = Self::new(user_id, goals, timestamp);
        ProfileUpdater::apply(&mut profile, result, ledger, catalog, timestamp);
        profile
    }

    // Getters
    pub fn id(&self) -> UserProfileId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    pub fn terrain_profile_id(&self) -> Option<&TerrainProfileId> {
        self.terrain_profile_id.as_ref()
    }

    pub fn terrain_vector(&self) -> &ScoreVector {
        &self.terrain_vector
    }

    pub fn terrain_modifier(&self) -> Option<PrimaryType> {
        self.terrain_modifier
    }

    pub fn quiz_responses(&self) -> &[Response] {
        &self.quiz_responses
    }

    pub fn alcohol_frequency(&self) -> Option<&str> {
        self.alcohol_frequency.as_deref()
    }

    pub fn smoking_status(&self) -> Option<&str> {
        self.smoking_status.as_deref()
    }

    pub fn lifestyle(&self, field: LifestyleField) -> Option<&str> {
        match field {
            LifestyleField::AlcoholFrequency => self.alcohol_frequency(),
            LifestyleField::SmokingStatus => self.smoking_status(),
        }
    }

    pub fn quiz_version(&self) -> u32 {
        self.quiz_version
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The stored primary type, if the stored id is a known one.
    pub fn primary_type(&self) -> Option<PrimaryType> {
        self.terrain_profile_id
            .as_ref()
            .and_then(TerrainProfileId::primary_type)
    }

    pub fn is_classified(&self) -> bool {
        self.quiz_version > 0
    }

    /// True when the profile was classified under an older scheme (or never).
    pub fn needs_retake(&self, current: CatalogVersion) -> bool {
        self.quiz_version < current.as_u32()
    }

    /// Replaces declared goals. The stored terrain is left as is until the
    /// quiz is taken again.
    pub fn set_goals(&mut self, goals: GoalSet, timestamp: Timestamp) -> ProfileEvent {
        self.goals = goals.clone();
        self.updated_at = timestamp;

        ProfileEvent::GoalsUpdated {
            profile_id: self.id,
            goals,
            updated_at: timestamp,
        }
    }

    /// Overwrites every quiz-derived field in one step.
    pub fn apply_terrain(&mut self, update: TerrainUpdate, timestamp: Timestamp) -> ProfileEvent {
        let previous = self.terrain_profile_id.replace(update.terrain_profile_id.clone());

        self.terrain_vector = update.vector;
        self.terrain_modifier = update.modifier;
        self.quiz_responses = update.responses;
        self.alcohol_frequency = update.alcohol_frequency;
        self.smoking_status = update.smoking_status;
        self.quiz_version = update.quiz_version;
        self.updated_at = timestamp;

        ProfileEvent::TerrainRecalculated {
            profile_id: self.id,
            previous,
            current: update.terrain_profile_id,
            modifier: update.modifier,
            quiz_version: update.quiz_version,
            recalculated_at: timestamp,
        }
    }

    /// Event describing this profile's creation.
    pub fn created_event(&self) -> ProfileEvent {
        ProfileEvent::ProfileCreated {
            profile_id: self.id,
            user_id: self.user_id.clone(),
            created_at: self.created_at,
        }
    }
}
