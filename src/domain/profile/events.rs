//! Domain events for the user profile.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, UserProfileId};
use crate::domain::quiz::{GoalSet, PrimaryType};
use crate::domain::scoring::TerrainProfileId;

/// Events emitted by profile state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileEvent {
    /// Profile record created at onboarding
    ProfileCreated {
        profile_id: UserProfileId,
        user_id: UserId,
        created_at: Timestamp,
    },

    /// Classification written to the profile
    TerrainRecalculated {
        profile_id: UserProfileId,
        previous: Option<TerrainProfileId>,
        current: TerrainProfileId,
        modifier: Option<PrimaryType>,
        quiz_version: u32,
        recalculated_at: Timestamp,
    },

    /// Declared goals replaced
    GoalsUpdated {
        profile_id: UserProfileId,
        goals: GoalSet,
        updated_at: Timestamp,
    },
}

impl ProfileEvent {
    pub fn profile_id(&self) -> UserProfileId {
        match self {
            ProfileEvent::ProfileCreated { profile_id, .. }
            | ProfileEvent::TerrainRecalculated { profile_id, .. }
            | ProfileEvent::GoalsUpdated { profile_id, .. } => *profile_id,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            ProfileEvent::ProfileCreated { .. } => "profile.created",
            ProfileEvent::TerrainRecalculated { .. } => "profile.terrain_recalculated",
            ProfileEvent::GoalsUpdated { .. } => "profile.goals_updated",
        }
    }

    /// True for a recalculation that moved the profile to a different terrain.
    pub fn is_terrain_change(&self) -> bool {
        match self {
            ProfileEvent::TerrainRecalculated {
                previous, current, ..
            } => previous.as_ref() != Some(current),
            _ => false,
        }
    }
}
