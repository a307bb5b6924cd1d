//! Scoring results, terrain profile ids and before/after comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ScoreVector;
use crate::domain::quiz::PrimaryType;

/// Stable identifier of a classification outcome.
///
/// Derived only from the primary type, so two different vectors with the
/// same dominant axis share an id. Stored ids may predate the current
/// catalog, so any string is accepted on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerrainProfileId(String);

impl TerrainProfileId {
    /// The id for a primary type.
    pub fn for_type(primary: PrimaryType) -> Self {
        Self(primary.id().to_string())
    }

    /// Wraps a stored id without interpreting it.
    pub fn from_stored(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary type this id names, if it is a known one.
    pub fn primary_type(&self) -> Option<PrimaryType> {
        self.0.parse().ok()
    }
}

impl From<PrimaryType> for TerrainProfileId {
    fn from(primary: PrimaryType) -> Self {
        Self::for_type(primary)
    }
}

impl fmt::Display for TerrainProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full output of one classification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringResult {
    vector: ScoreVector,
    primary_type: PrimaryType,
    terrain_profile_id: TerrainProfileId,
    modifier: Option<PrimaryType>,
}

impl ScoringResult {
    /// Assembles a result; the profile id is derived from `primary_type`.
    pub fn new(vector: ScoreVector, primary_type: PrimaryType, modifier: Option<PrimaryType>) -> Self {
        Self {
            vector,
            primary_type,
            terrain_profile_id: TerrainProfileId::for_type(primary_type),
            modifier,
        }
    }

    pub fn vector(&self) -> &ScoreVector {
        &self.vector
    }

    pub fn primary_type(&self) -> PrimaryType {
        self.primary_type
    }

    pub fn terrain_profile_id(&self) -> &TerrainProfileId {
        &self.terrain_profile_id
    }

    pub fn modifier(&self) -> Option<PrimaryType> {
        self.modifier
    }

    pub fn nickname(&self) -> &'static str {
        self.primary_type.nickname()
    }

    /// Compares against the id stored before this run.
    pub fn shift_from(&self, previous: Option<&TerrainProfileId>) -> TerrainShift {
        match previous {
            Some(id) if *id == self.terrain_profile_id => TerrainShift::Confirmed {
                current: self.primary_type,
            },
            _ => TerrainShift::Shifted {
                previous: previous.and_then(TerrainProfileId::primary_type),
                current: self.primary_type,
            },
        }
    }
}

/// Whether a retake confirmed the stored terrain or moved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerrainShift {
    /// Same terrain as before
    Confirmed { current: PrimaryType },
    /// Different terrain; `previous` is None when nothing (or an unknown
    /// id) was stored
    Shifted {
        previous: Option<PrimaryType>,
        current: PrimaryType,
    },
}

impl TerrainShift {
    pub fn is_changed(&self) -> bool {
        matches!(self, TerrainShift::Shifted { .. })
    }

    pub fn current(&self) -> PrimaryType {
        match self {
            TerrainShift::Confirmed { current } | TerrainShift::Shifted { current, .. } => *current,
        }
    }

    /// Nickname of the terrain before the retake, "Unknown" if unavailable.
    pub fn previous_nickname(&self) -> &'static str {
        match self {
            TerrainShift::Confirmed { current } => current.nickname(),
            TerrainShift::Shifted { previous, .. } => {
                previous.map(PrimaryType::nickname).unwrap_or("Unknown")
            }
        }
    }

    pub fn headline(&self) -> &'static str {
        if self.is_changed() {
            "Your terrain has shifted"
        } else {
            "Your terrain is confirmed"
        }
    }
}
