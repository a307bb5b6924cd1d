//! Scoring axes and the constitution categories they map to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One semantic scoring dimension.
///
/// The set is closed. A catalog declares which of these it scores and in
/// what priority order; that order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Runs cold, seeks warmth
    Cold,
    /// Runs hot, seeks cooling
    Heat,
    /// Low reserves, tires easily
    Depletion,
    /// Heaviness, bloating, sluggish digestion
    Dampness,
    /// Dry skin, thirst, constipation
    Dryness,
    /// Tension, stuck stress, irregularity
    Stagnation,
    /// Racing mind, light sleep
    Restlessness,
}

impl Axis {
    /// Every axis in declaration order.
    pub const ALL: [Axis; 7] = [
        Axis::Cold,
        Axis::Heat,
        Axis::Depletion,
        Axis::Dampness,
        Axis::Dryness,
        Axis::Stagnation,
        Axis::Restlessness,
    ];

    /// Returns the constitution category this axis selects when dominant.
    pub fn primary_type(self) -> PrimaryType {
        match self {
            Axis::Cold => PrimaryType::ColdCore,
            Axis::Heat => PrimaryType::WarmCore,
            Axis::Depletion => PrimaryType::LowBattery,
            Axis::Dampness => PrimaryType::DampTerrain,
            Axis::Dryness => PrimaryType::DryTerrain,
            Axis::Stagnation => PrimaryType::StuckFlow,
            Axis::Restlessness => PrimaryType::BusyMind,
        }
    }

    /// Returns the snake_case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Cold => "cold",
            Axis::Heat => "heat",
            Axis::Depletion => "depletion",
            Axis::Dampness => "dampness",
            Axis::Dryness => "dryness",
            Axis::Stagnation => "stagnation",
            Axis::Restlessness => "restlessness",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Discrete constitution category produced by classification.
///
/// The serialized form is the stable identifier that also serves as the
/// terrain profile id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryType {
    ColdCore,
    WarmCore,
    LowBattery,
    DampTerrain,
    DryTerrain,
    StuckFlow,
    BusyMind,
}

impl PrimaryType {
    /// Every category in declaration order.
    pub const ALL: [PrimaryType; 7] = [
        PrimaryType::ColdCore,
        PrimaryType::WarmCore,
        PrimaryType::LowBattery,
        PrimaryType::DampTerrain,
        PrimaryType::DryTerrain,
        PrimaryType::StuckFlow,
        PrimaryType::BusyMind,
    ];

    /// Stable identifier. Never change these once shipped; stored profiles
    /// reference them.
    pub fn id(self) -> &'static str {
        match self {
            PrimaryType::ColdCore => "cold_core",
            PrimaryType::WarmCore => "warm_core",
            PrimaryType::LowBattery => "low_battery",
            PrimaryType::DampTerrain => "damp_terrain",
            PrimaryType::DryTerrain => "dry_terrain",
            PrimaryType::StuckFlow => "stuck_flow",
            PrimaryType::BusyMind => "busy_mind",
        }
    }

    /// Display nickname shown on result screens.
    pub fn nickname(self) -> &'static str {
        match self {
            PrimaryType::ColdCore => "Cool Core",
            PrimaryType::WarmCore => "High Flame",
            PrimaryType::LowBattery => "Low Battery",
            PrimaryType::DampTerrain => "Heavy Cloud",
            PrimaryType::DryTerrain => "Desert Bloom",
            PrimaryType::StuckFlow => "Tight Coil",
            PrimaryType::BusyMind => "Busy Mind",
        }
    }

    /// The axis whose dominance selects this category.
    pub fn axis(self) -> Axis {
        match self {
            PrimaryType::ColdCore => Axis::Cold,
            PrimaryType::WarmCore => Axis::Heat,
            PrimaryType::LowBattery => Axis::Depletion,
            PrimaryType::DampTerrain => Axis::Dampness,
            PrimaryType::DryTerrain => Axis::Dryness,
            PrimaryType::StuckFlow => Axis::Stagnation,
            PrimaryType::BusyMind => Axis::Restlessness,
        }
    }
}

impl fmt::Display for PrimaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nickname())
    }
}

impl FromStr for PrimaryType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimaryType::ALL
            .iter()
            .copied()
            .find(|t| t.id() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("primary_type", format!("unknown id '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_axis_maps_to_a_distinct_type() {
        let mut seen: Vec<PrimaryType> = Axis::ALL.iter().map(|a| a.primary_type()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), Axis::ALL.len());
    }

    #[test]
    fn axis_and_type_tables_are_inverse() {
        for axis in Axis::ALL {
            assert_eq!(axis.primary_type().axis(), axis);
        }
        for t in PrimaryType::ALL {
            assert_eq!(t.axis().primary_type(), t);
        }
    }

    #[test]
    fn primary_type_id_matches_serde_name() {
        for t in PrimaryType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.id()));
        }
    }

    #[test]
    fn primary_type_parses_from_id() {
        assert_eq!("cold_core".parse::<PrimaryType>().unwrap(), PrimaryType::ColdCore);
        assert_eq!("busy_mind".parse::<PrimaryType>().unwrap(), PrimaryType::BusyMind);
        assert!("cold-core".parse::<PrimaryType>().is_err());
        assert!("".parse::<PrimaryType>().is_err());
    }

    #[test]
    fn display_uses_nickname() {
        assert_eq!(PrimaryType::WarmCore.to_string(), "High Flame");
        assert_eq!(Axis::Dampness.to_string(), "dampness");
    }

    #[test]
    fn axis_wire_names_match_serde() {
        for axis in Axis::ALL {
            let json = serde_json::to_string(&axis).unwrap();
            assert_eq!(json, format!("\"{}\"", axis.as_str()));
        }
    }
}
