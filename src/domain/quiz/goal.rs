//! Goal tags and the inclusion predicates evaluated against them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A goal the user declares during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    BetterSleep,
    MoreEnergy,
    Digestion,
    StressRelief,
    MenstrualComfort,
    SkinHealth,
}

/// The user's declared goals. Ordered so serialization is stable.
pub type GoalSet = BTreeSet<Goal>;

/// Condition under which a conditional question is included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPredicate {
    /// Included when the user holds at least one of these goals
    AnyOf(Vec<Goal>),
    /// Included only when the user holds every one of these goals
    AllOf(Vec<Goal>),
}

impl GoalPredicate {
    /// Evaluates the predicate against a goal set.
    ///
    /// An empty `AnyOf` never matches; an empty `AllOf` always does.
    pub fn matches(&self, goals: &GoalSet) -> bool {
        match self {
            GoalPredicate::AnyOf(required) => required.iter().any(|g| goals.contains(g)),
            GoalPredicate::AllOf(required) => required.iter().all(|g| goals.contains(g)),
        }
    }
}
