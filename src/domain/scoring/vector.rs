//! ScoreVector - accumulated per-axis scores for one classification run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::quiz::Axis;

/// Per-axis accumulated score.
///
/// Holds exactly one entry per axis of the catalog it was built for.
/// Scores are integers, so folding contributions in any order gives the
/// same result; nothing is clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreVector {
    scores: BTreeMap<Axis, i64>,
}

impl ScoreVector {
    /// A vector with every given axis at zero.
    pub fn zeroed(axes: &[Axis]) -> Self {
        Self {
            scores: axes.iter().map(|a| (*a, 0)).collect(),
        }
    }

    /// Builds a vector from explicit scores.
    pub fn from_scores(scores: impl IntoIterator<Item = (Axis, i64)>) -> Self {
        Self {
            scores: scores.into_iter().collect(),
        }
    }

    /// Adds a contribution to an axis already present in the vector.
    ///
    /// Returns false (and changes nothing) for an axis the vector does not
    /// carry.
    pub fn add(&mut self, axis: Axis, weight: i32) -> bool {
        match self.scores.get_mut(&axis) {
            Some(score) => {
                *score += i64::from(weight);
                true
            }
            None => false,
        }
    }

    /// Score for an axis, zero if the axis is not carried.
    pub fn get(&self, axis: Axis) -> i64 {
        self.scores.get(&axis).copied().unwrap_or(0)
    }

    pub fn contains(&self, axis: Axis) -> bool {
        self.scores.contains_key(&axis)
    }

    /// Entries ordered by axis declaration.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, i64)> + '_ {
        self.scores.iter().map(|(a, s)| (*a, *s))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// True when every carried axis is at zero.
    pub fn is_zero(&self) -> bool {
        self.scores.values().all(|s| *s == 0)
    }

    /// Axes of `priority` ordered by descending score.
    ///
    /// Equal scores keep their relative `priority` order, which is what
    /// makes tie-breaks deterministic.
    pub fn ranked(&self, priority: &[Axis]) -> Vec<(Axis, i64)> {
        let mut ranked: Vec<(Axis, i64)> = priority.iter().map(|a| (*a, self.get(*a))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_has_one_entry_per_axis() {
        let v = ScoreVector::zeroed(&[Axis::Cold, Axis::Heat, Axis::Dryness]);
        assert_eq!(v.len(), 3);
        assert!(v.is_zero());
        assert!(v.contains(Axis::Dryness));
        assert!(!v.contains(Axis::Dampness));
    }

    #[test]
    fn add_accumulates_signed_weights() {
        let mut v = ScoreVector::zeroed(&[Axis::Cold, Axis::Heat]);
        assert!(v.add(Axis::Cold, 2));
        assert!(v.add(Axis::Cold, -3));
        assert!(v.add(Axis::Heat, 1));
        assert_eq!(v.get(Axis::Cold), -1);
        assert_eq!(v.get(Axis::Heat), 1);
        assert!(!v.is_zero());
    }

    #[test]
    fn add_ignores_axes_not_carried() {
        let mut v = ScoreVector::zeroed(&[Axis::Cold]);
        assert!(!v.add(Axis::Heat, 5));
        assert_eq!(v.len(), 1);
        assert_eq!(v.get(Axis::Heat), 0);
    }

    #[test]
    fn ranked_breaks_ties_by_priority() {
        let v = ScoreVector::from_scores([(Axis::Cold, 2), (Axis::Heat, 2), (Axis::Dryness, 1)]);

        let ranked = v.ranked(&[Axis::Heat, Axis::Cold, Axis::Dryness]);
        assert_eq!(ranked, vec![(Axis::Heat, 2), (Axis::Cold, 2), (Axis::Dryness, 1)]);

        let ranked = v.ranked(&[Axis::Dryness, Axis::Cold, Axis::Heat]);
        assert_eq!(ranked, vec![(Axis::Cold, 2), (Axis::Heat, 2), (Axis::Dryness, 1)]);
    }

    #[test]
    fn serializes_as_axis_map() {
        let v = ScoreVector::from_scores([(Axis::Heat, 3), (Axis::Cold, 1)]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"cold":1,"heat":3}"#);
        let back: ScoreVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
