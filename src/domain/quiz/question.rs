//! Question, option and section definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Axis, GoalPredicate, GoalSet};

/// Thematic group a question belongs to, used for progress display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Temperature,
    Energy,
    Body,
    Cravings,
    Mind,
}

impl Section {
    /// Header shown above the progress bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Temperature => "Your Temperature",
            Section::Energy => "Your Energy",
            Section::Body => "Your Body",
            Section::Cravings => "Your Cravings",
            Section::Mind => "Your Mind",
        }
    }
}

/// One selectable answer and its per-axis contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub label: String,
    /// Signed contribution per axis. Axes not listed contribute zero.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<Axis, i32>,
}

impl QuizOption {
    /// Creates an option with no weights (a neutral answer).
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weights: BTreeMap::new(),
        }
    }

    /// Builder: add (or accumulate) a weight on an axis.
    pub fn weight(mut self, axis: Axis, value: i32) -> Self {
        *self.weights.entry(axis).or_insert(0) += value;
        self
    }

    /// Returns the contribution to an axis, zero if absent.
    pub fn weight_for(&self, axis: Axis) -> i32 {
        self.weights.get(&axis).copied().unwrap_or(0)
    }
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub section: Section,
    pub options: Vec<QuizOption>,
    /// Absent means the question is always asked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_when: Option<GoalPredicate>,
}

impl Question {
    /// Creates an unconditional question with no options yet.
    pub fn new(id: impl Into<String>, title: impl Into<String>, section: Section) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            section,
            options: Vec::new(),
            include_when: None,
        }
    }

    /// Builder: append an option.
    pub fn option(mut self, option: QuizOption) -> Self {
        self.options.push(option);
        self
    }

    /// Builder: make the question conditional.
    pub fn include_when(mut self, predicate: GoalPredicate) -> Self {
        self.include_when = Some(predicate);
        self
    }

    /// Looks up an option by id.
    pub fn find_option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// True if the question has an inclusion predicate.
    pub fn is_conditional(&self) -> bool {
        self.include_when.is_some()
    }

    /// Evaluates the inclusion predicate against the user's goals.
    pub fn applies_to(&self, goals: &GoalSet) -> bool {
        self.include_when
            .as_ref()
            .map_or(true, |predicate| predicate.matches(goals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::Goal;

    fn sample() -> Question {
        Question::new("q1", "How warm are you?", Section::Temperature)
            .option(QuizOption::new("cold", "Cold").weight(Axis::Cold, 2))
            .option(QuizOption::new("neutral", "Fine"))
    }

    #[test]
    fn find_option_by_id() {
        let q = sample();
        assert_eq!(q.find_option("cold").unwrap().label, "Cold");
        assert!(q.find_option("lava").is_none());
    }

    #[test]
    fn weight_for_defaults_to_zero() {
        let q = sample();
        let cold = q.find_option("cold").unwrap();
        assert_eq!(cold.weight_for(Axis::Cold), 2);
        assert_eq!(cold.weight_for(Axis::Heat), 0);
    }

    #[test]
    fn repeated_weight_builder_accumulates() {
        let opt = QuizOption::new("x", "X").weight(Axis::Heat, 1).weight(Axis::Heat, 2);
        assert_eq!(opt.weight_for(Axis::Heat), 3);
    }

    #[test]
    fn unconditional_question_applies_to_everyone() {
        let q = sample();
        assert!(!q.is_conditional());
        assert!(q.applies_to(&GoalSet::new()));
    }

    #[test]
    fn conditional_question_follows_predicate() {
        let q = sample().include_when(GoalPredicate::AnyOf(vec![Goal::MenstrualComfort]));
        assert!(q.is_conditional());
        assert!(!q.applies_to(&GoalSet::new()));
        assert!(q.applies_to(&[Goal::MenstrualComfort].into_iter().collect()));
    }

    #[test]
    fn section_labels() {
        assert_eq!(Section::Temperature.label(), "Your Temperature");
        assert_eq!(Section::Mind.label(), "Your Mind");
    }
}
