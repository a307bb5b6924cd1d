//! Question Selector - goal-driven filtering and progress labelling.
//!
//! Selection is pure: the same catalog and goals always give the same
//! ordered list, so an edit session and a fresh onboarding agree on
//! indices and progress fractions.

use serde::Serialize;

use super::{Catalog, GoalSet, Question, Section};

/// A contiguous run of questions sharing a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSpan {
    pub section: Section,
    pub label: &'static str,
    pub start: usize,
    pub len: usize,
}

/// Stateless question selection functions.
pub struct QuestionSelector;

impl QuestionSelector {
    /// Returns the questions that apply to `goals`, in catalog order.
    ///
    /// # Edge Cases
    /// - No goals: only unconditional questions (the base set)
    /// - Empty catalog: empty list
    pub fn select(catalog: &Catalog, goals: &GoalSet) -> Vec<Question> {
        catalog
            .questions()
            .iter()
            .filter(|q| q.applies_to(goals))
            .cloned()
            .collect()
    }

    /// Section label for the question at `index` of the selected list.
    ///
    /// Derived from the question actually at that position, so labels stay
    /// correct whether or not conditional questions were included. Past the
    /// end, the last question's section is used; an empty list reads as
    /// "Your Body".
    pub fn section_label(questions: &[Question], index: usize) -> &'static str {
        questions
            .get(index)
            .or_else(|| questions.last())
            .map(|q| q.section)
            .unwrap_or(Section::Body)
            .label()
    }

    /// Groups the selected list into contiguous section runs.
    pub fn section_spans(questions: &[Question]) -> Vec<SectionSpan> {
        let mut spans: Vec<SectionSpan> = Vec::new();

        for (index, question) in questions.iter().enumerate() {
            match spans.last_mut() {
                Some(span) if span.section == question.section => span.len += 1,
                _ => spans.push(SectionSpan {
                    section: question.section,
                    label: question.section.label(),
                    start: index,
                    len: 1,
                }),
            }
        }

        spans
    }

    /// Fraction of the quiz reached when viewing question `index`.
    ///
    /// Returns 0.0 for an empty quiz and clamps to 1.0 past the end.
    pub fn progress_fraction(index: usize, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        ((index + 1).min(count)) as f64 / count as f64
    }
}
