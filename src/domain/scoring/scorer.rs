//! Terrain Scorer - folds recorded answers into a classification.
//!
//! # Algorithm
//!
//! 1. Start from a zero score per catalog axis.
//! 2. For each selected question with an answer, add the chosen option's
//!    weights. Unanswered questions contribute nothing; ledger entries for
//!    questions outside the selected list are ignored.
//! 3. Rank axes by score, breaking ties by catalog axis order.
//! 4. The top axis is the primary type. The runner-up becomes the modifier
//!    when the catalog's modifier rule admits it.
//!
//! An all-zero vector resolves to the first catalog axis with no modifier.

use tracing::debug;

use super::{ClassificationError, ScoreVector, ScoringResult};
use crate::domain::quiz::{Catalog, Question, ResponseLedger};

/// Stateless classification functions.
pub struct TerrainScorer;

impl TerrainScorer {
    /// Classifies the answers in `ledger` against the selected `questions`.
    ///
    /// # Errors
    /// - `UnknownOption` if an answer to a selected question names an
    ///   option that question does not offer
    pub fn classify(
        catalog: &Catalog,
        questions: &[Question],
        ledger: &ResponseLedger,
    ) -> Result<ScoringResult, ClassificationError> {
        let vector = Self::score(catalog, questions, ledger)?;
        let result = Self::resolve(catalog, vector)?;

        debug!(
            catalog_version = %catalog.version(),
            answered = ledger.answered_count(questions),
            ignored = ledger.stale_entries(questions).len(),
            primary = %result.terrain_profile_id(),
            modifier = ?result.modifier(),
            "Classified quiz responses"
        );

        Ok(result)
    }

    /// Accumulates the score vector without resolving a type.
    pub fn score(
        catalog: &Catalog,
        questions: &[Question],
        ledger: &ResponseLedger,
    ) -> Result<ScoreVector, ClassificationError> {
        let mut vector = ScoreVector::zeroed(catalog.axes());

        for question in questions {
            let Some(option_id) = ledger.answer_for(&question.id) else {
                continue;
            };
            let option = question
                .find_option(option_id)
                .ok_or_else(|| ClassificationError::unknown_option(&question.id, option_id))?;

            for (axis, weight) in &option.weights {
                vector.add(*axis, *weight);
            }
        }

        Ok(vector)
    }

    /// Resolves primary type and modifier from an accumulated vector.
    pub fn resolve(
        catalog: &Catalog,
        vector: ScoreVector,
    ) -> Result<ScoringResult, ClassificationError> {
        let ranked = vector.ranked(catalog.axes());
        let mut ranked = ranked.into_iter();

        let (primary_axis, primary_score) = ranked.next().ok_or(ClassificationError::NoAxes)?;
        let rule = catalog.modifier_rule();
        let modifier = ranked
            .next()
            .filter(|(_, runner_up)| rule.admits(primary_score, *runner_up))
            .map(|(axis, _)| axis.primary_type());

        Ok(ScoringResult::new(vector, primary_axis.primary_type(), modifier))
    }
}
