//! Response Ledger - recorded answers keyed by question.
//!
//! The ledger keeps at most one entry per question id: recording again
//! replaces the previous answer and moves it to the end. It does not check
//! option ids against the catalog; the scorer does that when folding.

use serde::{Deserialize, Serialize};

use super::Question;

/// A single recorded answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Response {
    pub question_id: String,
    pub option_id: String,
}

impl Response {
    pub fn new(question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
        }
    }
}

/// Ordered, question-keyed collection of answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseLedger {
    entries: Vec<Response>,
}

impl ResponseLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from a stored response list.
    ///
    /// Applies replace semantics, so a list holding duplicates collapses to
    /// the last answer per question.
    pub fn from_responses(responses: impl IntoIterator<Item = Response>) -> Self {
        let mut ledger = Self::new();
        for response in responses {
            ledger.record(response.question_id, response.option_id);
        }
        ledger
    }

    /// Records an answer, replacing any earlier answer to the same question.
    pub fn record(&mut self, question_id: impl Into<String>, option_id: impl Into<String>) {
        let response = Response::new(question_id, option_id);
        self.entries.retain(|r| r.question_id != response.question_id);
        self.entries.push(response);
    }

    /// The option chosen for a question, if answered.
    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.question_id == question_id)
            .map(|r| r.option_id.as_str())
    }

    /// True iff every question in `questions` has an answer.
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions.iter().all(|q| self.answer_for(&q.id).is_some())
    }

    /// Number of questions in `questions` that have an answer.
    pub fn answered_count(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .filter(|q| self.answer_for(&q.id).is_some())
            .count()
    }

    /// Ids of unanswered questions, in question order.
    pub fn unanswered<'q>(&self, questions: &'q [Question]) -> Vec<&'q str> {
        questions
            .iter()
            .filter(|q| self.answer_for(&q.id).is_none())
            .map(|q| q.id.as_str())
            .collect()
    }

    /// Entries whose question is not part of `questions`.
    ///
    /// These come from a previous, differently filtered session. They are
    /// kept so a later goal change can make them relevant again.
    pub fn stale_entries(&self, questions: &[Question]) -> Vec<&Response> {
        self.entries
            .iter()
            .filter(|r| !questions.iter().any(|q| q.id == r.question_id))
            .collect()
    }

    /// All entries in recording order.
    pub fn responses(&self) -> &[Response] {
        &self.entries
    }

    pub fn into_responses(self) -> Vec<Response> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
