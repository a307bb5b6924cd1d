//! QuizSession - caller-owned state for walking through a quiz.
//!
//! A session pins the selected question list at creation, tracks the
//! current position and collects answers in a ledger. Nothing is persisted
//! here; `finish` hands the result and ledger to whoever commits them.

use std::sync::Arc;
use thiserror::Error;

use super::{Catalog, GoalSet, Question, QuestionSelector, ResponseLedger};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::UserProfile;
use crate::domain::scoring::{ClassificationError, ScoringResult, TerrainScorer};

/// Errors raised by session navigation and answering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizSessionError {
    #[error("No questions apply to the selected goals")]
    NoQuestions,

    #[error("Option '{option_id}' is not an answer to question '{question_id}'")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },

    #[error("Question '{0}' must be answered before moving on")]
    Unanswered(String),

    #[error("Question index {index} is out of range (0..{count})")]
    OutOfRange { index: usize, count: usize },

    #[error("Quiz is incomplete, {} question(s) unanswered", .missing.len())]
    Incomplete { missing: Vec<String> },

    #[error(transparent)]
    Classification(#[from] ClassificationError),
}

impl From<QuizSessionError> for DomainError {
    fn from(err: QuizSessionError) -> Self {
        match err {
            QuizSessionError::Classification(inner) => inner.into(),
            QuizSessionError::UnknownOption { .. } => {
                DomainError::new(ErrorCode::MalformedResponse, err.to_string())
            }
            QuizSessionError::Unanswered(ref question_id) => {
                DomainError::new(ErrorCode::IncompleteQuiz, err.to_string())
                    .with_detail("question_id", question_id.clone())
            }
            QuizSessionError::Incomplete { ref missing } => {
                DomainError::new(ErrorCode::IncompleteQuiz, err.to_string())
                    .with_detail("missing", missing.join(","))
            }
            QuizSessionError::NoQuestions | QuizSessionError::OutOfRange { .. } => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
            }
        }
    }
}

/// Outcome of a finished session, ready to be committed to a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedQuiz {
    pub goals: GoalSet,
    pub result: ScoringResult,
    pub ledger: ResponseLedger,
}

/// In-progress quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: Arc<Catalog>,
    goals: GoalSet,
    questions: Vec<Question>,
    ledger: ResponseLedger,
    current: usize,
}

impl QuizSession {
    /// Starts a fresh quiz for a user who declared `goals`.
    pub fn onboarding(catalog: Arc<Catalog>, goals: GoalSet) -> Result<Self, QuizSessionError> {
        Self::resume(catalog, goals, ResponseLedger::new())
    }

    /// Starts an edit of a profile's existing answers.
    ///
    /// Questions are selected from the profile's current goals; earlier
    /// answers are preselected, including ones for questions no longer
    /// selected (kept but not scored).
    pub fn edit(catalog: Arc<Catalog>, profile: &UserProfile) -> Result<Self, QuizSessionError> {
        let ledger = ResponseLedger::from_responses(profile.quiz_responses().iter().cloned());
        Self::resume(catalog, profile.goals().clone(), ledger)
    }

    /// Starts at the first question with an existing ledger.
    pub fn resume(
        catalog: Arc<Catalog>,
        goals: GoalSet,
        ledger: ResponseLedger,
    ) -> Result<Self, QuizSessionError> {
        let questions = QuestionSelector::select(&catalog, &goals);
        if questions.is_empty() {
            return Err(QuizSessionError::NoQuestions);
        }

        Ok(Self {
            catalog,
            goals,
            questions,
            ledger,
            current: 0,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn ledger(&self) -> &ResponseLedger {
        &self.ledger
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question at the current position.
    pub fn current_question(&self) -> &Question {
        // current < questions.len() is kept by every navigation method
        &self.questions[self.current]
    }

    /// Records an answer for the current question.
    pub fn answer(&mut self, option_id: &str) -> Result<(), QuizSessionError> {
        let question = self.current_question();
        if question.find_option(option_id).is_none() {
            return Err(QuizSessionError::UnknownOption {
                question_id: question.id.clone(),
                option_id: option_id.to_string(),
            });
        }

        let question_id = question.id.clone();
        self.ledger.record(question_id, option_id);
        Ok(())
    }

    /// The option currently chosen for the current question.
    pub fn selected_option(&self) -> Option<&str> {
        self.ledger.answer_for(&self.current_question().id)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.questions
            .get(index)
            .map_or(false, |q| self.ledger.answer_for(&q.id).is_some())
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Moves to the next question.
    ///
    /// # Errors
    /// - `Unanswered` if the current question has no answer
    /// - `OutOfRange` when already on the last question
    pub fn next(&mut self) -> Result<(), QuizSessionError> {
        if self.selected_option().is_none() {
            return Err(QuizSessionError::Unanswered(self.current_question().id.clone()));
        }
        self.go_to(self.current + 1)
    }

    /// Moves to the previous question; a no-op on the first one.
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jumps to any question by index.
    pub fn go_to(&mut self, index: usize) -> Result<(), QuizSessionError> {
        if index >= self.questions.len() {
            return Err(QuizSessionError::OutOfRange {
                index,
                count: self.questions.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Fraction of the quiz reached at the current position.
    pub fn progress(&self) -> f64 {
        QuestionSelector::progress_fraction(self.current, self.questions.len())
    }

    pub fn section_label(&self) -> &'static str {
        QuestionSelector::section_label(&self.questions, self.current)
    }

    pub fn is_complete(&self) -> bool {
        self.ledger.is_complete(&self.questions)
    }

    /// Classifies whatever has been answered so far.
    pub fn preview(&self) -> Result<ScoringResult, QuizSessionError> {
        Ok(TerrainScorer::classify(&self.catalog, &self.questions, &self.ledger)?)
    }

    /// Classifies a completed quiz.
    ///
    /// # Errors
    /// - `Incomplete` listing unanswered question ids
    pub fn finish(&self) -> Result<CompletedQuiz, QuizSessionError> {
        let missing = self.ledger.unanswered(&self.questions);
        if !missing.is_empty() {
            return Err(QuizSessionError::Incomplete {
                missing: missing.into_iter().map(str::to_string).collect(),
            });
        }

        let result = TerrainScorer::classify(&self.catalog, &self.questions, &self.ledger)?;
        Ok(CompletedQuiz {
            goals: self.goals.clone(),
            result,
            ledger: self.ledger.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::quiz::{
        builtin_catalog, Axis, CatalogVersion, Goal, GoalPredicate, PrimaryType, QuizOption,
        Section, MENSTRUAL_QUESTION_ID,
    };

    fn catalog() -> Arc<Catalog> {
        Arc::new(builtin_catalog().clone())
    }

    fn answer_all_first_options(session: &mut QuizSession) {
        session.go_to(0).unwrap();
        loop {
            let first = session.current_question().options[0].id.clone();
            session.answer(&first).unwrap();
            if session.is_last() {
                break;
            }
            session.next().unwrap();
        }
    }

    #[test]
    fn onboarding_starts_at_first_question() {
        let session = QuizSession::onboarding(catalog(), GoalSet::new()).unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.question_count(), 15);
        assert_eq!(session.current_question().id, "q1_temperature");
        assert_eq!(session.section_label(), "Your Temperature");
        assert!(session.selected_option().is_none());
    }

    #[test]
    fn goals_drive_question_count() {
        let goals: GoalSet = [Goal::MenstrualComfort].into_iter().collect();
        let session = QuizSession::onboarding(catalog(), goals).unwrap();
        assert_eq!(session.question_count(), 16);
        assert!(session.questions().iter().any(|q| q.id == MENSTRUAL_QUESTION_ID));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let catalog = Catalog::builder(CatalogVersion::new(1).unwrap())
            .axes([Axis::Cold])
            .question(
                Question::new("only", "Only", Section::Body)
                    .option(QuizOption::new("a", "A"))
                    .include_when(GoalPredicate::AnyOf(vec![Goal::SkinHealth])),
            )
            .build()
            .unwrap();

        let err = QuizSession::onboarding(Arc::new(catalog), GoalSet::new()).unwrap_err();
        assert_eq!(err, QuizSessionError::NoQuestions);
    }

    #[test]
    fn answer_rejects_foreign_option() {
        let mut session = QuizSession::onboarding(catalog(), GoalSet::new()).unwrap();
        let err = session.answer("iced").unwrap_err();
        assert!(matches!(err, QuizSessionError::UnknownOption { .. }));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn next_requires_an_answer() {
        let mut session = QuizSession::onboarding(catalog(), GoalSet::new()).unwrap();
        assert_eq!(
            session.next(),
            Err(QuizSessionError::Unanswered("q1_temperature".to_string()))
        );

        session.answer("cold").unwrap();
        session.next().unwrap();
        assert_eq!(session.current_index(), 1);
        assert!(session.is_answered(0));
        assert!(!session.is_answered(1));
    }

    #[test]
    fn reanswering_replaces_choice() {
        let mut session = QuizSession::onboarding(catalog(), GoalSet::new()).unwrap();
        session.answer("cold").unwrap();
        session.answer("hot").unwrap();
        assert_eq!(session.selected_option(), Some("hot"));
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn navigation_is_bounds_checked() {
        let mut session = QuizSession::onboarding(catalog(), GoalSet::new()).unwrap();
        session.previous();
        assert_eq!(session.current_index(), 0);

        session.go_to(14).unwrap();
        assert!(session.is_last());
        assert_eq!(session.progress(), 1.0);

        let err = session.go_to(15).unwrap_err();
        assert_eq!(err, QuizSessionError::OutOfRange { index: 15, count: 15 });

        session.answer("never").unwrap();
        assert!(matches!(session.next(), Err(QuizSessionError::OutOfRange { .. })));
        assert_eq!(session.current_index(), 14);
    }

    #[test]
    fn finish_requires_every_answer() {
        let mut session = QuizSession::onboarding(catalog(), GoalSet::new()).unwrap();
        session.answer("cold").unwrap();

        match session.finish() {
            Err(QuizSessionError::Incomplete { missing }) => {
                assert_eq!(missing.len(), 14);
                assert_eq!(missing[0], "q2_hands_feet");
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn preview_works_on_partial_answers() {
        let mut session = QuizSession::onboarding(catalog(), GoalSet::new()).unwrap();
        session.answer("hot").unwrap();
        let preview = session.preview().unwrap();
        assert_eq!(preview.primary_type(), PrimaryType::WarmCore);
    }

    #[test]
    fn finished_quiz_carries_result_and_ledger() {
        let mut session = QuizSession::onboarding(catalog(), GoalSet::new()).unwrap();
        answer_all_first_options(&mut session);

        assert!(session.is_complete());
        let done = session.finish().unwrap();
        assert_eq!(done.ledger.len(), 15);
        assert!(done.goals.is_empty());
        assert_eq!(
            done.result.terrain_profile_id().as_str(),
            done.result.primary_type().id()
        );
    }

    #[test]
    fn edit_session_preselects_stored_answers() {
        let mut onboarding = QuizSession::onboarding(catalog(), GoalSet::new()).unwrap();
        answer_all_first_options(&mut onboarding);
        let done = onboarding.finish().unwrap();

        let profile = UserProfile::create(
            UserId::new("user-1").unwrap(),
            done.goals.clone(),
            &done.result,
            &done.ledger,
            builtin_catalog(),
            Timestamp::now(),
        );

        let mut edit = QuizSession::edit(catalog(), &profile).unwrap();
        assert_eq!(edit.current_index(), 0);
        assert_eq!(edit.selected_option(), Some("cold"));
        assert!(edit.is_complete());

        edit.answer("hot").unwrap();
        assert_eq!(edit.ledger().len(), 15);
        assert_eq!(edit.ledger().answer_for("q1_temperature"), Some("hot"));
    }
}
