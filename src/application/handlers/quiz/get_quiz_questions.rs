//! GetQuizQuestions - Query handler for the goal-filtered question list.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::quiz::{Catalog, GoalSet, Question, QuestionSelector, SectionSpan};

/// Query for the questions a user with `goals` is asked.
#[derive(Debug, Clone, Default)]
pub struct GetQuizQuestionsQuery {
    pub goals: GoalSet,
}

/// Selected questions with their section layout.
#[derive(Debug, Clone, Serialize)]
pub struct GetQuizQuestionsResult {
    pub quiz_version: u32,
    pub questions: Vec<Question>,
    pub sections: Vec<SectionSpan>,
}

/// Handler for question list queries.
pub struct GetQuizQuestionsHandler {
    catalog: Arc<Catalog>,
}

impl GetQuizQuestionsHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        query: GetQuizQuestionsQuery,
        metadata: CommandMetadata,
    ) -> Result<GetQuizQuestionsResult, DomainError> {
        let questions = QuestionSelector::select(&self.catalog, &query.goals);
        let sections = QuestionSelector::section_spans(&questions);

        debug!(
            correlation_id = %metadata.correlation_id(),
            goals = query.goals.len(),
            questions = questions.len(),
            "Selected quiz questions"
        );

        Ok(GetQuizQuestionsResult {
            quiz_version: self.catalog.version().as_u32(),
            questions,
            sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::{builtin_catalog, Goal, Section, MENSTRUAL_QUESTION_ID};

    fn handler() -> GetQuizQuestionsHandler {
        GetQuizQuestionsHandler::new(Arc::new(builtin_catalog().clone()))
    }

    #[tokio::test]
    async fn returns_base_set_without_goals() {
        let result = handler()
            .handle(GetQuizQuestionsQuery::default(), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(result.quiz_version, 2);
        assert_eq!(result.questions.len(), 15);
        assert_eq!(result.sections[0].section, Section::Temperature);
    }

    #[tokio::test]
    async fn includes_conditional_question_for_goal() {
        let query = GetQuizQuestionsQuery {
            goals: [Goal::MenstrualComfort].into_iter().collect(),
        };
        let result = handler()
            .handle(query, CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(result.questions.len(), 16);
        assert!(result.questions.iter().any(|q| q.id == MENSTRUAL_QUESTION_ID));
        let covered: usize = result.sections.iter().map(|s| s.len).sum();
        assert_eq!(covered, 16);
    }
}
