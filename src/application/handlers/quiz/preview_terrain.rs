//! PreviewTerrain - Query handler for live classification of partial answers.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::domain::quiz::{Catalog, GoalSet, QuestionSelector, Response, ResponseLedger};
use crate::domain::scoring::{ScoringResult, TerrainScorer};

/// Query classifying whatever has been answered so far.
#[derive(Debug, Clone, Default)]
pub struct PreviewTerrainQuery {
    pub goals: GoalSet,
    pub responses: Vec<Response>,
}

/// Classification of the current answers. Nothing is stored.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewTerrainResult {
    pub result: ScoringResult,
    pub nickname: &'static str,
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
}

/// Handler for preview queries.
pub struct PreviewTerrainHandler {
    catalog: Arc<Catalog>,
}

impl PreviewTerrainHandler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        query: PreviewTerrainQuery,
        _metadata: CommandMetadata,
    ) -> Result<PreviewTerrainResult, DomainError> {
        let questions = QuestionSelector::select(&self.catalog, &query.goals);
        let ledger = ResponseLedger::from_responses(query.responses);

        let result = TerrainScorer::classify(&self.catalog, &questions, &ledger)?;

        Ok(PreviewTerrainResult {
            nickname: result.nickname(),
            answered: ledger.answered_count(&questions),
            total: questions.len(),
            complete: ledger.is_complete(&questions),
            result,
        })
    }
}
