//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quiz;

pub use quiz::{
    // Queries
    GetQuizQuestionsHandler, GetQuizQuestionsQuery, GetQuizQuestionsResult,
    PreviewTerrainHandler, PreviewTerrainQuery, PreviewTerrainResult,
    // Commands
    CompleteOnboardingCommand, CompleteOnboardingHandler, CompleteOnboardingResult,
    RetakeQuizCommand, RetakeQuizHandler, RetakeQuizResult,
};
