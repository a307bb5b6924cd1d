//! Quiz handlers - question selection, preview, onboarding and retakes.

mod complete_onboarding;
mod get_quiz_questions;
mod preview_terrain;
mod retake_quiz;

pub use complete_onboarding::{
    CompleteOnboardingCommand, CompleteOnboardingHandler, CompleteOnboardingResult,
};
pub use get_quiz_questions::{
    GetQuizQuestionsHandler, GetQuizQuestionsQuery, GetQuizQuestionsResult,
};
pub use preview_terrain::{PreviewTerrainHandler, PreviewTerrainQuery, PreviewTerrainResult};
pub use retake_quiz::{RetakeQuizCommand, RetakeQuizHandler, RetakeQuizResult};
