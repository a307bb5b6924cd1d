//! Quiz module - catalog, question selection, answers and sessions.
//!
//! - `Catalog` - immutable, validated question set with weighted options
//! - `QuestionSelector` - goal-driven filtering and section labels
//! - `ResponseLedger` - one answer per question, replace on re-answer
//! - `QuizSession` - caller-owned navigation state over a selection

mod axis;
mod builtin;
mod catalog;
mod goal;
mod ledger;
mod question;
mod selector;
mod session;

pub use axis::{Axis, PrimaryType};
pub use builtin::{
    builtin_catalog, builtin_definition, ALCOHOL_QUESTION_ID, BUILTIN_CATALOG_VERSION,
    MENSTRUAL_QUESTION_ID, SMOKING_QUESTION_ID,
};
pub use catalog::{
    Catalog, CatalogBuilder, CatalogDefinition, CatalogError, CatalogVersion, LifestyleBinding,
    LifestyleField, ModifierRule,
};
pub use goal::{Goal, GoalPredicate, GoalSet};
pub use ledger::{Response, ResponseLedger};
pub use question::{Question, QuizOption, Section};
pub use selector::{QuestionSelector, SectionSpan};
pub use session::{CompletedQuiz, QuizSession, QuizSessionError};
