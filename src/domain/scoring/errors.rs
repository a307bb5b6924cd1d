//! Classification errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while folding responses into a score vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("Option '{option_id}' is not an answer to question '{question_id}'")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },

    #[error("Catalog declares no axes")]
    NoAxes,
}

impl ClassificationError {
    pub fn unknown_option(question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        ClassificationError::UnknownOption {
            question_id: question_id.into(),
            option_id: option_id.into(),
        }
    }
}

impl From<ClassificationError> for DomainError {
    fn from(err: ClassificationError) -> Self {
        match &err {
            ClassificationError::UnknownOption {
                question_id,
                option_id,
            } => DomainError::new(ErrorCode::MalformedResponse, err.to_string())
                .with_detail("question_id", question_id.clone())
                .with_detail("option_id", option_id.clone()),
            ClassificationError::NoAxes => {
                DomainError::new(ErrorCode::CatalogInvalid, err.to_string())
            }
        }
    }
}
