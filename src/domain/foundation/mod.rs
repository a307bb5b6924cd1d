//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, command metadata and error types
//! that form the vocabulary of the Terrain domain.

mod command;
mod errors;
mod ids;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{UserId, UserProfileId};
pub use timestamp::Timestamp;
