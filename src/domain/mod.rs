//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, command metadata)
//! - `quiz` - Question catalog, goal-driven selection, response ledger, quiz sessions
//! - `scoring` - Pure classification of answers into a terrain
//! - `profile` - User profile aggregate and the classification updater
//! - `enrichment` - Caching state for external data fetchers

pub mod enrichment;
pub mod foundation;
pub mod profile;
pub mod quiz;
pub mod scoring;
