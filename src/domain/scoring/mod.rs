//! Scoring module - classification of quiz answers into a terrain.
//!
//! - `ScoreVector` - per-axis accumulated scores
//! - `TerrainScorer` - folds answers, resolves primary type and modifier
//! - `ScoringResult` / `TerrainShift` - outcome and before/after comparison

mod errors;
mod result;
mod scorer;
mod vector;

pub use errors::ClassificationError;
pub use result::{ScoringResult, TerrainProfileId, TerrainShift};
pub use scorer::TerrainScorer;
pub use vector::ScoreVector;
