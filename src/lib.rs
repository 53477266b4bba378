//! Taskify Ranker - task/worker compatibility ranking for the Taskify marketplace
//!
//! This library ranks candidate workers for a task by blending fuzzy skill
//! overlap with track record (completed tasks and rating). Ranking is a pure
//! function of its inputs; loading and validating the records it ranks is
//! handled by [`services::RequestLoader`].

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{CompatibilityRanker, RankResult};
pub use models::{TaskDescriptor, CandidateWorker, RankedCandidate, ScoringWeights, RankRequest, RankResponse};
