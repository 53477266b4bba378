// Core algorithm exports
pub mod filters;
pub mod ranker;
pub mod scoring;

pub use filters::{is_eligible, skills_match, matching_skills};
pub use ranker::{CompatibilityRanker, RankResult};
pub use scoring::{score_candidate, skill_score, experience_score, compatibility_score};
