use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateWorker, TaskDescriptor};

/// Request to rank a pool of workers for one task
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    pub task: TaskDescriptor,
    #[serde(default)]
    #[validate(nested)]
    pub candidates: Vec<CandidateWorker>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}
