// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{TaskDescriptor, CandidateWorker, RankedCandidate, ScoringWeights};
pub use requests::RankRequest;
pub use responses::{RankResponse, ErrorResponse};
