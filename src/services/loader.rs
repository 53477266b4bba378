use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use validator::Validate;
use crate::models::RankRequest;

/// Errors that can occur while loading a ranking request
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl LoaderError {
    /// Short machine-readable kind for error responses
    pub fn kind(&self) -> &'static str {
        match self {
            LoaderError::Io(_) => "io_error",
            LoaderError::Json(_) => "invalid_json",
            LoaderError::Validation(_) => "validation_failed",
        }
    }
}

/// Reads ranking requests supplied by the surrounding application
///
/// Records are rejected rather than coerced: the ranker itself never
/// validates, so anything that gets past here is ranked as-is.
pub struct RequestLoader;

impl RequestLoader {
    /// Load and validate a request from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RankRequest, LoaderError> {
        let path = path.as_ref();
        tracing::debug!("Loading ranking request from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load and validate a request from any reader (e.g. stdin)
    pub fn from_reader<R: Read>(reader: R) -> Result<RankRequest, LoaderError> {
        let request: RankRequest = serde_json::from_reader(reader)?;
        Self::validate(request)
    }

    /// Load and validate a request from a JSON string
    pub fn from_json(json: &str) -> Result<RankRequest, LoaderError> {
        let request: RankRequest = serde_json::from_str(json)?;
        Self::validate(request)
    }

    fn validate(request: RankRequest) -> Result<RankRequest, LoaderError> {
        if let Err(errors) = request.validate() {
            tracing::info!("Validation failed for ranking request: field_errors={:?}", errors);
            return Err(errors.into());
        }

        tracing::debug!(
            "Loaded ranking request: {} candidates, {} required skills",
            request.candidates.len(),
            request.task.required_skills.len()
        );
        Ok(request)
    }
}
