use thiserror::Error;

/// Top-level error type for the arealis survey engine.
#[derive(Debug, Error)]
pub enum ArealisError {
    #[error(transparent)]
    Survey(#[from] SurveyError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to the survey document.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("restriction not found in survey")]
    RestrictionNotFound,
}

/// Errors related to interior grid sampling.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("grid step must be positive and finite, got {step} m")]
    InvalidStep { step: f64 },
}

/// Errors related to report export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`ArealisError`].
pub type Result<T> = std::result::Result<T, ArealisError>;
