//! Error handling for harjar

use thiserror::Error;

/// Main error type for harjar operations
#[derive(Error, Debug)]
pub enum HarJarError {
    /// A HAR cookie lacks one of its required fields (`name` or `value`).
    #[error("HAR cookie is missing required field: {0}")]
    MissingField(&'static str),

    /// A HAR `expires` string is not in `YYYY-MM-DDTHH:MM:SSZ` form.
    #[error("Invalid HAR timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for harjar operations
pub type Result<T> = std::result::Result<T, HarJarError>;
