//! Error types

use thiserror::Error;

/// Errors raised while building a matcher from its dataset.
///
/// Searching never fails; every variant here is a startup failure.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The dataset is absent, empty, malformed, or has no usable record
    #[error("Failed to load location data: {0}")]
    DataLoadError(String),
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for SuggestError {
    fn from(e: serde_json::Error) -> Self {
        SuggestError::DataLoadError(format!("malformed dataset: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, SuggestError>;
