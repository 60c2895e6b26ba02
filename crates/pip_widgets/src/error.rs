//! Widget error types

use thiserror::Error;

/// Errors raised by Pip widgets
#[derive(Error, Debug)]
pub enum IndicatorError {
    /// Operation is not valid in the widget's current state (unbound,
    /// pager without item provider)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Saved state could not be encoded or decoded
    #[error("Saved state codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl IndicatorError {
    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        IndicatorError::InvalidState(msg.into())
    }
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, IndicatorError>;
