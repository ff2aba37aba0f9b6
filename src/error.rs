//! Error taxonomy for the analysis core.
//!
//! Malformed input fails fast and synchronously. Degenerate but
//! recoverable input (a zero-variance image) is handled inside the
//! extractor by substitution and never reaches this enum.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Malformed raster: zero dimension or buffer length mismatch.
    #[error("invalid raster input: {reason}")]
    InvalidInput { reason: String },

    /// Scoring was attempted before the calibrated model was installed.
    /// Unreachable through `analyze`, which installs the model first.
    #[error("classifier model not initialized")]
    ModelNotInitialized,
}

impl AnalysisError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
