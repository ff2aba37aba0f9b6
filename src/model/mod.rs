//! Classifier model registry and linear scoring.
//!
//! The model is a compiled-in constant installed once per process and
//! shared read-only by every analysis; reads need no synchronization
//! because the slot is never written again after installation.

pub mod classifier;
pub mod weights;

pub use classifier::{logistic, score, score_with, Contribution, Prediction, ScoreTerm};
pub use weights::ClassifierModel;

use once_cell::sync::OnceCell;

use crate::error::AnalysisError;

static MODEL: OnceCell<ClassifierModel> = OnceCell::new();

/// Installs the compiled-in calibrated model. Idempotent; later calls
/// are no-ops.
pub fn ensure_initialized() {
    if MODEL.set(ClassifierModel::calibrated()).is_ok() {
        log::debug!("calibrated classifier model installed");
    }
}

/// The process-wide model. Fails with `ModelNotInitialized` when
/// scoring is attempted before installation; `analyze` makes that
/// unreachable by installing first.
pub fn current() -> Result<&'static ClassifierModel, AnalysisError> {
    MODEL.get().ok_or(AnalysisError::ModelNotInitialized)
}
