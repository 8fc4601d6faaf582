use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single classification call.
///
/// `Clone` so a failed model load can be replayed to every later caller
/// of the same plugin instance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("failed to load mask model from {path}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("invalid face image: {0}")]
    Input(String),
    #[error("mask model inference failed: {0}")]
    Inference(String),
}

impl ClassifyError {
    /// A load failure leaves the plugin instance permanently unusable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClassifyError::Load { .. })
    }
}
