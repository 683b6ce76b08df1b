//! Error types for the bootstrap sequence.

use thiserror::Error;

/// Errors that abort the bootstrap sequence.
///
/// None of these are retried. The surrounding process decides what to do
/// with them (see [`FailurePolicy`](crate::FailurePolicy)).
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("mount target '{selector}' not found")]
    MountTargetNotFound { selector: String },

    #[error("failed to load asset '{asset}': {reason}")]
    AssetLoadFailure { asset: String, reason: String },

    #[error("mount target '{selector}' already owns an application")]
    AlreadyMounted { selector: String },

    #[error("bootstrap sequence already ran")]
    AlreadyRun,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("host environment unavailable: {0}")]
    HostUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootstrapError {
    /// Shorthand for an [`AssetLoadFailure`](Self::AssetLoadFailure).
    pub fn asset(asset: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AssetLoadFailure {
            asset: asset.into(),
            reason: reason.into(),
        }
    }
}
