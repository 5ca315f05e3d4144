//! Manifest loading errors.

use std::path::PathBuf;

use taskmd_common_fs::FsError;
use thiserror::Error;

/// Errors raised while loading or building task manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A manifest file could not be read.
    #[error(transparent)]
    Io(#[from] FsError),

    /// A document did not decode as a Task. The decoder's message carries
    /// the location when one is known.
    #[error("failed to decode {origin}: {message}")]
    Decode { origin: String, message: String },

    /// The external overlay build failed.
    #[error("kustomize build of {} failed: {message}", dir.display())]
    Build { dir: PathBuf, message: String },
}

impl ManifestError {
    pub(crate) fn yaml(origin: impl Into<String>, err: &serde_yaml::Error) -> Self {
        Self::Decode {
            origin: origin.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn json(origin: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Decode {
            origin: origin.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, ManifestError>;
