//! CLI error handling.

use std::process::ExitCode;

use taskmd_common_config::ConfigError;
use taskmd_common_fs::FsError;
use taskmd_common_log::LogError;
use taskmd_manifest::ManifestError;
use thiserror::Error;

use crate::output::OutputError;

/// Every failure that ends a run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Argument { message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] FsError),

    #[error("{message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{message}")]
    Build { message: String },

    #[error(transparent)]
    Log(#[from] LogError),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Argument { .. } => "E001",
            Self::Config(_) => "E002",
            Self::Io(_) => "E003",
            Self::Decode { .. } => "E004",
            Self::Build { .. } => "E005",
            Self::Log(_) => "E999",
        }
    }

    /// Get the process exit status for this error
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Argument { .. } => 64,
            Self::Config(_) => 78,
            Self::Io(_) => 3,
            Self::Decode { .. } => 5,
            Self::Build { .. } => 8,
            Self::Log(_) => 1,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Create an argument error
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument {
            message: message.into(),
        }
    }
}

impl From<ManifestError> for CliError {
    fn from(err: ManifestError) -> Self {
        let message = err.to_string();
        match err {
            ManifestError::Io(e) => Self::Io(e),
            decode @ ManifestError::Decode { .. } => Self::Decode {
                message,
                source: Some(Box::new(decode)),
            },
            ManifestError::Build { .. } => Self::Build { message },
        }
    }
}

impl From<OutputError> for CliError {
    fn from(err: OutputError) -> Self {
        let message = err.to_string();
        match err {
            OutputError::Fs(e) => Self::Io(e),
            invalid @ OutputError::InvalidTaskName { .. } => Self::Decode {
                message,
                source: Some(Box::new(invalid)),
            },
            OutputError::UnsafeOutputDir { .. } | OutputError::SourceInOutputDir { .. } => {
                Self::Argument { message }
            }
        }
    }
}
