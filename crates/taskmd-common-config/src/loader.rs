//! Configuration file loading and parsing.

use std::path::{Path, PathBuf};

use taskmd_common_fs::FsError;
use thiserror::Error;
use tracing::debug;

use crate::env::apply_env_overrides;
use crate::types::TaskmdConfig;

/// Location of the config file relative to the working directory.
pub const CONFIG_FILE: &str = ".taskmd/config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config: {0}")]
    ReadError(#[from] FsError),

    #[error("invalid YAML in {}: {message}", path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
    explicit: bool,
}

impl ConfigLoader {
    /// Create a loader for `.taskmd/config.yaml` under the given directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            path: project_dir.as_ref().join(CONFIG_FILE),
            explicit: false,
        }
    }

    /// Create a loader for an explicitly named file, which must exist.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    /// Load the file (or defaults when an implicit file is absent), then
    /// apply environment overrides and validate.
    pub fn load(&self) -> Result<TaskmdConfig, ConfigError> {
        let mut config = self.load_file()?;
        apply_env_overrides(&mut config);
        validate(&config)?;
        Ok(config)
    }

    fn load_file(&self) -> Result<TaskmdConfig, ConfigError> {
        if !self.path.exists() {
            if self.explicit {
                return Err(ConfigError::NotFound {
                    path: self.path.clone(),
                });
            }
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(TaskmdConfig::default());
        }

        let contents = taskmd_common_fs::read_to_string(&self.path)?;
        let expanded = expand_env_vars(&contents)?;

        // An empty file is a valid, all-defaults config.
        if expanded.trim().is_empty() {
            return Ok(TaskmdConfig::default());
        }

        debug!(path = %self.path.display(), "loading config");
        serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
pub fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| {
        ConfigError::ValidationError {
            message: e.to_string(),
        }
    })?;

    let mut missing = None;
    let expanded = re.replace_all(content, |cap: &regex::Captures<'_>| {
        let var_name = &cap[1];
        match std::env::var(var_name) {
            Ok(v) => v,
            Err(_) => match cap.get(2) {
                Some(default) => default.as_str().to_string(),
                None => {
                    missing.get_or_insert_with(|| var_name.to_string());
                    String::new()
                }
            },
        }
    });

    match missing {
        Some(var) => Err(ConfigError::EnvVarNotFound { var }),
        None => Ok(expanded.into_owned()),
    }
}

fn validate(config: &TaskmdConfig) -> Result<(), ConfigError> {
    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "output_dir must not be empty".to_string(),
        });
    }

    if config.kustomize.program.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "kustomize.program must not be empty".to_string(),
        });
    }

    Ok(())
}
