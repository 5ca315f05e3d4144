//! Environment variable handling.

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::types::TaskmdConfig;

/// Environment variable names.
pub mod vars {
    /// Explicit configuration file.
    pub const TASKMD_CONFIG: &str = "TASKMD_CONFIG";
    /// Overrides `output_dir`.
    pub const TASKMD_OUTPUT_DIR: &str = "TASKMD_OUTPUT_DIR";
    /// Overrides `kustomize.program`.
    pub const TASKMD_KUSTOMIZE: &str = "TASKMD_KUSTOMIZE";
}

/// Apply environment overrides to a loaded configuration.
///
/// Empty values are ignored.
pub fn apply_env_overrides(config: &mut TaskmdConfig) {
    if let Some(dir) = non_empty(vars::TASKMD_OUTPUT_DIR) {
        debug!(output_dir = %dir, "output directory overridden from environment");
        config.output_dir = PathBuf::from(dir);
    }

    if let Some(program) = non_empty(vars::TASKMD_KUSTOMIZE) {
        debug!(%program, "kustomize program overridden from environment");
        config.kustomize.program = program;
    }
}

fn non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.is_empty())
}
