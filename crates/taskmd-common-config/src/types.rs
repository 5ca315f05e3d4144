//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory generated documentation is written to.
pub const DEFAULT_OUTPUT_DIR: &str = "taskmd.out";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskmdConfig {
    /// Directory generated documentation is written to.
    pub output_dir: PathBuf,
    /// How a built resource set is scanned for tasks.
    pub resource_scan: ScanMode,
    /// External overlay evaluator.
    pub kustomize: KustomizeConfig,
}

impl Default for TaskmdConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            resource_scan: ScanMode::default(),
            kustomize: KustomizeConfig::default(),
        }
    }
}

/// Behaviour when a built resource set contains something other than a Task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Skip the resource and keep scanning.
    #[default]
    Skip,
    /// End the scan at the first non-Task resource.
    StopAtFirstNonTask,
}

/// How the overlay evaluator is invoked: `<program> <args...> <dir>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KustomizeConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for KustomizeConfig {
    fn default() -> Self {
        Self {
            program: "kustomize".to_string(),
            args: vec!["build".to_string()],
        }
    }
}
