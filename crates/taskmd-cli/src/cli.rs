//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueHint};
use taskmd_common_config::{vars, ConfigLoader, TaskmdConfig};
use taskmd_common_log::LogConfig;

use crate::error::CliError;

/// Generate Markdown reference documentation for the Tekton Tasks of a
/// kustomize directory.
#[derive(Debug, Parser)]
#[command(name = "taskmd", version, about, long_about = None)]
pub struct KustomizeCli {
    /// Root of the kustomize project to build
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Program used to run the overlay build (default: kustomize)
    #[arg(long, value_name = "PROGRAM")]
    pub kustomize: Option<String>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Generate Markdown reference documentation from Tekton Task manifest files.
#[derive(Debug, Parser)]
#[command(name = "taskmd-files", version, about, long_about = None)]
pub struct FilesCli {
    /// Task manifest files (YAML or JSON)
    #[arg(
        value_name = "TASK_FILE",
        required = true,
        num_args = 1..,
        value_hint = ValueHint::FilePath
    )]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by both entry points.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        env = vars::TASKMD_CONFIG,
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Directory to write documentation to (default: taskmd.out)
    #[arg(short, long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,
}

impl GlobalArgs {
    /// Logging configuration for this invocation.
    pub fn log_config(&self) -> LogConfig {
        LogConfig::for_verbosity(self.verbose, self.quiet)
    }

    /// Load configuration from file and environment, then apply flags.
    pub fn load_config(&self) -> Result<TaskmdConfig, CliError> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::default(),
        };

        let mut config = loader.load()?;
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        Ok(config)
    }
}

impl KustomizeCli {
    /// Configuration with the `--kustomize` override applied.
    pub fn load_config(&self) -> Result<TaskmdConfig, CliError> {
        let mut config = self.global.load_config()?;
        if let Some(program) = &self.kustomize {
            config.kustomize.program = program.clone();
        }
        Ok(config)
    }
}
