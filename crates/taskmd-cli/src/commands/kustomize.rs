//! Kustomize directory → flat output.

use std::path::Path;

use taskmd_common_config::TaskmdConfig;
use taskmd_manifest::{build_tasks, ManifestBuilder};
use tracing::info;

use crate::error::CliError;
use crate::output::{OutputWriter, RenderedTask};

/// Build `dir`, render each Task resource and write the flat layout.
pub fn generate_from_kustomize(
    dir: &Path,
    builder: &dyn ManifestBuilder,
    config: &TaskmdConfig,
) -> Result<(), CliError> {
    let tasks = build_tasks(builder, dir, config.resource_scan)?;
    info!(dir = %dir.display(), tasks = tasks.len(), "collected tasks from resource set");

    let rendered: Vec<_> = tasks.iter().map(RenderedTask::from_task).collect();
    OutputWriter::new(&config.output_dir).write_flat(&rendered)?;
    Ok(())
}
