//! Manifest files → bundled output.

use std::path::PathBuf;

use taskmd_common_config::TaskmdConfig;
use taskmd_manifest::load_bundles;
use tracing::info;

use crate::error::CliError;
use crate::output::{OutputWriter, RenderedTask};

/// Load every file, render each task and write the bundled layout.
///
/// Nothing is written unless every file loads.
pub fn generate_from_files(files: &[PathBuf], config: &TaskmdConfig) -> Result<(), CliError> {
    let bundles = load_bundles(files)?;
    info!(tasks = bundles.len(), "loaded task manifests");

    let rendered: Vec<_> = bundles.iter().map(RenderedTask::from_bundle).collect();
    OutputWriter::new(&config.output_dir).write_bundled(&rendered)?;
    Ok(())
}
