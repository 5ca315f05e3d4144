//! Loading standalone manifest files.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ManifestError, Result};
use crate::types::{Task, TASK_KIND};

/// A decoded task paired with the file it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBundle {
    pub task: Task,
    pub source: PathBuf,
}

/// Decode a single document into a [`Task`].
///
/// `origin` names the document in error messages.
pub fn decode_task(bytes: &[u8], origin: &str) -> Result<Task> {
    serde_yaml::from_slice(bytes).map_err(|e| ManifestError::yaml(origin, &e))
}

/// Read and decode one manifest file.
pub fn load_bundle(path: impl AsRef<Path>) -> Result<TaskBundle> {
    let path = path.as_ref();
    let bytes = taskmd_common_fs::read_bytes(path)?;
    let task = decode_task(&bytes, &path.display().to_string())?;

    if !task.kind.is_empty() && task.kind != TASK_KIND {
        warn!(
            path = %path.display(),
            kind = %task.kind,
            "manifest is not a Task, rendering anyway"
        );
    }
    debug!(path = %path.display(), task = task.name(), "loaded manifest");

    Ok(TaskBundle {
        task,
        source: path.to_path_buf(),
    })
}

/// Load every path in order. The first failure aborts the whole load.
pub fn load_bundles<I, P>(paths: I) -> Result<Vec<TaskBundle>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().map(load_bundle).collect()
}
