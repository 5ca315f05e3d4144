//! Writing rendered documentation to the output directory.
//!
//! Two layouts exist:
//!
//! * bundled: the directory is wiped and rebuilt; each task gets
//!   `<root>/<name>/README.md` plus a byte-for-byte copy of its manifest.
//! * flat: the directory is created if needed and never cleaned; each task
//!   gets `<root>/<name>.md`.
//!
//! Names are checked before anything touches the filesystem, and the bundled
//! layout refuses to wipe a root that holds one of its own input manifests.
//! Later tasks with the same name overwrite earlier ones.

use std::path::PathBuf;

use taskmd_common_fs::{self as fs, path, FsError};
use taskmd_manifest::{Task, TaskBundle};
use thiserror::Error;
use tracing::{debug, info};

/// File name of the rendered document in the bundled layout.
pub const README: &str = "README.md";

/// Output errors.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("task name {name:?} cannot be used as a file name")]
    InvalidTaskName { name: String },

    #[error("refusing to wipe output directory {}", path.display())]
    UnsafeOutputDir { path: PathBuf },

    #[error(
        "refusing to wipe output directory {}: it contains input manifest {}",
        root.display(),
        manifest.display()
    )]
    SourceInOutputDir { root: PathBuf, manifest: PathBuf },
}

/// A task's rendered documentation, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTask {
    pub name: String,
    pub markdown: String,
    /// Manifest the task was loaded from; copied next to the README.
    pub source: Option<PathBuf>,
}

impl RenderedTask {
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name().to_string(),
            markdown: taskmd_render::render(task),
            source: None,
        }
    }

    pub fn from_bundle(bundle: &TaskBundle) -> Self {
        Self {
            source: Some(bundle.source.clone()),
            ..Self::from_task(&bundle.task)
        }
    }
}

/// Writes rendered tasks under a root directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Wipe the root and write one directory per task.
    pub fn write_bundled(&self, tasks: &[RenderedTask]) -> Result<(), OutputError> {
        check_names(tasks)?;
        if path::is_unsafe_to_wipe(&self.root) {
            return Err(OutputError::UnsafeOutputDir {
                path: self.root.clone(),
            });
        }
        self.check_sources(tasks)?;

        fs::recreate_dir(&self.root)?;
        for task in tasks {
            let dir = self.root.join(&task.name);
            fs::ensure_dir(&dir)?;
            fs::write_string(dir.join(README), &task.markdown)?;
            if let Some(source) = &task.source {
                fs::copy_into(source, &dir)?;
            }
            debug!(task = %task.name, dir = %dir.display(), "wrote task documentation");
        }

        info!(root = %self.root.display(), tasks = tasks.len(), "documentation written");
        Ok(())
    }

    /// Write one `<name>.md` per task without cleaning the root.
    pub fn write_flat(&self, tasks: &[RenderedTask]) -> Result<(), OutputError> {
        check_names(tasks)?;

        fs::ensure_dir(&self.root)?;
        for task in tasks {
            let file = self.root.join(format!("{}.md", task.name));
            fs::write_string(&file, &task.markdown)?;
            debug!(task = %task.name, file = %file.display(), "wrote task documentation");
        }

        info!(root = %self.root.display(), tasks = tasks.len(), "documentation written");
        Ok(())
    }

    fn check_sources(&self, tasks: &[RenderedTask]) -> Result<(), OutputError> {
        let inside = tasks
            .iter()
            .filter_map(|t| t.source.as_deref())
            .find(|source| path::is_within(source, &self.root));
        match inside {
            Some(source) => Err(OutputError::SourceInOutputDir {
                root: self.root.clone(),
                manifest: source.to_path_buf(),
            }),
            None => Ok(()),
        }
    }
}

fn check_names(tasks: &[RenderedTask]) -> Result<(), OutputError> {
    match tasks.iter().find(|t| !path::is_single_component(&t.name)) {
        Some(task) => Err(OutputError::InvalidTaskName {
            name: task.name.clone(),
        }),
        None => Ok(()),
    }
}
