//! File system utilities for taskmd.
//!
//! Thin wrappers over `std::fs` whose errors always carry the path that
//! failed, so callers can report a single readable line.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub mod path;

/// File system errors.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove directory {}: {source}", path.display())]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path has no file name: {}", path.display())]
    NoFileName { path: PathBuf },
}

impl FsError {
    /// The path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::CreateDir { path, .. }
            | Self::RemoveDir { path, .. }
            | Self::NoFileName { path } => path,
        }
    }

    fn read(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            _ => Self::Read { path, source },
        }
    }
}

/// Result type for file system operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Read a file to bytes.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| FsError::read(path, e))
}

/// Read a file to string.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| FsError::read(path, e))
}

/// Create (or truncate) a file and write `contents` to it.
pub fn write(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| FsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Write string to file.
pub fn write_string(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    write(path, contents.as_bytes())
}

/// Ensure a directory exists, creating parents as needed.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| FsError::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Remove `path` recursively if it exists, then create it empty.
pub fn recreate_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match fs::remove_dir_all(path) {
        Ok(()) => debug!(path = %path.display(), "removed existing directory"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(FsError::RemoveDir {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
    ensure_dir(path)
}

/// Copy the file at `source` into `dir`, keeping its base file name.
///
/// Returns the path of the copy.
pub fn copy_into(source: impl AsRef<Path>, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let source = source.as_ref();
    let file_name = source.file_name().ok_or_else(|| FsError::NoFileName {
        path: source.to_path_buf(),
    })?;

    let target = dir.as_ref().join(file_name);
    let bytes = read_bytes(source)?;
    write(&target, &bytes)?;
    Ok(target)
}
