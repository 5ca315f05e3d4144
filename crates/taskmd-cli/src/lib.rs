//! taskmd CLI library.
//!
//! Shared by the `taskmd` (kustomize directory) and `taskmd-files`
//! (manifest files) binaries.

use std::process::ExitCode;

use tracing::debug;

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;

/// Turn a run result into the process exit code, reporting any error as a
/// single line on stderr.
pub fn finish(program: &str, result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(code = e.code(), error = ?e, "run failed");
            eprintln!("{program}: {e}");
            e.exit_code()
        }
    }
}
