//! `taskmd-files`: document standalone Tekton Task manifest files.

use std::process::ExitCode;

use clap::Parser;
use taskmd_cli::cli::FilesCli;
use taskmd_cli::commands::generate_from_files;
use taskmd_cli::{finish, CliError};

fn main() -> ExitCode {
    let cli = FilesCli::parse();
    finish("taskmd-files", run(&cli))
}

fn run(cli: &FilesCli) -> Result<(), CliError> {
    taskmd_common_log::init(cli.global.log_config())?;

    let config = cli.global.load_config()?;
    generate_from_files(&cli.files, &config)
}
