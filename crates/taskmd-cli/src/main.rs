//! `taskmd`: document the Tekton Tasks of a kustomize directory.

use std::process::ExitCode;

use clap::Parser;
use taskmd_cli::cli::KustomizeCli;
use taskmd_cli::commands::generate_from_kustomize;
use taskmd_cli::{finish, CliError};
use taskmd_manifest::KustomizeBuilder;

fn main() -> ExitCode {
    let cli = KustomizeCli::parse();
    finish("taskmd", run(&cli))
}

fn run(cli: &KustomizeCli) -> Result<(), CliError> {
    taskmd_common_log::init(cli.global.log_config())?;

    let config = cli.load_config()?;
    let builder = KustomizeBuilder::from_config(&config.kustomize);
    generate_from_kustomize(&cli.dir, &builder, &config)
}
