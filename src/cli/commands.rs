//! Command execution: load the spec, print the metadata banner, build.

use std::env;
use std::path::Path;

use colored::Colorize;
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::spec::load_spec;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.spec_file {
        Some(spec_file) => build(spec_file),
        None => {
            // Nothing to do when only --generate/--info was requested.
            if cli.generator.is_some() || cli.info {
                Ok(())
            } else {
                Err(CliError::Usage(
                    "no specification file provided (see --help)".to_string(),
                ))
            }
        }
    }
}

#[instrument]
fn build(spec_file: &Path) -> CliResult<()> {
    debug!("spec_file: {:?}", spec_file);
    let spec = load_spec(spec_file)?;

    println!("Successfully loaded configuration:");
    println!("{}", "-".repeat(30));
    println!("Project name: {}", spec.project.name.as_str().bold());
    println!("Project version: {}", spec.project.version);
    println!("Project description: {}", spec.project.description);

    let root = env::current_dir()
        .map_err(|e| crate::errors::BuildError::io("resolving current directory", e))?;
    crate::build_project(&spec, &root)?;

    println!(
        "{}",
        format!("Project skeleton created under {}", root.display()).green()
    );
    Ok(())
}
