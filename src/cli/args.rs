//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Materialize ML project skeletons and logging configuration from a declarative YAML spec
#[derive(Parser, Debug)]
#[command(name = "mlscaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the YAML project specification
    #[arg(value_hint = ValueHint::FilePath)]
    pub spec_file: Option<PathBuf>,

    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,
}
