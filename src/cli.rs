//! Command-line argument surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spectree", version)]
#[command(about = "Convert between a single flat spec document and a directory tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconstruct a directory tree from a spec document
    ConvertToTree {
        /// Spec document to read
        spec_file: PathBuf,

        /// Directory to materialize into
        #[arg(default_value = ".")]
        output_dir: PathBuf,
    },

    /// Package a directory tree as a spec document
    ConvertToSpec {
        /// Directory to scan
        project_dir: PathBuf,

        /// Spec document to write
        #[arg(default_value = "project.spec")]
        output_file: PathBuf,
    },
}
