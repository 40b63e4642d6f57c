//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the developer toolkit.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the CNN classifier workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Create the directory and file skeleton of a classifier project
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project (package) name substituted for '{project}' in the manifest
    #[arg(short, long)]
    pub project: Option<String>,

    /// Directory in which the skeleton is created
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// YAML manifest with 'project_name' and 'files' (the built-in layout by default)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Only report what would be created
    #[arg(long)]
    pub dry_run: bool,
}
