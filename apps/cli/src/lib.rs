//! Command-line front end over the classifier I/O layer.
//!
//! [`Cli`] describes the arguments; [`execute`] runs one subcommand and returns the text the
//! binary should print, so the commands stay testable without spawning a process.

mod args;
mod commands;

pub use crate::args::{Cli, Command};
pub use crate::commands::execute;
