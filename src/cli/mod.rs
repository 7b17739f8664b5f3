//! cli
//!
//! Command-line interface layer for branchpack.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Sequence the diff-to-archive pipeline and map outcomes to exit behavior
//! - Own all user-facing messaging; lower layers return typed errors
//!
//! # Architecture
//!
//! The CLI layer parses arguments via clap and dispatches to command
//! handlers. Handlers drive [`crate::git`] and [`crate::archive`]; they are
//! the single place that decides messages and exit codes. A user-driven
//! abort (declined confirmation, cancelled prompt, dirty-tree abort) is a
//! graceful `Ok` exit; every unrecoverable failure surfaces as an error
//! that the binary maps to exit code 1.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

/// Execution context assembled from global CLI flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Run as if started in this directory.
    pub cwd: Option<PathBuf>,
    /// Verbose diagnostics.
    pub debug: bool,
    /// Minimal output.
    pub quiet: bool,
    /// Whether prompts may be shown.
    pub interactive: bool,
}

impl Context {
    /// The effective working directory for this invocation.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };

    commands::dispatch(cli.command, &ctx)
}
