//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Drives the inspectors and the archive builder
//! 3. Formats and displays output
//!
//! Handlers return `Ok(())` for success *and* for user-chosen graceful
//! aborts; only unrecoverable failures become errors.

mod branches;
mod completion;
mod pack;

pub use branches::branches;
pub use completion::completion;
pub use pack::pack;

use anyhow::Result;

use super::args::Command;
use super::Context;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Pack {
            branch1,
            branch2,
            yes,
            json,
        } => pack(ctx, branch1.as_deref(), branch2.as_deref(), yes, json),
        Command::Branches => branches(ctx),
        Command::Completion { shell } => completion(shell),
    }
}
