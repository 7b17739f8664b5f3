//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// branchpack - package the diff between two git branches into a zip archive
#[derive(Parser, Debug)]
#[command(name = "bpk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if bpk was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns true if:
    /// - `--interactive` was explicitly set, OR
    /// - Neither `--no-interactive` nor `--quiet` was set AND stdin is a TTY
    pub fn interactive(&self) -> bool {
        if self.interactive_flag {
            true
        } else if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Package the diff between two branches into a zip archive
    #[command(
        name = "pack",
        long_about = "Package the diff between two branches into a zip archive.\n\n\
            Computes the set of files whose content differs between the two \
            branches' trees and streams them into a timestamped zip in the \
            current directory, at their repository-relative paths.\n\n\
            With no branch arguments, an interactive picker offers every \
            selectable branch (local and remote). Files present in the diff \
            but missing from the checked-out tree are skipped with a warning.",
        after_help = "\
EXAMPLES:
    # Pick two branches interactively and confirm
    bpk pack

    # Non-interactive, for scripts
    bpk pack main feature --yes

    # Machine-readable result
    bpk pack main feature --yes --json"
    )]
    Pack {
        /// First branch to compare
        #[arg(value_name = "BRANCH1", requires = "branch2")]
        branch1: Option<String>,

        /// Second branch to compare
        #[arg(value_name = "BRANCH2")]
        branch2: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the selectable branches, one per line
    Branches,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn pack_accepts_branch_pair() {
        let cli = Cli::try_parse_from(["bpk", "pack", "main", "feature", "--yes"]).unwrap();
        match cli.command {
            Command::Pack {
                branch1,
                branch2,
                yes,
                json,
            } => {
                assert_eq!(branch1.as_deref(), Some("main"));
                assert_eq!(branch2.as_deref(), Some("feature"));
                assert!(yes);
                assert!(!json);
            }
            other => panic!("expected pack, got {other:?}"),
        }
    }

    #[test]
    fn pack_rejects_single_branch() {
        assert!(Cli::try_parse_from(["bpk", "pack", "main"]).is_err());
    }

    #[test]
    fn quiet_disables_interactive() {
        let cli = Cli::try_parse_from(["bpk", "--quiet", "branches"]).unwrap();
        assert!(!cli.interactive());
    }

    #[test]
    fn no_interactive_conflicts_with_interactive() {
        assert!(Cli::try_parse_from(["bpk", "--interactive", "--no-interactive", "branches"])
            .is_err());
    }
}
