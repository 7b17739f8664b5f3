//! process
//!
//! Subprocess execution with captured output.
//!
//! # Design
//!
//! Every external invocation passes an explicit argument vector to a
//! direct-exec primitive. Nothing here ever builds a shell string, so
//! branch and file names containing shell metacharacters reach the child
//! process byte-exact.
//!
//! A single external call is a single logical operation: there are no
//! retries, and both stdout and stderr are captured to completion before
//! the outcome is decided.

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors from subprocess execution.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The command could not be started at all (not found, no permission).
    #[error("failed to start '{program}': {source}")]
    SpawnFailure {
        /// The program that failed to start
        program: String,
        /// The underlying OS error
        #[source]
        source: io::Error,
    },

    /// The command ran but exited with a non-zero status.
    #[error("'{program}' exited with {}", exit_display(.code))]
    NonZeroExit {
        /// The program that failed
        program: String,
        /// Exit code, absent when the child was killed by a signal
        code: Option<i32>,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },
}

fn exit_display(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl ProcessError {
    /// Captured stderr of a failed command, if any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            ProcessError::NonZeroExit { stderr, .. } => Some(stderr),
            ProcessError::SpawnFailure { .. } => None,
        }
    }

    /// Exit code of a failed command, if it ran at all.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::NonZeroExit { code, .. } => *code,
            ProcessError::SpawnFailure { .. } => None,
        }
    }
}

/// Run a command with the given argument vector and capture its output.
///
/// On exit code 0 resolves with trimmed stdout. On a non-zero exit
/// resolves with [`ProcessError::NonZeroExit`] carrying the exit code and
/// both captured streams. A command that cannot be started resolves with
/// [`ProcessError::SpawnFailure`].
///
/// When `cwd` is given the child runs in that directory.
pub fn run<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    cwd: Option<&Path>,
) -> Result<String, ProcessError> {
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|source| ProcessError::SpawnFailure {
        program: program.to_string(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

    if output.status.success() {
        Ok(stdout)
    } else {
        Err(ProcessError::NonZeroExit {
            program: program.to_string(),
            code: output.status.code(),
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
