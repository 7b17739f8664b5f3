//! git::inspector
//!
//! Repository inspection over the external git binary.
//!
//! Each operation is a pure translation from one git command's output to a
//! typed result. Keeping them separate lets the orchestrator treat "tool
//! missing", "not a repo", "dirty tree", and "empty diff" as independent
//! decision points with distinct user-facing messages.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::BranchName;
use crate::process::{self, ProcessError};

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary is absent or does not answer a version probe.
    #[error("git is not installed or not on PATH")]
    ToolMissing(#[source] ProcessError),

    /// The given directory is not inside a git repository.
    #[error("not a git repository: {}", path.display())]
    NotARepository {
        /// The directory that was probed
        path: PathBuf,
    },

    /// A git command failed after the environment checks passed.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Verify that the git binary is available.
///
/// Succeeds iff `git --version` runs and exits zero.
pub fn check_installed() -> Result<(), GitError> {
    process::run("git", &["--version"], None)
        .map(|_| ())
        .map_err(GitError::ToolMissing)
}

/// A handle to a discovered git repository.
///
/// All operations run at the repository root, regardless of where inside
/// the working tree the process was started.
#[derive(Debug, Clone)]
pub struct Repo {
    root: PathBuf,
}

impl Repo {
    /// Discover the repository containing `path`.
    ///
    /// Resolves the worktree top level via `git rev-parse --show-toplevel`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] when `path` is not inside a
    /// git working tree.
    pub fn discover(path: &Path) -> Result<Self, GitError> {
        let root = process::run("git", &["rev-parse", "--show-toplevel"], Some(path))
            .map_err(|_| GitError::NotARepository {
                path: path.to_path_buf(),
            })?;
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    /// The repository root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Raw multi-line output of `git branch -a`, for [`super::normalize`].
    pub fn list_branches(&self) -> Result<String, GitError> {
        self.run(&["branch", "-a"])
    }

    /// Normalized, selectable branch names.
    pub fn selectable_branches(&self) -> Result<Vec<BranchName>, GitError> {
        Ok(super::normalize(&self.list_branches()?))
    }

    /// True iff `git status --porcelain` produces no output.
    ///
    /// Dirtiness is a decision point for the caller, not an error; only a
    /// failure of the status command itself propagates.
    pub fn is_working_tree_clean(&self) -> Result<bool, GitError> {
        let status = self.run(&["status", "--porcelain"])?;
        Ok(status.is_empty())
    }

    /// Paths whose content differs between the two branches' trees.
    ///
    /// Runs `git diff --name-only <b1> <b2> --`. Lines are trimmed and
    /// empty entries filtered. An empty list is valid and means "nothing
    /// to archive" — diffing a branch against itself returns exactly that.
    pub fn diff_names(
        &self,
        branch1: &BranchName,
        branch2: &BranchName,
    ) -> Result<Vec<String>, GitError> {
        let raw = self.run(&[
            "diff",
            "--name-only",
            branch1.as_str(),
            branch2.as_str(),
            "--",
        ])?;
        Ok(raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        Ok(process::run("git", args, Some(&self.root))?)
    }
}
