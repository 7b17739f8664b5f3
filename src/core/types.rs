//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`BranchName`] - Validated Git branch name
//! - [`ArchiveRequest`] - A pair of branches plus the files that differ
//! - [`ArchiveResult`] - Terminal description of a finished archive
//!
//! # Validation
//!
//! [`BranchName`] enforces validity at construction time. Invalid values
//! cannot be represented, which keeps the alias-arrow marker and
//! whitespace-wrapped entries out of every later stage.

use serde::Serialize;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),
}

/// The marker git uses for symbolic refs in branch listings,
/// e.g. `remotes/origin/HEAD -> origin/main`.
pub const ALIAS_ARROW: &str = " -> ";

/// A validated Git branch name.
///
/// Branch names must conform to a subset of Git's refname rules
/// (see `git check-ref-format`):
/// - Cannot be empty
/// - Cannot start with `.` or `-`
/// - Cannot end with `.lock` or `/`
/// - Cannot contain `..`, `@{`, or `//`
/// - Cannot contain whitespace, `~`, `^`, `:`, `\`, `?`, `*`, `[`,
///   or ASCII control characters
///
/// The whitespace rule also guarantees a name never carries the symbolic
/// alias marker (`" -> "`) from a raw branch listing.
///
/// # Example
///
/// ```
/// use branchpack::core::types::BranchName;
///
/// let name = BranchName::new("feature/my-branch").unwrap();
/// assert_eq!(name.as_str(), "feature/my-branch");
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("has space").is_err());
/// assert!(BranchName::new("bad..name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates the
    /// refname rules above.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a branch name.
    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot be empty".into(),
            ));
        }

        if name.starts_with('.') || name.starts_with('-') {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot start with '.' or '-'".into(),
            ));
        }

        if name.ends_with(".lock") {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot end with '.lock'".into(),
            ));
        }
        if name.ends_with('/') {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot end with '/'".into(),
            ));
        }

        for forbidden in ["..", "@{", "//"] {
            if name.contains(forbidden) {
                return Err(TypeError::InvalidBranchName(format!(
                    "branch name cannot contain '{forbidden}'"
                )));
            }
        }

        const INVALID_CHARS: [char; 7] = ['~', '^', ':', '\\', '?', '*', '['];
        for c in INVALID_CHARS {
            if name.contains(c) {
                return Err(TypeError::InvalidBranchName(format!(
                    "branch name cannot contain '{c}'"
                )));
            }
        }

        // Whitespace covers the alias-arrow marker as well.
        if name.chars().any(|c| c.is_whitespace() || c.is_ascii_control()) {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot contain whitespace or control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with path separators replaced by `-`, safe for use
    /// inside a file name.
    pub fn file_safe(&self) -> String {
        self.0.replace(['/', '\\'], "-")
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pair of branches plus the files that differ between them.
///
/// Constructed by the orchestrator, consumed once by the archive builder.
/// The two branch names are expected to be distinct, but identical names
/// are tolerated: the diff of a branch against itself is empty and the
/// builder simply produces an empty member set.
#[derive(Debug, Clone)]
pub struct ArchiveRequest {
    /// First branch of the comparison.
    pub branch1: BranchName,
    /// Second branch of the comparison.
    pub branch2: BranchName,
    /// Repository-relative paths whose content differs.
    pub files: Vec<String>,
}

/// Terminal description of a finished archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveResult {
    /// File name of the archive on disk.
    pub file_name: String,
    /// Total bytes written to the archive file.
    pub total_bytes: u64,
}
