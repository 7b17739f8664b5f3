//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to git. Every repository read flows
//! through [`Repo`], which wraps the discovered repository root and issues
//! one subprocess call per operation via [`crate::process`]. No other
//! module spawns git directly.
//!
//! The repository root is an explicit handle rather than ambient
//! process-wide state: [`Repo::discover`] resolves it once and every later
//! call runs there, which keeps the inspector testable against fixture
//! repositories in temporary directories.
//!
//! # Responsibilities
//!
//! - Tool availability probe ([`check_installed`])
//! - Repository discovery ([`Repo::discover`])
//! - Branch listing and normalization ([`Repo::list_branches`], [`normalize`])
//! - Working-tree cleanliness ([`Repo::is_working_tree_clean`])
//! - Name-only diff between two branches ([`Repo::diff_names`])
//!
//! # Invariants
//!
//! - Each operation is a single fixed argument vector; no shell strings
//! - All operations return strong types at the boundary
//! - An empty diff is a valid result, not an error

mod inspector;
mod normalize;

pub use inspector::{check_installed, GitError, Repo};
pub use normalize::normalize;
