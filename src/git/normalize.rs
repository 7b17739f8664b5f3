//! git::normalize
//!
//! Branch-listing normalization.

use crate::core::types::{BranchName, ALIAS_ARROW};

/// Normalize raw `git branch -a` output into selectable branch names.
///
/// Per line: trim surrounding whitespace, strip a leading `"* "`
/// current-branch marker and re-trim, then discard the line if it is
/// empty, carries the symbolic-alias arrow (remote HEAD refs are not
/// selectable comparison targets), or fails branch-name validation
/// (covers placeholders like `(HEAD detached at abc1234)`).
///
/// Input order is preserved and duplicates are kept — the same branch may
/// legitimately appear once per remote. Zero or one surviving branch is a
/// valid return; deciding that fewer than two is an error belongs to the
/// caller.
pub fn normalize(raw: &str) -> Vec<BranchName> {
    raw.lines()
        .map(str::trim)
        .map(|line| match line.strip_prefix("* ") {
            Some(rest) => rest.trim(),
            None => line,
        })
        .filter(|line| !line.is_empty())
        .filter(|line| !line.contains(ALIAS_ARROW))
        .filter_map(|line| BranchName::new(line).ok())
        .collect()
}
