//! End-to-end tests for the `bpk` binary.
//!
//! These tests drive the compiled binary against real git repositories in
//! temporary directories. Everything runs with `--no-interactive` so no
//! prompt can block the suite.

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Test fixture that creates a real git repository.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Repo with an initial commit on main.
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "-b", "main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(dir.path(), &["add", "README.md"]);
        run_git(dir.path(), &["commit", "-m", "Initial commit"]);

        Self { dir }
    }

    /// Repo with a `feature` branch (left checked out) that adds `a.txt`
    /// and `b/c.txt` on top of main.
    fn with_feature_branch() -> Self {
        let repo = Self::new();
        run_git(repo.path(), &["checkout", "-b", "feature"]);
        repo.write("a.txt", "alpha\n");
        repo.write("b/c.txt", "gamma\n");
        run_git(repo.path(), &["add", "."]);
        run_git(repo.path(), &["commit", "-m", "feature work"]);
        repo
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, rel: &str, content: &str) {
        let full = self.dir.path().join(rel);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Names of zip files currently in the repo directory.
    fn zip_files(&self) -> Vec<String> {
        let mut zips: Vec<String> = std::fs::read_dir(self.path())
            .unwrap()
            .filter_map(|entry| {
                let name = entry.unwrap().file_name().into_string().unwrap();
                name.ends_with(".zip").then_some(name)
            })
            .collect();
        zips.sort();
        zips
    }
}

fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn bpk(repo_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bpk").unwrap();
    cmd.current_dir(repo_dir).arg("--no-interactive");
    cmd
}

#[test]
fn pack_creates_archive_from_branch_diff() {
    let repo = TestRepo::with_feature_branch();

    bpk(repo.path())
        .args(["pack", "main", "feature", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".zip created"))
        .stdout(predicate::str::contains("Total bytes:"))
        .stdout(predicate::str::contains("SHA-256:"));

    let zips = repo.zip_files();
    assert_eq!(zips.len(), 1);
    assert!(zips[0].starts_with("main-feature-"));
}

#[test]
fn pack_json_emits_machine_readable_result() {
    let repo = TestRepo::with_feature_branch();

    let output = bpk(repo.path())
        .args(["pack", "main", "feature", "--yes", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["file_name"]
        .as_str()
        .unwrap()
        .starts_with("main-feature-"));
    assert!(report["total_bytes"].as_u64().unwrap() > 0);
    assert_eq!(report["sha256"].as_str().unwrap().len(), 64);
}

#[test]
fn pack_with_identical_branches_archives_nothing() {
    let repo = TestRepo::with_feature_branch();

    bpk(repo.path())
        .args(["pack", "main", "main", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to archive"));

    assert!(repo.zip_files().is_empty());
}

#[test]
fn pack_outside_repository_fails() {
    let dir = TempDir::new().unwrap();

    bpk(dir.path())
        .args(["pack", "main", "feature", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn pack_with_one_branch_fails_before_prompting() {
    let repo = TestRepo::new();

    bpk(repo.path())
        .arg("pack")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("need at least two"));
}

#[test]
fn pack_without_branch_args_fails_non_interactively() {
    let repo = TestRepo::with_feature_branch();

    bpk(repo.path())
        .arg("pack")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("non-interactive"));
}

#[test]
fn pack_with_dirty_tree_fails_non_interactively() {
    let repo = TestRepo::with_feature_branch();
    repo.write("scratch.txt", "wip\n");

    bpk(repo.path())
        .args(["pack", "main", "feature", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("uncommitted changes"));

    assert!(repo.zip_files().is_empty());
}

#[test]
fn pack_rejects_malformed_branch_name() {
    let repo = TestRepo::with_feature_branch();

    bpk(repo.path())
        .args(["pack", "bad..name", "feature", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid branch name"));
}

#[test]
fn pack_skips_file_missing_from_checkout() {
    let repo = TestRepo::with_feature_branch();
    // a.txt exists only on feature; with main checked out it is absent
    // from the working tree, so it must be skipped with a warning.
    run_git(repo.path(), &["checkout", "main"]);

    bpk(repo.path())
        .args(["pack", "main", "feature", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping missing file: a.txt"));
}

#[test]
fn branches_lists_normalized_names() {
    let repo = TestRepo::with_feature_branch();

    bpk(repo.path())
        .arg("branches")
        .assert()
        .success()
        .stdout(predicate::str::diff("feature\nmain\n"));
}

#[test]
fn branches_outside_repository_fails() {
    let dir = TempDir::new().unwrap();

    bpk(dir.path())
        .arg("branches")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn completion_emits_script() {
    Command::cargo_bin("bpk")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bpk"));
}

#[test]
fn quiet_pack_still_creates_archive() {
    let repo = TestRepo::with_feature_branch();

    bpk(repo.path())
        .args(["--quiet", "pack", "main", "feature", "--yes"])
        .assert()
        .success();

    assert_eq!(repo.zip_files().len(), 1);
}
