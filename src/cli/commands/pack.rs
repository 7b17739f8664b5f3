//! pack command - The branch-diff-to-archive pipeline

use anyhow::{bail, Context as _, Result};
use serde::Serialize;

use crate::archive;
use crate::cli::Context;
use crate::core::types::{ArchiveRequest, ArchiveResult, BranchName};
use crate::git::{self, Repo};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{self, PromptError, UncleanAction};

/// Machine-readable result emitted under `--json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ArchiveResult,
    sha256: &'a str,
}

/// Package the diff between two branches into a zip archive.
///
/// Sequence: environment preconditions, branch candidates, branch pair
/// selection, confirmation, working-tree cleanliness, diff, archive,
/// report. A user-chosen abort at any prompt returns `Ok` so the process
/// exits 0; every unrecoverable failure propagates as an error.
pub fn pack(
    ctx: &Context,
    branch1: Option<&str>,
    branch2: Option<&str>,
    yes: bool,
    json: bool,
) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    git::check_installed()?;
    let cwd = ctx.working_dir()?;
    let repo = Repo::discover(&cwd)?;
    output::debug(
        format!("repository root: {}", repo.root().display()),
        verbosity,
    );

    let candidates = repo
        .selectable_branches()
        .context("couldn't list branches")?;
    if candidates.len() < 2 {
        bail!(
            "found {} selectable branch(es); need at least two to compare",
            candidates.len()
        );
    }

    let (branch1, branch2) = match (branch1, branch2) {
        (Some(b1), Some(b2)) => (
            BranchName::new(b1).with_context(|| format!("invalid branch name '{b1}'"))?,
            BranchName::new(b2).with_context(|| format!("invalid branch name '{b2}'"))?,
        ),
        _ if ctx.interactive => match prompts::select_two_branches(&candidates, true) {
            Ok(pair) => pair,
            Err(PromptError::Cancelled) => return abort(verbosity),
            Err(err) => return Err(err.into()),
        },
        _ => bail!("branch names are required in non-interactive mode (pass BRANCH1 BRANCH2)"),
    };

    if !yes && ctx.interactive {
        let message = format!(
            "Create a zip archive from the diff of '{branch1}' and '{branch2}'?"
        );
        match prompts::confirm(&message, true, true) {
            Ok(true) => {}
            Ok(false) | Err(PromptError::Cancelled) => return abort(verbosity),
            Err(err) => return Err(err.into()),
        }
    }

    let clean = repo
        .is_working_tree_clean()
        .context("couldn't check working tree status")?;
    if !clean {
        if ctx.interactive {
            match prompts::choose_unclean_action(true) {
                Ok(UncleanAction::Proceed) => {
                    output::warn("continuing with a dirty working tree", verbosity);
                }
                Ok(UncleanAction::Abort) | Err(PromptError::Cancelled) => {
                    return abort(verbosity);
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            bail!(
                "working tree has uncommitted changes; commit them or rerun interactively"
            );
        }
    }

    let files = repo
        .diff_names(&branch1, &branch2)
        .context("couldn't compute diff")?;
    if files.is_empty() {
        output::print(
            format!("No differences between '{branch1}' and '{branch2}'; nothing to archive."),
            verbosity,
        );
        return Ok(());
    }
    output::debug(format!("{} file(s) differ", files.len()), verbosity);

    let request = ArchiveRequest {
        branch1,
        branch2,
        files,
    };
    let result =
        archive::build(&request, repo.root(), &cwd, verbosity).context("couldn't build archive")?;
    let digest =
        archive::sha256_file(&cwd.join(&result.file_name)).context("couldn't checksum archive")?;

    if json {
        let report = JsonReport {
            result: &result,
            sha256: &digest,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::success(format!("{} created", result.file_name), verbosity);
        output::print(format!("Total bytes: {}", result.total_bytes), verbosity);
        output::print(format!("SHA-256: {digest}"), verbosity);
    }

    Ok(())
}

/// Graceful user-chosen exit; not an error.
fn abort(verbosity: Verbosity) -> Result<()> {
    output::print("Aborted.", verbosity);
    Ok(())
}
