//! branches command - List the selectable branches

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::git::{self, Repo};

/// Print the normalized selectable branch list, one per line.
///
/// The output is exactly what the pack command's interactive picker
/// offers: current-branch marker stripped, symbolic alias refs excluded,
/// order and duplicates as git reports them.
pub fn branches(ctx: &Context) -> Result<()> {
    git::check_installed()?;
    let repo = Repo::discover(&ctx.working_dir()?)?;

    for branch in repo
        .selectable_branches()
        .context("couldn't list branches")?
    {
        println!("{branch}");
    }

    Ok(())
}
