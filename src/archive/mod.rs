//! archive
//!
//! Streams a diff's file list into a compressed zip archive.
//!
//! # Design
//!
//! The builder consumes an [`ArchiveRequest`] exactly once. Members are
//! registered under their repository-relative paths so the archive mirrors
//! the repository layout. A member missing on disk is a warning, not a
//! failure — a diff computed against the *other* branch may reference
//! files absent from the currently checked-out tree. Any other read or
//! write failure rejects the whole build with the first error.
//!
//! The writer is finalized on success and dropped on failure, so a file
//! handle never outlives the build. A truncated archive left behind by a
//! failed build is not cleaned up; the caller reports the error and the
//! user decides what to do with the partial file.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::types::{ArchiveRequest, ArchiveResult, BranchName};
use crate::ui::output::{self, Verbosity};

/// Errors from archive construction.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The destination file could not be created.
    #[error("failed to create archive '{}': {source}", path.display())]
    Create {
        /// Destination path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// A member could not be registered in the archive.
    #[error("failed to add '{member}' to archive: {source}")]
    Member {
        /// Repository-relative member path
        member: String,
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },

    /// A member existed but could not be read or copied into the archive.
    #[error("failed to write '{member}' into archive: {source}")]
    MemberWrite {
        /// Repository-relative member path
        member: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The central directory could not be finalized.
    #[error("failed to finalize archive: {source}")]
    Finalize {
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },

    /// The finished archive could not be stat'ed for its size.
    #[error("failed to inspect archive '{}': {source}", path.display())]
    Inspect {
        /// Destination path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}

/// Build a zip archive from the request's file list.
///
/// Member paths are resolved against `repo_root`; the archive itself is
/// created inside `dest_dir` under the name
/// `{branch1}-{branch2}-{timestamp_millis}.zip` (path separators in
/// branch names replaced by `-`).
///
/// Blank entries in the file list are dropped. Members missing on disk
/// are skipped with a warning. The first hard error rejects the build.
pub fn build(
    request: &ArchiveRequest,
    repo_root: &Path,
    dest_dir: &Path,
    verbosity: Verbosity,
) -> Result<ArchiveResult, ArchiveError> {
    let file_name = archive_file_name(
        &request.branch1,
        &request.branch2,
        Utc::now().timestamp_millis(),
    );
    let dest = dest_dir.join(&file_name);

    let file = File::create(&dest).map_err(|source| ArchiveError::Create {
        path: dest.clone(),
        source,
    })?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    for member in request.files.iter().map(|f| f.trim()) {
        if member.is_empty() {
            continue;
        }

        let mut source = match File::open(repo_root.join(member)) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                output::warn(format!("skipping missing file: {member}"), verbosity);
                continue;
            }
            Err(source) => {
                return Err(ArchiveError::MemberWrite {
                    member: member.to_string(),
                    source,
                })
            }
        };

        writer
            .start_file(member, options)
            .map_err(|source| ArchiveError::Member {
                member: member.to_string(),
                source,
            })?;
        io::copy(&mut source, &mut writer).map_err(|source| ArchiveError::MemberWrite {
            member: member.to_string(),
            source,
        })?;
    }

    let file = writer
        .finish()
        .map_err(|source| ArchiveError::Finalize { source })?;
    let total_bytes = file
        .metadata()
        .map_err(|source| ArchiveError::Inspect {
            path: dest.clone(),
            source,
        })?
        .len();

    Ok(ArchiveResult {
        file_name,
        total_bytes,
    })
}

/// SHA-256 digest of a file on disk, as lowercase hex.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Archive name for a branch pair and creation timestamp.
fn archive_file_name(branch1: &BranchName, branch2: &BranchName, millis: i64) -> String {
    format!(
        "{}-{}-{}.zip",
        branch1.file_safe(),
        branch2.file_safe(),
        millis
    )
}
