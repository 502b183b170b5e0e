//! Bucketed relocation: the core fan-out.
//!
//! Walks the flat source root, classifies each regular file by its leading
//! character, and writes a copy of its bytes into `target_root/<key>/<name>`.
//! Sources are never modified or deleted; an existing copy of the same name is
//! overwritten (last write wins).
//!
//! Diagnostics are data: every processed file yields a [`FileOutcome`], and
//! the run returns a [`RelocateReport`] the caller can render or assert on.
//! Failures are local to one file; the batch always continues. Only an
//! unusable source root aborts the run before any file is touched.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::classify::classify;
use crate::errors::BucketizeError;
use crate::fs_util::ensure_dir;

/// Result of processing one source entry.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file's bytes were copied into its bucket.
    Relocated { name: String, dest: PathBuf },
    /// The file was skipped with a per-file error; the batch continued.
    Failed { name: String, error: BucketizeError },
}

impl FileOutcome {
    pub fn is_relocated(&self) -> bool {
        matches!(self, FileOutcome::Relocated { .. })
    }
}

/// Aggregated outcomes of one relocation run.
#[derive(Debug, Default)]
pub struct RelocateReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RelocateReport {
    pub fn relocated(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_relocated()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.relocated()
    }
}

/// Copy every regular file under `source_root` into its bucket directory
/// under `target_root`.
///
/// The source root must already exist as a directory; a missing or unreadable
/// root is a run-level error and no files are processed. The target root is
/// ensured at the end of the run, so it exists even when the source held no
/// files. Bucket directories are created lazily, on the first file routed to
/// their key.
pub fn relocate(source_root: &Path, target_root: &Path) -> Result<RelocateReport, BucketizeError> {
    let meta = fs::metadata(source_root)
        .map_err(|source| BucketizeError::path_access(source_root, source))?;
    if !meta.is_dir() {
        return Err(BucketizeError::NotADirectory(source_root.to_path_buf()));
    }

    let entries = fs::read_dir(source_root)
        .map_err(|source| BucketizeError::path_access(source_root, source))?;

    let outcomes: Vec<FileOutcome> = entries
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!(dir = %source_root.display(), error = %e, "unreadable directory entry; skipping");
                None
            }
        })
        .filter(|entry| match entry.file_type() {
            Ok(ft) if ft.is_dir() => {
                debug!(path = %entry.path().display(), "skipping directory entry");
                false
            }
            Ok(_) => true,
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "could not stat entry; skipping");
                false
            }
        })
        .map(|entry| {
            let outcome = relocate_one(source_root, target_root, entry.file_name());
            log_outcome(&outcome);
            outcome
        })
        .collect();

    // Guarantees a target root even for an empty source directory.
    ensure_dir(target_root)?;

    Ok(RelocateReport { outcomes })
}

/// Classify and copy a single file; never propagates, always yields an outcome.
fn relocate_one(source_root: &Path, target_root: &Path, file_name: OsString) -> FileOutcome {
    let name = file_name.to_string_lossy().into_owned();
    let src = source_root.join(&file_name);

    let data = match fs::read(&src) {
        Ok(d) => d,
        Err(source) => return failed(name, read_error(&src, source)),
    };

    let key = match classify(&data) {
        Ok(k) => k,
        Err(source) => {
            return failed(
                name,
                BucketizeError::Unclassifiable {
                    path: src,
                    source,
                },
            );
        }
    };

    let bucket = target_root.join(key.to_string());
    if let Err(error) = ensure_dir(&bucket) {
        return failed(name, error);
    }

    let dest = bucket.join(&file_name);
    match fs::write(&dest, &data) {
        Ok(()) => FileOutcome::Relocated { name, dest },
        Err(source) => failed(
            name,
            BucketizeError::Write {
                path: dest,
                source,
            },
        ),
    }
}

fn failed(name: String, error: BucketizeError) -> FileOutcome {
    FileOutcome::Failed { name, error }
}

fn read_error(path: &Path, source: io::Error) -> BucketizeError {
    BucketizeError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn log_outcome(outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Relocated { name, dest } => {
            info!(file = %name, dest = %dest.display(), "relocated file");
        }
        FileOutcome::Failed { name, error } => {
            warn!(code = error.code(), file = %name, error = %error, "skipping file");
        }
    }
}
