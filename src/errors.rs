//! Typed error definitions for bucketize.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::classify::ClassifyError;

#[derive(Debug, Error)]
pub enum BucketizeError {
    #[error("error accessing path '{path}': {source}")]
    PathAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot derive a bucket key for '{path}': {source}")]
    Unclassifiable {
        path: PathBuf,
        #[source]
        source: ClassifyError,
    },

    #[error("could not write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BucketizeError {
    /// Stable short code for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            BucketizeError::PathAccess { .. } => "path_access",
            BucketizeError::NotADirectory(_) => "not_a_directory",
            BucketizeError::Read { .. } => "read",
            BucketizeError::Unclassifiable { .. } => "unclassifiable",
            BucketizeError::Write { .. } => "write",
        }
    }

    /// Helper for the common "stat/create failed" construction.
    pub fn path_access(path: &std::path::Path, source: io::Error) -> Self {
        BucketizeError::PathAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}
