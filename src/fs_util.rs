//! Idempotent directory creation.

use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

use crate::errors::BucketizeError;

/// Create `path` (and missing ancestors) if absent; succeed without touching
/// anything if it already exists as a directory.
///
/// An existing entry that is *not* a directory fails with a distinct error
/// rather than being treated as ready to use, so a stray regular file at the
/// path cannot satisfy the check and break later writes.
pub fn ensure_dir(path: &Path) -> Result<(), BucketizeError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(BucketizeError::NotADirectory(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path).map_err(|source| BucketizeError::path_access(path, source))?;
            info!(path = %path.display(), "created directory");
            Ok(())
        }
        Err(source) => Err(BucketizeError::path_access(path, source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_directory_and_ancestors() {
        let td = tempdir().unwrap();
        let deep = td.path().join("a").join("b").join("c");
        ensure_dir(&deep).expect("ensure_dir");
        assert!(deep.is_dir());
    }

    #[test]
    fn existing_directory_is_a_noop() {
        let td = tempdir().unwrap();
        ensure_dir(td.path()).expect("first");
        ensure_dir(td.path()).expect("second");
        assert!(td.path().is_dir());
    }

    #[test]
    fn existing_file_is_rejected() {
        let td = tempdir().unwrap();
        let file = td.path().join("occupied");
        fs::write(&file, b"x").unwrap();
        match ensure_dir(&file) {
            Err(BucketizeError::NotADirectory(p)) => assert_eq!(p, file),
            other => panic!("expected NotADirectory, got {:?}", other),
        }
    }
}
