//! Source corpus generation.
//!
//! Writes a batch of files into the source root. Each file's name equals its
//! own content, so a name collision can only happen when the content collides
//! too, and the overwrite is byte-identical (benign).
//!
//! The generator owns no randomness itself: callers pass a seeded or
//! entropy-backed [`StdRng`], which keeps test runs reproducible without any
//! process-global RNG state.

use rand::Rng;
use rand::rngs::StdRng;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::BucketizeError;
use crate::fs_util::ensure_dir;

/// Symbols file content is drawn from: digits, lowercase, uppercase and '!'.
pub const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!";

/// Characters per generated file.
pub const CONTENT_LEN: usize = 10;

/// Files produced by a default batch.
pub const DEFAULT_FILE_COUNT: usize = 12;

/// What a generation run produced.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Names (== contents) successfully written.
    pub written: Vec<String>,
    /// Per-file write failures; each is also logged when it happens.
    pub failed: usize,
}

/// Draw `len` symbols uniformly, with replacement, from [`ALPHABET`].
pub fn random_content(rng: &mut StdRng, len: usize) -> String {
    let symbols: Vec<char> = ALPHABET.chars().collect();
    (0..len).map(|_| symbols[rng.gen_range(0..symbols.len())]).collect()
}

/// Write `count` random files under `base`, creating it first.
///
/// A failure to ensure `base` aborts the whole batch; a failure to write one
/// file is logged, counted, and generation moves on to the next.
pub fn generate(base: &Path, rng: &mut StdRng, count: usize) -> Result<GenerateReport, BucketizeError> {
    ensure_dir(base)?;

    let mut report = GenerateReport::default();
    for _ in 0..count {
        let contents = random_content(rng, CONTENT_LEN);
        let path = base.join(&contents);
        match fs::write(&path, contents.as_bytes()) {
            Ok(()) => {
                debug!(file = %path.display(), "generated file");
                report.written.push(contents);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "failed to write generated file");
                report.failed += 1;
            }
        }
    }
    Ok(report)
}
