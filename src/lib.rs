//! Core library for `bucketize`.
//!
//! Generates a corpus of random files (name == content) under a source root,
//! then fans copies of every file out into `target/<first-char>/<name>`
//! bucket directories. The two phases are independent: relocation works on
//! any flat directory of files, whoever wrote them.
//!
//! Keep the library small and ergonomic: a Config type with layered loading
//! (XML file, env vars, CLI flags), typed errors, and pure-ish functions that
//! return per-file outcome reports instead of printing.

pub mod classify;
pub mod config;
pub mod errors;
pub mod fs_util;
pub mod generate;
pub mod output;
pub mod relocate;

pub use classify::{ClassifyError, classify};
pub use config::{Config, LogLevel};
pub use errors::BucketizeError;
pub use fs_util::ensure_dir;
pub use generate::{ALPHABET, CONTENT_LEN, DEFAULT_FILE_COUNT, GenerateReport, generate};
pub use relocate::{FileOutcome, RelocateReport, relocate};
