//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Flags override env vars, which override the config file.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use bucketize::config::{Config, LogLevel};

/// CLI wrapper for the bucketize library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Generate random files and sort them into per-character bucket directories"
)]
pub struct Args {
    /// Override the source root (also SOURCE_PATH env or config file).
    #[arg(long, short = 's', value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub source_root: Option<PathBuf>,

    /// Override the target root (also TARGET_PATH env or config file).
    #[arg(long, short = 't', value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub target_root: Option<PathBuf>,

    /// Number of files to generate.
    #[arg(long, short = 'n', value_name = "N")]
    pub count: Option<usize>,

    /// Seed the random generator for a reproducible batch.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Only generate the source corpus; skip relocation.
    #[arg(long)]
    pub generate_only: bool,

    /// Only relocate an existing corpus; skip generation.
    #[arg(long, conflicts_with = "generate_only")]
    pub relocate_only: bool,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location used by bucketize and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(src) = &self.source_root {
            cfg.source_root = src.clone();
        }
        if let Some(dst) = &self.target_root {
            cfg.target_root = dst.clone();
        }
        if let Some(n) = self.count {
            cfg.file_count = n;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
