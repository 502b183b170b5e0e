//! Environment variable overrides.
//!
//! SOURCE_PATH and TARGET_PATH name the two roots, sitting between the XML
//! file and CLI flags in precedence (env beats file, flags beat env).

use std::env;
use std::path::PathBuf;

use super::types::Config;

/// Env var naming the source root.
pub const SOURCE_PATH_ENV: &str = "SOURCE_PATH";
/// Env var naming the target root.
pub const TARGET_PATH_ENV: &str = "TARGET_PATH";

/// Apply SOURCE_PATH / TARGET_PATH to `cfg` in place. Empty values are
/// ignored; unset vars are no-ops.
pub fn apply_env_overrides(cfg: &mut Config) {
    if let Some(p) = non_empty_var(SOURCE_PATH_ENV) {
        cfg.source_root = p;
    }
    if let Some(p) = non_empty_var(TARGET_PATH_ENV) {
        cfg.target_root = p;
    }
}

fn non_empty_var(name: &str) -> Option<PathBuf> {
    let val = env::var_os(name)?;
    if val.is_empty() {
        return None;
    }
    Some(PathBuf::from(val))
}
