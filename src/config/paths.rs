//! Default path helpers.
//! Determines OS-appropriate config and log file locations.

use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Explicit config file override, checked before the platform default.
pub const CONFIG_ENV: &str = "BUCKETIZE_CONFIG";

/// OS-appropriate default config path.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(mut base) = config_dir() {
        base.push("bucketize");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("bucketize")
                .join("config.xml")
        })
    }
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("bucketize");
        // best-effort
        let _ = fs::create_dir_all(&base);
        base.push("bucketize.log");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("bucketize")
                .join("bucketize.log")
        })
    }
}
