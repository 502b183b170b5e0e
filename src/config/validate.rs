//! Config validation logic.
//! Verifies the roots are usable directories (where they exist) and distinct.

use anyhow::{Result, bail};
use std::fs;
use tracing::{debug, info};

use super::types::Config;

impl Config {
    /// Sanity-check the configured roots.
    ///
    /// Neither root is required to exist yet: generation creates the source
    /// root and relocation creates the target root. What is checked:
    /// - an existing root must be a directory, not a file;
    /// - the two roots must not resolve to the same path;
    /// - a generation batch of zero files is almost certainly a typo.
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [("source_root", &self.source_root), ("target_root", &self.target_root)] {
            if path.as_os_str().is_empty() {
                bail!("{name} is empty; set it via config file, env or flags");
            }
            if path.exists() && !path.is_dir() {
                bail!("{name} exists but isn't a directory: {}", path.display());
            }
            debug!("{name} ok: {}", path.display());
        }

        // Account for symlinks before comparing.
        let src_real = fs::canonicalize(&self.source_root).unwrap_or_else(|_| self.source_root.clone());
        let dst_real = fs::canonicalize(&self.target_root).unwrap_or_else(|_| self.target_root.clone());
        if src_real == dst_real {
            bail!(
                "source_root and target_root resolve to the same path: '{}'",
                src_real.display()
            );
        }

        if self.file_count == 0 {
            bail!("file_count is 0; nothing would be generated");
        }

        info!(
            "Config validated: source='{}' target='{}' count={}",
            self.source_root.display(),
            self.target_root.display(),
            self.file_count
        );
        Ok(())
    }
}
