//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a template at the default location if missing (unless
//!   BUCKETIZE_CONFIG points elsewhere).
//!
//! This module only reads/writes the config file; path validation happens in
//! `config::validate`. Unknown XML fields are a hard error so typos surface
//! instead of being ignored.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{CONFIG_ENV, default_config_path, default_log_path};
use super::types::{Config, LogLevel};
use super::{SOURCE_ROOT_DEFAULT, TARGET_ROOT_DEFAULT};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    source_root: Option<String>,
    target_root: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    file_count: Option<usize>,
}

// Trims surrounding whitespace before parsing the optional count.
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<usize>().ok()))
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(s) = parsed.source_root.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.source_root = PathBuf::from(trimmed);
        }
    }
    if let Some(s) = parsed.target_root.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.target_root = PathBuf::from(trimmed);
        }
    }
    if let Some(s) = parsed.log_level.as_deref() {
        if let Some(level) = LogLevel::parse(s.trim()) {
            cfg.log_level = level;
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    if let Some(n) = parsed.file_count {
        cfg.file_count = n;
    }

    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Load the effective file-backed config, if any.
///
/// BUCKETIZE_CONFIG, when set, must name a readable file (errors propagate so
/// a misconfigured override never silently falls back). Otherwise the
/// platform default path is tried; a missing default file yields Ok(None).
pub fn load_config() -> Result<Option<Config>> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        let path = PathBuf::from(p);
        let cfg = load_config_from_path(&path)?;
        info!(path = %path.display(), "loaded config from BUCKETIZE_CONFIG");
        return Ok(Some(cfg));
    }

    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let cfg = load_config_from_path(&path)?;
    info!(path = %path.display(), "loaded config from default path");
    Ok(Some(cfg))
}

/// Write a commented template config at `path`, creating parent directories.
///
/// On Unix this tightens permissions best-effort (dir 0o700, file 0o600);
/// failures there do not block creation on unusual filesystems.
pub fn create_template_config(path: &Path) -> Result<()> {
    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
        #[cfg(unix)]
        {
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/bucketize.log".into());

    let content = format!(
        "<!--\n  bucketize configuration (XML)\n\n  Fields:\n    source_root  -> directory generated files are written to and relocation reads from\n    target_root  -> directory bucket subdirectories are created under\n    log_level    -> quiet | normal | info | debug\n    log_file     -> path to log file (optional; stdout is always used)\n    file_count   -> files per generation batch\n\n  Notes:\n    - SOURCE_PATH / TARGET_PATH environment variables override the roots.\n    - CLI flags override everything.\n-->\n<config>\n  <source_root>{}</source_root>\n  <target_root>{}</target_root>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <file_count>{}</file_count>\n</config>\n",
        SOURCE_ROOT_DEFAULT,
        TARGET_ROOT_DEFAULT,
        suggested_log,
        crate::generate::DEFAULT_FILE_COUNT,
    );

    fs::write(path, content).with_context(|| format!("write template config '{}'", path.display()))?;
    #[cfg(unix)]
    {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create the default config if BUCKETIZE_CONFIG is not set and none exists;
/// returns the created path so the CLI can inform the user.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        return None;
    }

    let cfg_path = default_config_path()?;
    if cfg_path.exists() {
        return None;
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Some(cfg_path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_a_full_config() {
        let td = tempdir().unwrap();
        let path = td.path().join("config.xml");
        fs::write(
            &path,
            "<config>\n  <source_root>/tmp/in</source_root>\n  <target_root>/tmp/out</target_root>\n  <log_level>debug</log_level>\n  <file_count> 20 </file_count>\n</config>\n",
        )
        .unwrap();

        let cfg = load_config_from_path(&path).expect("load");
        assert_eq!(cfg.source_root, PathBuf::from("/tmp/in"));
        assert_eq!(cfg.target_root, PathBuf::from("/tmp/out"));
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.file_count, 20);
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let td = tempdir().unwrap();
        let path = td.path().join("config.xml");
        fs::write(&path, "<config>\n  <source_root>/x</source_root>\n</config>\n").unwrap();

        let cfg = load_config_from_path(&path).expect("load");
        assert_eq!(cfg.source_root, PathBuf::from("/x"));
        assert_eq!(cfg.target_root, PathBuf::from(TARGET_ROOT_DEFAULT));
        assert_eq!(cfg.file_count, crate::generate::DEFAULT_FILE_COUNT);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let td = tempdir().unwrap();
        let path = td.path().join("config.xml");
        fs::write(&path, "<config>\n  <surce_root>/x</surce_root>\n</config>\n").unwrap();

        assert!(load_config_from_path(&path).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn template_gets_conservative_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let td = tempdir().unwrap();
        let path = td.path().join("confdir").join("config.xml");
        create_template_config(&path).expect("template");

        let dir_mode = fs::metadata(path.parent().unwrap()).unwrap().permissions().mode();
        let file_mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(dir_mode & 0o777, 0o700, "config dir should be 0700");
        assert_eq!(file_mode & 0o777, 0o600, "config file should be 0600");
    }

    #[test]
    fn template_round_trips() {
        let td = tempdir().unwrap();
        let path = td.path().join("nested").join("config.xml");
        create_template_config(&path).expect("template");
        let cfg = load_config_from_path(&path).expect("load template");
        assert_eq!(cfg.source_root, PathBuf::from(SOURCE_ROOT_DEFAULT));
        assert_eq!(cfg.target_root, PathBuf::from(TARGET_ROOT_DEFAULT));
    }
}
