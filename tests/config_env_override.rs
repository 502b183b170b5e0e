use bucketize::config::{Config, apply_env_overrides};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

// These tests mutate process-wide environment variables, so they run serially.

#[test]
#[serial]
fn env_vars_override_defaults() {
    unsafe {
        env::set_var("SOURCE_PATH", "/tmp/env-src");
        env::set_var("TARGET_PATH", "/tmp/env-dst");
    }

    let mut cfg = Config::default();
    apply_env_overrides(&mut cfg);

    unsafe {
        env::remove_var("SOURCE_PATH");
        env::remove_var("TARGET_PATH");
    }

    assert_eq!(cfg.source_root, PathBuf::from("/tmp/env-src"));
    assert_eq!(cfg.target_root, PathBuf::from("/tmp/env-dst"));
}

#[test]
#[serial]
fn empty_env_values_are_ignored() {
    unsafe {
        env::set_var("SOURCE_PATH", "");
        env::remove_var("TARGET_PATH");
    }

    let mut cfg = Config::new("keep-src", "keep-dst");
    apply_env_overrides(&mut cfg);

    unsafe {
        env::remove_var("SOURCE_PATH");
    }

    assert_eq!(cfg.source_root, PathBuf::from("keep-src"));
    assert_eq!(cfg.target_root, PathBuf::from("keep-dst"));
}
