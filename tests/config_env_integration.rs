use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

/// The binary honors SOURCE_PATH / TARGET_PATH env vars for the two roots.
#[test]
fn binary_uses_roots_from_env() {
    let td = tempdir().unwrap();
    let source = td.path().join("env-src");
    let target = td.path().join("env-dst");
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config>\n  <log_level>quiet</log_level>\n</config>\n").unwrap();

    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("alpha"), b"alpha").unwrap();

    Command::cargo_bin("bucketize")
        .unwrap()
        .env("BUCKETIZE_CONFIG", &cfg)
        .env("SOURCE_PATH", &source)
        .env("TARGET_PATH", &target)
        .arg("--relocate-only")
        .assert()
        .success();

    assert_eq!(fs::read(target.join("a").join("alpha")).unwrap(), b"alpha");
}

/// CLI flags win over env vars.
#[test]
fn flags_override_env_roots() {
    let td = tempdir().unwrap();
    let env_source = td.path().join("from-env");
    let flag_source = td.path().join("from-flag");
    let target = td.path().join("dst");
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config>\n  <log_level>quiet</log_level>\n</config>\n").unwrap();

    fs::create_dir_all(&env_source).unwrap();
    fs::write(env_source.join("env-file"), b"env-file").unwrap();
    fs::create_dir_all(&flag_source).unwrap();
    fs::write(flag_source.join("flag-file"), b"flag-file").unwrap();

    Command::cargo_bin("bucketize")
        .unwrap()
        .env("BUCKETIZE_CONFIG", &cfg)
        .env("SOURCE_PATH", &env_source)
        .arg("--relocate-only")
        .arg("--source-root")
        .arg(&flag_source)
        .arg("--target-root")
        .arg(&target)
        .assert()
        .success();

    assert!(target.join("f").join("flag-file").is_file());
    assert!(!target.join("e").exists(), "env source must not be used");
}
