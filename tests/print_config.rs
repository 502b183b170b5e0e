use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

/// --print-config with BUCKETIZE_CONFIG set reports that path and exits
/// cleanly without touching the filesystem roots.
#[test]
fn print_config_reports_env_override() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config></config>").unwrap();

    let output = Command::cargo_bin("bucketize")
        .unwrap()
        .env("BUCKETIZE_CONFIG", &cfg)
        .arg("--print-config")
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("BUCKETIZE_CONFIG"),
        "expected the env override to be reported:\n{stdout}"
    );
}
