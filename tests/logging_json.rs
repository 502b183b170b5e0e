use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

/// With --json, log lines on stdout are valid JSON objects (user-facing
/// summary lines are exempt and skipped here).
#[test]
fn json_flag_emits_structured_logs() {
    let td = tempdir().unwrap();
    let source = td.path().join("unsorted");
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config>\n  <log_level>normal</log_level>\n</config>\n").unwrap();

    let output = Command::cargo_bin("bucketize")
        .unwrap()
        .env("BUCKETIZE_CONFIG", &cfg)
        .arg("--json")
        .arg("--generate-only")
        .arg("--seed")
        .arg("1")
        .arg("--source-root")
        .arg(&source)
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_lines: Vec<&str> = stdout.lines().filter(|l| l.starts_with('{')).collect();
    assert!(!json_lines.is_empty(), "expected JSON log lines, got:\n{stdout}");
    for line in json_lines {
        let parsed: serde_json::Value = serde_json::from_str(line).expect("valid JSON log line");
        assert!(parsed.get("fields").is_some(), "missing fields object: {line}");
    }
}
