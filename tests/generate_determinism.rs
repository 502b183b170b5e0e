use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Two --generate-only runs with the same seed produce the same corpus.
#[test]
fn same_seed_same_corpus() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config>\n  <log_level>quiet</log_level>\n</config>\n").unwrap();

    let run = |dir: &Path| {
        Command::cargo_bin("bucketize")
            .unwrap()
            .env("BUCKETIZE_CONFIG", &cfg)
            .arg("--generate-only")
            .arg("--seed")
            .arg("77")
            .arg("--source-root")
            .arg(dir)
            .assert()
            .success();
    };

    let a = td.path().join("a");
    let b = td.path().join("b");
    run(&a);
    run(&b);

    let names_a = sorted_names(&a);
    assert_eq!(names_a.len(), 12);
    assert_eq!(names_a, sorted_names(&b));
}
