use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn xtask() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xtask"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_creates_named_project() {
    let dir = tempdir().unwrap();

    xtask()
        .args(["init", "--project", "kidneyClassifier", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating empty file path=src/kidneyClassifier/__init__.py"))
        .stdout(predicate::str::contains("✅ Scaffolded 'kidneyClassifier'"));

    assert!(dir.path().join("src/kidneyClassifier/entity/__init__.py").is_file());
    assert!(dir.path().join("templates/index.html").is_file());
    assert!(!dir.path().join("src/cnnClassifier").exists());
}

#[test]
fn init_keeps_existing_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("requirements.txt"), "numpy\n").unwrap();

    xtask()
        .arg("init")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File already exists file=requirements.txt"));

    assert_eq!(fs::read_to_string(dir.path().join("requirements.txt")).unwrap(), "numpy\n");
}

#[test]
fn dry_run_lists_plan_only() {
    let dir = tempdir().unwrap();

    xtask()
        .args(["init", "--dry-run", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("+ dvc.yaml"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn custom_manifest_is_used() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("scaffold.yaml");
    fs::write(&manifest, "project_name: demo\nfiles:\n  - src/{project}/app.py\n").unwrap();
    let root = dir.path().join("out");

    xtask()
        .args(["init", "--manifest"])
        .arg(&manifest)
        .arg("--root")
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("src/demo/app.py").is_file());
}

#[test]
fn escaping_manifest_is_rejected() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("scaffold.yaml");
    fs::write(&manifest, "files:\n  - ok.txt\n  - ../escape.txt\n").unwrap();

    xtask()
        .args(["init", "--manifest"])
        .arg(&manifest)
        .arg("--root")
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a relative path"));

    assert!(!dir.path().join("out").exists());
}
