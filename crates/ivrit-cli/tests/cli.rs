//! End-to-end runs of the `ivrit` binary: exit codes and artifacts on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn ivrit(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ivrit"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ivrit")
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn no_arguments_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = ivrit(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(entries(dir.path()).is_empty());
}

#[test]
fn translates_into_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prog"), "מספר א # הערה\nתדפיס א\n").unwrap();

    let out = ivrit(dir.path(), &["prog"]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    assert_eq!(
        fs::read_to_string(dir.path().join("translated_prog")).unwrap(),
        "int a \nprint a\n"
    );
}

#[test]
fn missing_source_exits_one_without_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let out = ivrit(dir.path(), &["missing.heb"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(entries(dir.path()).is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing.heb"), "{stderr}");
}

#[test]
fn mixed_alphabet_exits_one_without_artifact() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("mix"), "אבc דה").unwrap();

    let out = ivrit(dir.path(), &["mix"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(entries(dir.path()), vec!["mix".to_string()]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("English"), "{stderr}");
}

#[test]
fn keep_partial_flag_writes_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("mix"), "אבc דה").unwrap();

    let out = ivrit(dir.path(), &["mix", "--out-dir", "newdir", "--keep-partial"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        fs::read_to_string(dir.path().join("newdir").join("translated_mix")).unwrap(),
        "ab"
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("English"), "{stderr}");
}

#[test]
fn stdout_conflicts_with_keep_partial() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("p"), "אם").unwrap();

    let out = ivrit(dir.path(), &["p", "--stdout", "--keep-partial"]);
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(entries(dir.path()), vec!["p".to_string()]);
}

#[test]
fn stdout_prints_translation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("p"), "תחזיר שלום;").unwrap();

    let out = ivrit(dir.path(), &["p", "--stdout"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "return ulfm;");
    assert_eq!(entries(dir.path()), vec!["p".to_string()]);
}

#[test]
fn check_reports_json_stats() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("p"), "מספר א").unwrap();

    let out = ivrit(dir.path(), &["check", "p", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("\"keywords\": 1"), "{stdout}");
    assert!(stdout.contains("\"identifiers\": 1"), "{stdout}");
}
