use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

fn script(dir: &TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).expect("write script");
    path
}

fn gscript() -> Command {
    Command::cargo_bin("gscript").expect("binary")
}

#[test]
fn runs_a_script_file() {
    let work = TempDir::new().expect("workdir");
    let path = script(&work, "main.gscript", "a = 2 + 3 * 4\nprint(\"result:\")\nprint(a)\n");

    let out = gscript().arg(&path).output().expect("run gscript");
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "result:\n14\n");
}

#[test]
fn accepts_short_extension() {
    let work = TempDir::new().expect("workdir");
    let path = script(&work, "main.gs", "print(1)\n");

    let out = gscript().arg(&path).output().expect("run gscript");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n");
}

#[test]
fn rejects_wrong_extension() {
    let work = TempDir::new().expect("workdir");
    let path = script(&work, "main.txt", "print(1)\n");

    let out = gscript().arg(&path).output().expect("run gscript");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("'.gscript' or '.gs'"));
}

#[test]
fn requires_exactly_one_file() {
    let out = gscript().output().expect("run gscript");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));

    let out = gscript().args(["a.gs", "b.gs"]).output().expect("run gscript");
    assert!(!out.status.success());
}

#[test]
fn missing_file_fails() {
    let work = TempDir::new().expect("workdir");
    let out = gscript().arg(work.path().join("absent.gs")).output().expect("run gscript");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to read"));
}

#[test]
fn script_error_stops_the_run() {
    let work = TempDir::new().expect("workdir");
    let path = script(&work, "bad.gs", "print(1)\nprint(missing)\nprint(2)\n");

    let out = gscript().arg(&path).output().expect("run gscript");
    assert!(!out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("Undefined variable: missing"));
}

#[test]
fn continue_policy_runs_every_line() {
    let work = TempDir::new().expect("workdir");
    let path = script(&work, "bad.gs", "print(1)\nprint(missing)\nprint(2)\n");

    let out = gscript().arg("--on-error")
                       .arg("continue")
                       .arg(&path)
                       .output()
                       .expect("run gscript");
    assert!(!out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n2\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));
}

#[test]
fn blank_lines_can_be_rejected() {
    let work = TempDir::new().expect("workdir");
    let path = script(&work, "blank.gs", "print(1)\n\nprint(2)\n");

    let out = gscript().arg(&path).output().expect("run gscript");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n2\n");

    let out = gscript().arg("--reject-blank-lines").arg(&path).output().expect("run gscript");
    assert!(!out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1\n");
}
