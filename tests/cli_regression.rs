// Regression tests for the `ts-scaffold` binary: exit codes, messages and
// what ends up on disk.
// Requires: assert_cmd, predicates, tempfile in [dev-dependencies]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

fn scaffold(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ts-scaffold").unwrap();
    cmd.current_dir(dir)
        .env_remove("TS_SCAFFOLD_ROOT")
        .env_remove("TS_SCAFFOLD_LOG");
    cmd
}

/// Writes an executable shell script that replaces the edited file with `content`.
#[cfg(unix)]
fn fake_editor(dir: &TempDir, content: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let body = dir.path().join("edited.txt");
    fs::write(&body, content).unwrap();
    let script = dir.path().join("fake-editor.sh");
    fs::write(
        &script,
        format!("#!/bin/sh\ncat '{}' > \"$1\"\n", body.display()),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script.to_string_lossy().into_owned()
}

#[test]
fn edit_without_tests_reports_and_fails() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path())
        .arg("edit")
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(contains("No test files found"))
        .stdout(contains("Select a test").not());
}

#[test]
fn edit_of_missing_path_fails() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path())
        .args(["edit", "--path", "tests/none.json"])
        .env("EDITOR", "true")
        .assert()
        .failure()
        .stdout(contains("Editing test file: tests/none.json"))
        .stderr(contains("Error opening or parsing test file"));
}

#[test]
fn picker_quit_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tests/math")).unwrap();
    fs::write(dir.path().join("tests/math/a.json"), "{}").unwrap();
    scaffold(dir.path())
        .arg("edit")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("1. ").and(contains("a.json")));
}

#[cfg(unix)]
#[test]
fn failing_editor_is_reported_and_nothing_written() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path())
        .arg("create")
        .env("EDITOR", "false")
        .assert()
        .failure()
        .stderr(contains("Error opening editor false"));
    assert!(!dir.path().join("tests").exists());
}

#[cfg(unix)]
#[test]
fn default_command_creates_from_unchanged_template() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path())
        .env("EDITOR", "true")
        .assert()
        .success()
        .stdout(contains("Creating a TokenScript compliance test"))
        .stdout(contains("Test successfully saved at:"));

    let written = fs::read_to_string(dir.path().join("tests/math/test_name_here.json")).unwrap();
    assert!(written.starts_with("{\n    \"name\": \"Test name here\","));
}

#[cfg(unix)]
#[test]
fn create_honours_category_filename_and_root() {
    let dir = TempDir::new().unwrap();
    let editor = fake_editor(
        &dir,
        "name: Concat\n# START_INPUT\n\"a\" + \"b\"\n# END_INPUT\n\
         # START_EXPECTED_OUTPUT\nab\n# END_EXPECTED_OUTPUT\n\
         expectedOutputType: String # or Number\ncontext: {\"unused\": 1}\n",
    );
    scaffold(dir.path())
        .args(["--root", "suite", "create", "--category", "strings", "--filename", "concat"])
        .env("EDITOR", &editor)
        .assert()
        .success();

    let written: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("suite/strings/concat.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        written,
        serde_json::json!({
            "name": "Concat",
            "input": "\"a\" + \"b\"",
            "expectedOutput": "ab",
            "expectedOutputType": "String",
            "context": {"unused": 1}
        })
    );
}

#[cfg(unix)]
#[test]
fn invalid_context_aborts_without_writing() {
    let dir = TempDir::new().unwrap();
    let editor = fake_editor(&dir, "name: Broken\ncontext: {not valid json}\n");
    scaffold(dir.path())
        .arg("create")
        .env("EDITOR", &editor)
        .assert()
        .failure()
        .stderr(contains("Error parsing context JSON"));
    assert!(!dir.path().join("tests/math/broken.json").exists());
}

#[cfg(unix)]
#[test]
fn empty_editor_output_fails() {
    let dir = TempDir::new().unwrap();
    let editor = fake_editor(&dir, "");
    scaffold(dir.path())
        .arg("create")
        .env("EDITOR", &editor)
        .assert()
        .failure()
        .stderr(contains("No input provided"));
}

#[cfg(unix)]
#[test]
fn declined_overwrite_is_a_clean_exit() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("tests/math/test_name_here.json");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "keep me").unwrap();

    scaffold(dir.path())
        .env("EDITOR", "true")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Overwrite? [y/N]"))
        .stdout(contains("Operation cancelled."));
    assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
}
