//! Start-up failures of the binary.
//!
//! Loading happens before the terminal is switched to raw mode, so these
//! cases can run without a TTY.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::temp_workspace;

fn curator() -> Command {
    Command::cargo_bin("largo-curator").expect("binary should build")
}

#[test]
fn missing_largo_file_is_fatal() {
    let (_temp, work) = temp_workspace(None, Some("[]"));

    curator()
        .current_dir(&work)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Loading largos.json..."))
        .stderr(predicate::str::contains("Failed to read largos.json"));
}

#[test]
fn missing_slime_file_is_fatal() {
    let (_temp, work) = temp_workspace(Some("[]"), None);

    curator()
        .current_dir(&work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("slimes.json"));
}

#[test]
fn malformed_json_is_fatal() {
    let (_temp, work) = temp_workspace(Some("[{\"type\": "), Some("[]"));

    curator()
        .current_dir(&work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed JSON in largos.json"));
}

#[test]
fn malformed_config_is_fatal() {
    let (_temp, work) = temp_workspace(Some("[]"), Some("[]"));
    std::fs::write(work.join("largo-curator.toml"), "[layout\n").unwrap();

    curator()
        .current_dir(&work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config largo-curator.toml"));
}
