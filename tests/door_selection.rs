//! Builds the library with other door feature sets in a separate target
//! directory and checks which ones cargo accepts.

use std::path::Path;
use std::process::{Command, Output};

fn cargo_check(features: &[&str]) -> Output {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let target_dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("door-selection");

    let mut cmd = Command::new(env!("CARGO"));
    cmd.arg("check")
        .arg("--lib")
        .arg("--manifest-path")
        .arg(&manifest)
        .arg("--target-dir")
        .arg(&target_dir)
        .arg("--no-default-features");
    if !features.is_empty() {
        cmd.arg("--features").arg(features.join(","));
    }

    cmd.output().expect("failed to run cargo")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn build_without_door_fails() {
    let output = cargo_check(&[]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("Door type not selected"),
        "unexpected cargo output:\n{}",
        stderr(&output)
    );
}

#[test]
fn build_with_both_doors_fails() {
    let output = cargo_check(&["main-door", "terrace-door"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("mutually exclusive"),
        "unexpected cargo output:\n{}",
        stderr(&output)
    );
}

#[test]
fn build_with_single_door_succeeds() {
    for door in ["main-door", "terrace-door"] {
        let output = cargo_check(&[door]);
        assert!(
            output.status.success(),
            "{} failed:\n{}",
            door,
            stderr(&output)
        );
    }
}
