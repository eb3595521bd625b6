//! End-to-end workflow tests for the sha256sum binary
//!
//! These exercise the complete flow: digest files with the binary, write the
//! output as a sums file, and check it back with `-c`.

use assert_cmd::Command;
use predicates::prelude::*;
use shasum_core::compute_digest;
use std::fs;
use tempfile::TempDir;

fn sha256sum() -> Command {
    Command::cargo_bin("sha256sum").expect("Failed to find sha256sum binary")
}

/// Set up a directory with a few files of known content.
fn setup_files() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("alpha.txt"), b"alpha contents").unwrap();
    fs::write(temp.path().join("beta.txt"), b"beta contents").unwrap();
    fs::write(temp.path().join("empty.txt"), b"").unwrap();
    temp
}

#[test]
fn test_generate_then_check_round_trip() {
    let temp = setup_files();

    let output = sha256sum()
        .current_dir(temp.path())
        .args(["alpha.txt", "beta.txt", "empty.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    fs::write(temp.path().join("SHA256SUMS"), &output.stdout).unwrap();

    sha256sum()
        .current_dir(temp.path())
        .args(["-c", "SHA256SUMS"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("alpha.txt: OK")
                .and(predicate::str::contains("beta.txt: OK"))
                .and(predicate::str::contains("empty.txt: OK")),
        );
}

#[test]
fn test_digest_output_matches_library_digest() {
    let temp = setup_files();
    let expected = compute_digest(&temp.path().join("alpha.txt").to_string_lossy()).unwrap();

    sha256sum()
        .current_dir(temp.path())
        .arg("alpha.txt")
        .assert()
        .success()
        .stdout(format!("{expected} alpha.txt\n"));
}

#[test]
fn test_tampered_file_fails_the_check() {
    let temp = setup_files();

    let output = sha256sum()
        .current_dir(temp.path())
        .args(["alpha.txt", "beta.txt"])
        .output()
        .unwrap();
    fs::write(temp.path().join("SHA256SUMS"), &output.stdout).unwrap();

    // Tamper after recording.
    fs::write(temp.path().join("beta.txt"), b"tampered").unwrap();

    sha256sum()
        .current_dir(temp.path())
        .args(["-c", "SHA256SUMS"])
        .assert()
        .code(4)
        .stdout(
            predicate::str::contains("alpha.txt: OK")
                .and(predicate::str::contains("beta.txt: FAILED"))
                .and(predicate::str::contains("checksum failed")),
        );
}

#[test]
fn test_quiet_check_prints_only_failures() {
    let temp = setup_files();

    let output = sha256sum()
        .current_dir(temp.path())
        .args(["alpha.txt", "beta.txt"])
        .output()
        .unwrap();
    fs::write(temp.path().join("SHA256SUMS"), &output.stdout).unwrap();
    fs::write(temp.path().join("beta.txt"), b"tampered").unwrap();

    sha256sum()
        .current_dir(temp.path())
        .args(["-c", "SHA256SUMS", "--quiet"])
        .assert()
        .code(4)
        .stdout(
            predicate::str::contains("OK")
                .not()
                .and(predicate::str::contains("beta.txt: FAILED")),
        );
}

#[test]
fn test_status_check_is_silent_both_ways() {
    let temp = setup_files();

    let output = sha256sum()
        .current_dir(temp.path())
        .arg("alpha.txt")
        .output()
        .unwrap();
    fs::write(temp.path().join("SHA256SUMS"), &output.stdout).unwrap();

    sha256sum()
        .current_dir(temp.path())
        .args(["-c", "SHA256SUMS", "--status"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    fs::write(temp.path().join("alpha.txt"), b"tampered").unwrap();

    sha256sum()
        .current_dir(temp.path())
        .args(["-c", "SHA256SUMS", "--status"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_crlf_sums_file_checks_cleanly() {
    let temp = setup_files();
    let digest = compute_digest(&temp.path().join("empty.txt").to_string_lossy()).unwrap();

    fs::write(
        temp.path().join("SHA256SUMS"),
        format!("{digest} empty.txt\r\n"),
    )
    .unwrap();

    sha256sum()
        .current_dir(temp.path())
        .args(["-c", "SHA256SUMS"])
        .assert()
        .success()
        .stdout("empty.txt: OK\n");
}

#[test]
fn test_sums_file_without_final_newline_checks_cleanly() {
    let temp = setup_files();
    let digest = compute_digest(&temp.path().join("empty.txt").to_string_lossy()).unwrap();

    fs::write(
        temp.path().join("SHA256SUMS"),
        format!("{digest} empty.txt"),
    )
    .unwrap();

    sha256sum()
        .current_dir(temp.path())
        .args(["-c", "SHA256SUMS"])
        .assert()
        .success()
        .stdout("empty.txt: OK\n");
}
