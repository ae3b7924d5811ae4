#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a catalog and two prompt packages.
fn test_catalog() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packages.json"),
        r#"[
            {"id": 1, "name": "Classic", "description": "The basics", "truth": "classic_truth.txt", "dare": "classic_dare.txt"},
            {"id": 2, "name": "Party", "description": "Louder questions", "truth": "party_truth.txt", "dare": "party_dare.txt"}
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("classic_truth.txt"),
        "What is your worst habit?\nWho was your first crush?\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("classic_dare.txt"),
        "Sing the chorus of your favorite song.\nDo ten push-ups.\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("party_truth.txt"),
        "What is the most embarrassing thing you own?\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("party_dare.txt"),
        "Let the group pick your ringtone.\n",
    )
    .unwrap();
    let catalog = dir.path().join("packages.json");
    (dir, catalog)
}

fn tod() -> Command {
    Command::cargo_bin("tod").unwrap()
}

// ---------------------------------------------------------------------------
// packages
// ---------------------------------------------------------------------------

#[test]
fn packages_lists_the_catalog() {
    let (_dir, catalog) = test_catalog();
    tod()
        .args(["packages", "-c", catalog.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Classic")
                .and(predicate::str::contains("Party"))
                .and(predicate::str::contains("Louder questions")),
        );
}

#[test]
fn packages_fails_without_catalog() {
    tod()
        .args(["packages", "-c", "/nonexistent/packages.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog unavailable"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_draws_a_truth_card() {
    let (dir, catalog) = test_catalog();
    let state = dir.path().join("state");
    tod()
        .args([
            "play",
            "-c",
            catalog.to_str().unwrap(),
            "--packages",
            "1,2",
            "--state-dir",
            state.to_str().unwrap(),
            "--seed",
            "7",
        ])
        .write_stdin("t\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("New game started")
                .and(predicate::str::contains("TRUTH"))
                .and(predicate::str::contains("Round 2")),
        );
}

#[test]
fn play_rejects_empty_selection() {
    let (dir, catalog) = test_catalog();
    let state = dir.path().join("state");
    tod()
        .args([
            "play",
            "-c",
            catalog.to_str().unwrap(),
            "--state-dir",
            state.to_str().unwrap(),
        ])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("select at least one package"));
}

#[test]
fn play_resumes_a_saved_session() {
    let (dir, catalog) = test_catalog();
    let state = dir.path().join("state");
    let state_arg = state.to_str().unwrap().to_string();

    tod()
        .args([
            "play",
            "-c",
            catalog.to_str().unwrap(),
            "--packages",
            "1",
            "--state-dir",
            &state_arg,
            "--seed",
            "7",
        ])
        .write_stdin("d\nquit\n")
        .assert()
        .success();

    tod()
        .args([
            "play",
            "-c",
            catalog.to_str().unwrap(),
            "--state-dir",
            &state_arg,
            "--seed",
            "8",
        ])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resuming saved game at round 2"));
}

#[test]
fn play_with_new_flag_starts_over() {
    let (dir, catalog) = test_catalog();
    let state = dir.path().join("state");
    let state_arg = state.to_str().unwrap().to_string();

    tod()
        .args([
            "play",
            "-c",
            catalog.to_str().unwrap(),
            "--packages",
            "1",
            "--state-dir",
            &state_arg,
            "--seed",
            "7",
        ])
        .write_stdin("d\nd\nquit\n")
        .assert()
        .success();

    // --new discards the saved round counter; the remembered package
    // selection still applies.
    tod()
        .args([
            "play",
            "-c",
            catalog.to_str().unwrap(),
            "--state-dir",
            &state_arg,
            "--seed",
            "9",
            "--new",
        ])
        .write_stdin("status\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("New game started")
                .and(predicate::str::contains("Round: 1")),
        );
}

#[test]
fn pass_before_any_draw_shows_a_notice() {
    let (dir, catalog) = test_catalog();
    let state = dir.path().join("state");
    tod()
        .args([
            "play",
            "-c",
            catalog.to_str().unwrap(),
            "--packages",
            "1",
            "--state-dir",
            state.to_str().unwrap(),
            "--seed",
            "7",
        ])
        .write_stdin("p\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("draw a card before passing"));
}

// ---------------------------------------------------------------------------
// status / reset
// ---------------------------------------------------------------------------

#[test]
fn status_without_session() {
    let dir = TempDir::new().unwrap();
    tod()
        .args(["status", "--state-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved session."));
}

#[test]
fn status_after_play_shows_the_round() {
    let (dir, catalog) = test_catalog();
    let state = dir.path().join("state");
    let state_arg = state.to_str().unwrap().to_string();

    tod()
        .args([
            "play",
            "-c",
            catalog.to_str().unwrap(),
            "--packages",
            "1,2",
            "--state-dir",
            &state_arg,
            "--seed",
            "7",
        ])
        .write_stdin("t\nd\nquit\n")
        .assert()
        .success();

    tod()
        .args(["status", "--state-dir", &state_arg])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Round: 3").and(predicate::str::contains("Last card: DARE")),
        );
}

#[test]
fn reset_clears_the_saved_session() {
    let (dir, catalog) = test_catalog();
    let state = dir.path().join("state");
    let state_arg = state.to_str().unwrap().to_string();

    tod()
        .args([
            "play",
            "-c",
            catalog.to_str().unwrap(),
            "--packages",
            "1",
            "--state-dir",
            &state_arg,
            "--seed",
            "7",
        ])
        .write_stdin("t\nquit\n")
        .assert()
        .success();

    tod()
        .args(["reset", "--state-dir", &state_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved session cleared."));

    tod()
        .args(["status", "--state-dir", &state_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved session."));
}
