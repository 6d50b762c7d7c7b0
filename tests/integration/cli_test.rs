//! CLI tests driving the tempo binary.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::fixture;

fn tempo() -> Command {
    Command::cargo_bin("tempo").unwrap()
}

#[test]
fn info_reports_the_track_summary() {
    tempo()
        .arg("info")
        .arg(fixture("debate_excerpt.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Records:  6"))
        .stdout(predicate::str::contains("Start:    Thu Oct 04 2012 14:03:00 UTC"))
        .stdout(predicate::str::contains("Duration: 04:52"));
}

#[test]
fn info_honors_an_explicit_step_count() {
    // 292 000 ms / 20 steps = 14 600 ms
    tempo()
        .arg("info")
        .arg(fixture("debate_excerpt.json"))
        .args(["--steps", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14600 ms at 20 steps"));
}

#[test]
fn info_fails_on_a_missing_file() {
    tempo()
        .arg("info")
        .arg(fixture("does_not_exist.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read caption track"));
}

#[test]
fn info_fails_on_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    tempo()
        .arg("info")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse caption track"));
}

#[test]
fn play_refuses_a_piped_stdout() {
    // assert_cmd pipes stdout, so the tty check rejects playback before
    // touching the terminal.
    tempo()
        .arg("play")
        .arg(fixture("debate_excerpt.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a terminal"));
}

#[test]
fn play_fails_on_a_missing_file() {
    tempo()
        .arg("play")
        .arg(fixture("does_not_exist.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read caption track"));
}

#[test]
fn completions_cover_the_subcommands() {
    tempo()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tempo"));
}

#[test]
fn no_subcommand_is_an_error() {
    tempo().assert().failure();
}
