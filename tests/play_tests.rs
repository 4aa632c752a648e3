//! Integration tests for scripted play sessions
//!
//! Each test drives the binary with a fixed stdin script and checks the
//! transcript and exit code.

mod common;

use common::{traipse, write_world, TINY_WORLD};
use predicates::prelude::*;
use tempfile::tempdir;

fn play() -> assert_cmd::Command {
    let mut cmd = traipse();
    cmd.args(["play", "--player", "Robinson", "--alias", "Crusoe"]);
    cmd
}

#[test]
fn test_winning_walk_reports_total_distance() {
    play()
        .write_stdin("B\nB\nB\nD\nA\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Crusoe!"))
        .stdout(predicate::str::contains("You are currently at Treasure."))
        .stdout(predicate::str::contains(
            "You made it! Total distance traveled: 16.",
        ));
}

#[test]
fn test_dead_end_exits_zero() {
    // Beach -> Cave Entrance -> Underground lake -> Spider lair
    play()
        .write_stdin("B\nA\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are currently at Spider lair."))
        .stdout(predicate::str::contains(
            "You are forgotten and lost forever.",
        ));
}

#[test]
fn test_invalid_choice_reprompts() {
    play()
        .write_stdin("Q\nB\nA\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You can't go there. Choose another way.",
        ));
}

#[test]
fn test_prompted_identity() {
    // Without --player/--alias the names are read from stdin first
    traipse()
        .arg("play")
        .write_stdin("Robinson\nCrusoe\nB\nA\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your name: "))
        .stdout(predicate::str::contains("Enter your nickname: "))
        .stdout(predicate::str::contains("Welcome, Crusoe!"));
}

#[test]
fn test_play_is_the_default_command() {
    traipse()
        .write_stdin("Robinson\nCrusoe\nB\nA\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Crusoe!"));
}

#[test]
fn test_closed_stdin_exit_code_1() {
    play().write_stdin("B\n").assert().code(1);
}

#[test]
fn test_json_summary_on_victory() {
    play()
        .args(["--format", "json"])
        .write_stdin("B\nB\nB\nD\nA\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\":\"reached-goal\""))
        .stdout(predicate::str::contains("\"distance\":16"))
        .stdout(predicate::str::contains("\"moves\":6"));
}

#[test]
fn test_json_summary_when_stuck() {
    play()
        .args(["--format", "json"])
        .write_stdin("B\nA\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\":\"stuck\""))
        .stdout(predicate::str::contains("\"location\":\"Spider lair\""));
}

#[test]
fn test_play_custom_world() {
    let dir = tempdir().unwrap();
    let path = write_world(dir.path(), TINY_WORLD);

    play()
        .arg("--world")
        .arg(&path)
        .write_stdin("A\nB\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are currently at End."))
        .stdout(predicate::str::contains(
            "You made it! Total distance traveled: 7.",
        ));
}
