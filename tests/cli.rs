extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn contourbrot() -> Command {
    Command::cargo_bin("contourbrot").unwrap()
}

#[test]
fn help_lists_the_knobs() {
    contourbrot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--iterations"))
        .stdout(predicate::str::contains("--elevation"));
}

#[test]
fn rejects_a_malformed_size() {
    contourbrot()
        .args(&["--size", "400by400"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse grid size"));
}

#[test]
fn rejects_zero_frames() {
    contourbrot()
        .args(&["--frames", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Frame count must be between 1 and 3600"));
}

#[test]
fn rejects_inverted_corners_before_opening_a_window() {
    contourbrot()
        .args(&["--leftlower", "1.0,-1.0", "--rightupper", "-1.0,1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
