use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_server_options() {
    Command::cargo_bin("waypoint-server")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains("--memory"));
}

#[test]
fn version_matches_the_crate() {
    Command::cargo_bin("waypoint-server")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_a_malformed_bind_address() {
    Command::cargo_bin("waypoint-server")
        .unwrap()
        .args(["--bind", "not-an-address", "--memory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn rejects_unknown_flags() {
    Command::cargo_bin("waypoint-server")
        .unwrap()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
