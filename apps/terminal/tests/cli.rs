//! Black-box tests of the binary's argument handling.
//!
//! Nothing here needs a database: wrong arguments fail before any
//! connection attempt.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_usage_and_fails() {
    Command::cargo_bin("emporium")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn too_few_arguments_fails() {
    Command::cargo_bin("emporium")
        .unwrap()
        .args(["shop", "5432"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_documents_the_positional_arguments() {
    Command::cargo_bin("emporium")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DBNAME"))
        .stdout(predicate::str::contains("PORT"))
        .stdout(predicate::str::contains("USER"));
}
