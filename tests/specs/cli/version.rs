// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for version output.

use crate::prelude::*;

/// > --version prints the program name and version
#[test]
fn long_version_prints_version_line() {
    reviewcat_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout("reviewcat 0.1.0\n")
        .stderr("");
}

/// > -V is an alias for --version
#[test]
fn short_version_prints_version_line() {
    reviewcat_cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout("reviewcat 0.1.0\n")
        .stderr("");
}

/// > Lowercase -v is not a version flag
#[test]
fn lowercase_short_version_is_unknown() {
    reviewcat_cmd()
        .arg("-v")
        .assert()
        .code(2)
        .stdout("")
        .stderr(format!("Unknown argument: -v\n\n{USAGE}"));
}

/// > Repeated invocations produce identical output
#[test]
fn version_output_is_stable() {
    let first = reviewcat_cmd().arg("-V").output().unwrap();
    let second = reviewcat_cmd().arg("-V").output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}
