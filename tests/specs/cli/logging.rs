// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for diagnostic logging.

use crate::prelude::*;

/// > Logging is silent unless REVIEWCAT_LOG is set
#[test]
fn stderr_is_clean_without_log_filter() {
    reviewcat_cmd().arg("-h").assert().success().stderr("");
}

/// > REVIEWCAT_LOG=debug logs the dispatched command to stderr
#[test]
fn debug_filter_logs_dispatch() {
    reviewcat_cmd()
        .arg("-V")
        .env("REVIEWCAT_LOG", "debug")
        .assert()
        .success()
        .stdout("reviewcat 0.1.0\n")
        .stderr(predicates::str::contains("dispatching").and(predicates::str::contains("Version")));
}

/// > An invalid filter falls back to silence
#[test]
fn invalid_filter_is_ignored() {
    reviewcat_cmd()
        .arg("--version")
        .env("REVIEWCAT_LOG", "reviewcat=loud")
        .assert()
        .success()
        .stderr("");
}
