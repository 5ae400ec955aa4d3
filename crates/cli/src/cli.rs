// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument dispatch.
//!
//! Only the token directly after the program name selects behavior, and it
//! must match a recognized flag exactly. There is no flag bundling (`-hV`),
//! no `--` terminator and no case folding. Later tokens are ignored.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

use crate::error::{Error, ExitCode, Result};

/// Program name reported by `--version`.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Version reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text, shared by the help and error paths.
pub const USAGE: &str = "\
ReviewCat (reviewcat)

Usage:
  reviewcat --help
  reviewcat --version
";

/// Classified command token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No token after the program name.
    Absent,
    /// `--help` or `-h`.
    Help,
    /// `--version` or `-V`.
    Version,
    /// Anything else, kept verbatim.
    Unknown(OsString),
}

impl Command {
    /// Classify a full argument vector, program name included.
    pub fn classify<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter();
        let _program = args.next();

        let Some(token) = args.next() else {
            return Command::Absent;
        };

        let ignored = args.count();
        if ignored > 0 {
            tracing::trace!(ignored, "ignoring trailing arguments");
        }

        Command::from_token(token.into())
    }

    /// Map a single command token to its variant.
    ///
    /// Tokens that are not valid Unicode never match a flag.
    pub fn from_token(token: OsString) -> Self {
        match token.to_str() {
            Some("--help" | "-h") => Command::Help,
            Some("--version" | "-V") => Command::Version,
            _ => Command::Unknown(token),
        }
    }
}

/// Write the usage text.
pub fn write_usage(out: &mut impl Write) -> io::Result<()> {
    out.write_all(USAGE.as_bytes())
}

/// Turns an argument vector into a response on stdout or stderr.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    name: String,
    version: String,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(NAME, VERSION)
    }
}

impl Dispatcher {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Classify `args` and write the response.
    ///
    /// An unrecognized token is reported on `stderr` and yields
    /// [`ExitCode::UsageError`]. Only write failures are returned as errors.
    pub fn run<I, T>(
        &self,
        args: I,
        stdout: &mut impl Write,
        stderr: &mut impl Write,
    ) -> Result<ExitCode>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let command = Command::classify(args);
        tracing::debug!(?command, "dispatching");

        match command {
            Command::Absent | Command::Help => {
                write_usage(stdout)?;
                stdout.flush()?;
                Ok(ExitCode::Success)
            }
            Command::Version => {
                writeln!(stdout, "{} {}", self.name, self.version)?;
                stdout.flush()?;
                Ok(ExitCode::Success)
            }
            Command::Unknown(token) => {
                let err = Error::UnrecognizedArgument(token);
                report(&err, stderr)?;
                Ok(err.exit_code())
            }
        }
    }
}

/// Write a diagnostic followed by a blank line and the usage text.
fn report(err: &Error, out: &mut impl Write) -> Result<()> {
    match err {
        // Echo the token as given, even when it is not valid Unicode.
        Error::UnrecognizedArgument(token) => {
            out.write_all(b"Unknown argument: ")?;
            write_os_str(out, token)?;
            out.write_all(b"\n")?;
        }
        other => writeln!(out, "{other}")?,
    }
    out.write_all(b"\n")?;
    write_usage(out)?;
    out.flush()?;
    Ok(())
}

fn write_os_str(out: &mut impl Write, s: &OsStr) -> io::Result<()> {
    out.write_all(s.as_encoded_bytes())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
