// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::ffi::OsString;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Invocation handled.
    Success = 0,
    /// A response could not be written.
    Failure = 1,
    /// Unrecognized command token.
    UsageError = 2,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

/// Errors raised while dispatching an invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command token matched none of the recognized flags.
    #[error("Unknown argument: {}", .0.to_string_lossy())]
    UnrecognizedArgument(OsString),

    /// Writing the response to a standard stream failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit code the process reports for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::UnrecognizedArgument(_) => ExitCode::UsageError,
            Error::Io(_) => ExitCode::Failure,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
