// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ReviewCat command-line front end.

pub mod cli;
pub mod error;
pub mod logging;

pub use cli::{Command, Dispatcher};
pub use error::{Error, ExitCode, Result};
