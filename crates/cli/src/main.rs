// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io;

use reviewcat::{Dispatcher, logging};

fn main() -> anyhow::Result<std::process::ExitCode> {
    logging::init();

    let code = Dispatcher::default().run(
        std::env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(code.into())
}
