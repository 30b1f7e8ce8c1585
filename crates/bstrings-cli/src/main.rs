//! Binary String Toolkit CLI
//!
//! Converts hexadecimal (or raw) input into escaped binary string literals,
//! or prints the bad-character sequence.

mod app;
mod cli;
mod error;
mod input;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{CommandFactory, Parser};
use tracing::{Level, error};

use crate::{cli::Cli, error::CliError};

fn init_tracing(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn print_version(out: &mut impl Write) -> io::Result<()> {
    write!(
        out,
        "Binary String Toolkit v{}\n\
         Copyright (C) 2018 Nicolas Chabbey\n\
         This program is free software: you can redistribute it and/or modify it\n\
         under the terms of the GNU General Public License as published by the\n\
         Free Software Foundation, either version 2 of the License, or\n\
         (at your option) any later version.\n\
         This program has absolutely no warranty.\n\
         For help enter \"bstrings --help\"\n",
        env!("CARGO_PKG_VERSION")
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = if cli.version {
        print_version(&mut io::stderr().lock()).map_err(CliError::Output)
    } else if cli.has_action() {
        app::run(&cli, io::stdin().lock(), &mut io::stdout().lock())
    } else {
        // Same as the bare invocation: show usage and succeed.
        Cli::command().print_help().map_err(CliError::Output)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
