// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dodot` — dotfile deployment engine CLI entry point.

mod color;
mod commands;
mod exit_error;
mod output;
mod pipeline;

use clap::Parser;
use commands::{Cli, Command};
use exit_error::ExitError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(error) = dispatch(cli.command) {
        match error.downcast::<ExitError>() {
            Ok(exit_error) => {
                eprintln!("error: {exit_error}");
                std::process::exit(exit_error.code);
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                std::process::exit(1);
            }
        }
    }
}

fn dispatch(command: Command) -> anyhow::Result<()> {
    match command {
        Command::List(args) => commands::list::run(args),
        Command::Deploy(args) => commands::deploy::run(args),
        Command::Install(args) => commands::install::run(args),
        Command::Status(args) => commands::status::run(args),
        Command::Fill(args) => commands::fill::run(args),
        Command::Init(args) => commands::init::run(args),
    }
}
