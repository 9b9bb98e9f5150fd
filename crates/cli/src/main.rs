// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stev - inspect event catalogs and simulate random event scheduling

mod commands;
mod error;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use commands::{available, explain, list, pick, simulate};
use error::StevError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "stev",
    version,
    about = "Station events - weighted random event scheduling"
)]
struct Cli {
    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every instantiable event in a catalog
    List(commands::CatalogArgs),
    /// Show the events eligible right now
    Available(commands::EvalArgs),
    /// Show why each event is or is not eligible
    Explain(commands::EvalArgs),
    /// Draw a random event from the eligible set
    Pick(pick::PickArgs),
    /// Run a whole round against the automatic timer
    Simulate(simulate::SimulateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::List(args) => list::handle(args),
        Commands::Available(args) => available::handle(args),
        Commands::Explain(args) => explain::handle(args),
        Commands::Pick(args) => pick::handle(args),
        Commands::Simulate(args) => simulate::handle(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<StevError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
