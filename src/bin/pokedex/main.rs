//! pokedex: terminal front-end for the collection backend.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod console;
mod handlers;
mod print;


use std::process::ExitCode;

use clap::Parser;
use pokedex::config;
use pokedex::infra::telemetry;
use tracing::error;

use args::Cli;
use client::{CliError, Ctx};
use handlers::pokemon;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match config::load(&cli.global) {
        Ok(settings) => settings,
        Err(err) => {
            // No subscriber yet.
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = telemetry::init(&settings.logging) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli, &settings).await {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, settings: &config::Settings) -> Result<String, CliError> {
    let ctx = Ctx::new(settings)?;
    pokemon::handle(&ctx, cli.command).await
}
