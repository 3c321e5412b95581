use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Commands::Validate {
            json,
            layout,
            platform,
        } => commands::handle_validate(json.as_deref(), layout.as_deref(), platform),
        Commands::Show { path } => commands::handle_show(&path),
        Commands::Test => {
            println!("NOT-IMPLEMENTED");
            Ok(true)
        }
    }
}
