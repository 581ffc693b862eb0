//! `tokenbridge` command line generator.

mod cli;
mod commands;

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::Outcome;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::run(&cli) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Stale) => {
            eprintln!(
                "{} generated artifacts are out of date; rerun without --check",
                style("error:").red().bold()
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{} {:?}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
