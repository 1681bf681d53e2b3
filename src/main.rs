//! `wgraphs` - run weighted graph algorithms on edge-list files

mod cli;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use wgraphs::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
