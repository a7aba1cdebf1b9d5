//! Centrd terminal application.
//!
//! This is the main entry point for playing centrd in a terminal.

use std::process::ExitCode;

use centrd_cli::Args;
use clap::Parser as _;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::debug!("using data directory {}", args.data_dir.display());

    match centrd_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("centrd: {e}");
            ExitCode::FAILURE
        }
    }
}
