//! Terminal front end for centrd.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::io::{self, BufRead, Write};

use centrd_ledger::{FileStore, SystemClock};

pub use self::{args::*, error::*};

mod args;
mod commands;
mod error;
mod play;
mod render;

/// Runs one CLI invocation against the store in `args.data_dir`.
pub fn run(args: &Args) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(
        args,
        FileStore::new(&args.data_dir),
        SystemClock,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Runs one CLI invocation with explicit storage, clock and terminal streams.
pub fn run_with<S, C>(
    args: &Args,
    store: S,
    clock: C,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError>
where
    S: centrd_ledger::Store,
    C: centrd_ledger::Clock + 'static,
{
    log::debug!("running {:?}", args.command);
    match &args.command {
        Command::Play(play_args) => commands::play(args, play_args, store, clock, input, output),
        Command::Daily(daily_args) => {
            commands::daily(args, daily_args, store, clock, input, output)
        }
        Command::Solve(solve_args) => commands::solve(args, solve_args, output),
        Command::Generate(generate_args) => commands::generate(generate_args, output),
        Command::Scores => commands::scores(store, clock, output),
    }
}
