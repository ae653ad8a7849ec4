//! fib-exit CLI entry point.
//!
//! Evaluates `fib(40)` (or a configured index) by naive recursion and exits
//! with the result modulo 256. Nothing is written to stdout.

mod cli;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use fib_exit_core::{ExitStatus, Runner};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and go to stdout
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("fib-exit: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitStatus> {
    let file = cli.resolve()?;

    logging::init(&file.logging);

    info!(
        n = file.runtime.compute.n,
        call_metering = file.runtime.execution.call_metering,
        "Configuration loaded"
    );

    let runner = Runner::new(&file.runtime).context("Invalid runtime configuration")?;
    let outcome = runner
        .run()
        .with_context(|| format!("Could not evaluate fib({})", file.runtime.compute.n))?;

    Ok(outcome.status)
}
