//! Command-line arguments.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fib_exit_common::{ConfigFile, LogFormat};

/// Compute fib(n) by naive recursion and exit with the result modulo 256.
///
/// With no arguments, evaluates fib(40) and exits with status 203.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "fib-exit", version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "FIB_EXIT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fibonacci index to evaluate (overrides the config file).
    #[arg(short, long, env = "FIB_EXIT_N", value_name = "N")]
    pub n: Option<u32>,

    /// Enable call metering with this budget.
    #[arg(long, value_name = "CALLS")]
    pub max_calls: Option<u64>,

    /// Emit logs as JSON on stderr.
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Load the config file, if any, and apply command-line overrides.
    pub fn resolve(&self) -> anyhow::Result<ConfigFile> {
        let mut file = match &self.config {
            Some(path) => ConfigFile::from_file(path)
                .with_context(|| format!("Could not load configuration from {}", path.display()))?,
            None => ConfigFile::default(),
        };

        if let Some(n) = self.n {
            file.runtime.compute.n = n;
        }
        if let Some(max_calls) = self.max_calls {
            file.runtime.execution.call_metering = true;
            file.runtime.execution.max_calls = max_calls;
        }
        if self.json_logs {
            file.logging.format = LogFormat::Json;
        }

        Ok(file)
    }
}
