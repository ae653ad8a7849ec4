//! Configuration structures for fib-exit.
//!
//! This module defines configuration options for the evaluator:
//! - [`RuntimeConfig`]: Top-level configuration containing all settings
//! - [`ComputeConfig`]: Which Fibonacci index to evaluate
//! - [`ExecutionConfig`]: Call metering limits

use serde::{Deserialize, Serialize};

use crate::FibError;

/// Top-level runtime configuration.
///
/// It can be loaded from a TOML file (see [`crate::ConfigFile`]) and is then
/// patched with command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuntimeConfig {
    /// What to compute.
    #[serde(default)]
    pub compute: ComputeConfig,

    /// How to bound the computation.
    #[serde(default)]
    pub execution: ExecutionConfig,
}

impl RuntimeConfig {
    /// Check settings that cannot be expressed by the types alone.
    pub fn validate(&self) -> Result<(), FibError> {
        if self.execution.call_metering && self.execution.max_calls == 0 {
            return Err(FibError::invalid_config(
                "max_calls must be positive when call metering is enabled",
            ));
        }
        Ok(())
    }
}

/// Selects the Fibonacci index to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComputeConfig {
    /// Index passed to `fib`.
    #[serde(default = "defaults::n")]
    pub n: u32,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self { n: defaults::n() }
    }
}

/// Per-run execution limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExecutionConfig {
    /// Enable call metering.
    ///
    /// When enabled, every recursive call is counted and the evaluation
    /// stops once `max_calls` is exceeded.
    #[serde(default = "defaults::call_metering")]
    pub call_metering: bool,

    /// Maximum recursive calls per evaluation.
    ///
    /// `fib(n)` makes `2 * fib(n + 1) - 1` calls, so `fib(40)` needs
    /// 331,160,281 of them.
    #[serde(default = "defaults::max_calls")]
    pub max_calls: u64,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            call_metering: defaults::call_metering(),
            max_calls: defaults::max_calls(),
        }
    }
}

impl ExecutionConfig {
    /// The active call budget, if metering is enabled.
    pub fn call_budget(&self) -> Option<u64> {
        self.call_metering.then_some(self.max_calls)
    }
}

/// Default value functions for serde.
mod defaults {
    pub const fn n() -> u32 {
        40
    }

    pub const fn call_metering() -> bool {
        false
    }

    pub const fn max_calls() -> u64 {
        1_000_000_000
    }
}
