//! Config-driven evaluation.
//!
//! [`Runner`] ties configuration to the evaluator:
//!
//! 1. Validate the configuration
//! 2. Evaluate `fib(n)`, metered if call metering is enabled
//! 3. Reduce the value to an [`ExitStatus`]
//! 4. Collect metrics and log the outcome

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::{CallMeter, ExitStatus, checked_fib, metered_fib};
use fib_exit_common::{FibError, RuntimeConfig};

/// Measurements taken during one evaluation.
#[derive(Debug, Clone, Default)]
pub struct ExecutionMetrics {
    /// Recursive calls made. Only tracked when call metering is enabled.
    pub calls: Option<u64>,

    /// Total evaluation duration.
    pub duration: Option<Duration>,
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The evaluated index.
    pub n: u32,
    /// `fib(n)`.
    pub value: u64,
    /// `fib(n) % 256`.
    pub status: ExitStatus,
    /// Execution metrics.
    pub metrics: ExecutionMetrics,
}

/// Evaluates `fib(n)` according to a [`RuntimeConfig`].
#[derive(Debug, Clone)]
pub struct Runner {
    config: RuntimeConfig,
}

impl Runner {
    /// Create a runner after validating `config`.
    pub fn new(config: &RuntimeConfig) -> Result<Self, FibError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
        })
    }

    /// Get the runner configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Evaluate the configured index.
    pub fn run(&self) -> Result<Outcome, FibError> {
        self.evaluate(self.config.compute.n)
    }

    /// Evaluate an explicit index with this runner's execution settings.
    #[instrument(skip(self), fields(metered = self.config.execution.call_metering))]
    pub fn evaluate(&self, n: u32) -> Result<Outcome, FibError> {
        let start = Instant::now();

        debug!("Starting evaluation");

        let (result, calls) = if self.config.execution.call_metering {
            let mut meter = CallMeter::from_config(&self.config.execution);
            let result = metered_fib(n, &mut meter);
            (result, Some(meter.calls()))
        } else {
            (checked_fib(n), None)
        };

        let duration = start.elapsed();

        match result {
            Ok(value) => {
                let status = ExitStatus::from_value(value);
                info!(
                    value = value,
                    status = status.code(),
                    duration_ms = duration.as_millis(),
                    calls = calls,
                    "Evaluation completed"
                );
                Ok(Outcome {
                    n,
                    value,
                    status,
                    metrics: ExecutionMetrics {
                        calls,
                        duration: Some(duration),
                    },
                })
            }
            Err(err) => {
                // The caller reports the error itself
                debug!(
                    error = %err,
                    duration_ms = duration.as_millis(),
                    calls = calls,
                    "Evaluation failed"
                );
                Err(err)
            }
        }
    }
}
