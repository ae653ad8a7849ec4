//! Call metering for recursive evaluation.
//!
//! A [`CallMeter`] counts invocations of the recursive evaluator and, when
//! given a limit, stops it once that many calls have been made. It plays the
//! role fuel plays for a sandboxed guest: a deterministic cap on work that
//! does not depend on wall-clock time.

use fib_exit_common::{ExecutionConfig, FibError};

/// Counts recursive calls against an optional budget.
#[derive(Debug, Clone, Default)]
pub struct CallMeter {
    calls: u64,
    limit: Option<u64>,
}

impl CallMeter {
    /// A meter that only counts.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// A meter that fails once more than `max_calls` calls are charged.
    pub fn with_limit(max_calls: u64) -> Self {
        Self {
            calls: 0,
            limit: Some(max_calls),
        }
    }

    /// Build a meter from execution settings.
    ///
    /// The budget only applies when call metering is enabled.
    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self {
            calls: 0,
            limit: config.call_budget(),
        }
    }

    /// Record one call.
    pub fn charge(&mut self) -> Result<(), FibError> {
        self.calls = self.calls.saturating_add(1);
        match self.limit {
            Some(max_calls) if self.calls > max_calls => {
                Err(FibError::CallBudgetExhausted { max_calls })
            }
            _ => Ok(()),
        }
    }

    /// Calls charged so far.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// The configured budget, if any.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Calls left before the budget is exhausted.
    pub fn remaining(&self) -> Option<u64> {
        self.limit.map(|max| max.saturating_sub(self.calls))
    }
}
