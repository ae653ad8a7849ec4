//! Error types for fib-exit.
//!
//! [`FibError`] covers every failure the evaluation pipeline can report.
//! Configuration file errors live in [`crate::config_file::ConfigFileError`].

use thiserror::Error;

/// Errors raised while validating configuration or evaluating `fib(n)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FibError {
    /// The requested index produces a value that does not fit in a `u64`.
    #[error("fib({n}) overflows a 64-bit unsigned integer")]
    Overflow {
        /// The rejected index.
        n: u32,
    },

    /// A metered evaluation made more recursive calls than allowed.
    ///
    /// This is the only resource limit the evaluator enforces; it is
    /// disabled unless call metering is switched on.
    #[error("Call budget exhausted: limit of {max_calls} calls exceeded")]
    CallBudgetExhausted {
        /// The configured call budget.
        max_calls: u64,
    },

    /// Invalid configuration was provided.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl FibError {
    /// Create a new `Overflow` error.
    pub fn overflow(n: u32) -> Self {
        Self::Overflow { n }
    }

    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the index was out of range.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Returns `true` if this error indicates a resource limit was exceeded.
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, Self::CallBudgetExhausted { .. })
    }
}
