//! Recursive Fibonacci evaluation for fib-exit.
//!
//! This crate provides:
//! - [`fib`], [`checked_fib`], [`metered_fib`]: naive double recursion
//! - [`CallMeter`]: Optional per-evaluation call budget
//! - [`ExitStatus`]: Reduction of a result to a process exit status
//! - [`Runner`]: Config-driven evaluation with metrics and logging
//!
//! # Pipeline
//!
//! ```text
//! RuntimeConfig ──▶ Runner::run ──▶ fib(n) ──▶ ExitStatus (value % 256)
//!                        │
//!                        └── CallMeter (only when call metering is on)
//! ```

pub mod fib;
pub mod meter;
pub mod runner;
pub mod status;

pub use fib::{MAX_INPUT, checked_fib, fib, metered_fib};
pub use meter::CallMeter;
pub use runner::{ExecutionMetrics, Outcome, Runner};
pub use status::ExitStatus;
