//! Common types, errors, and configuration for fib-exit.
//!
//! This crate provides shared functionality used across the fib-exit workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - Configuration structures for evaluation settings
//! - TOML configuration file loading

pub mod config;
pub mod config_file;
pub mod error;

pub use config::{ComputeConfig, ExecutionConfig, RuntimeConfig};
pub use config_file::{ConfigFile, ConfigFileError, LogFormat, LoggingConfig};
pub use error::FibError;
