//! Integration tests for fib-exit-core.
//!
//! These tests drive the complete evaluation pipeline:
//! - Configuration loading from TOML
//! - Runner construction and validation
//! - Evaluation, metered and unmetered
//! - Exit status reduction

use fib_exit_common::{ConfigFile, RuntimeConfig};
use fib_exit_core::{CallMeter, Runner, fib, metered_fib};

// ============================================================================
// Test: Default Evaluation
// ============================================================================

#[test]
fn test_default_run_exits_with_fib_40_mod_256() {
    let runner = Runner::new(&RuntimeConfig::default()).unwrap();
    let outcome = runner.run().unwrap();

    assert_eq!(outcome.n, 40);
    assert_eq!(outcome.value, 102_334_155);
    assert_eq!(u64::from(outcome.status.code()), outcome.value % 256);
    assert_eq!(outcome.status.code(), 203);
}

// ============================================================================
// Test: Config File Pipeline
// ============================================================================

#[test]
fn test_runner_from_config_file() {
    let toml = r"
        [runtime.compute]
        n = 20

        [runtime.execution]
        call_metering = true
        max_calls = 100_000
    ";

    let file = ConfigFile::from_toml(toml).unwrap();
    let runner = Runner::new(&file.runtime).unwrap();
    let outcome = runner.run().unwrap();

    assert_eq!(outcome.value, 6765);
    assert_eq!(outcome.status.code(), 109);
    // 2 * fib(21) - 1
    assert_eq!(outcome.metrics.calls, Some(21_891));
}

#[test]
fn test_config_file_budget_too_small() {
    let toml = r"
        [runtime.compute]
        n = 20

        [runtime.execution]
        call_metering = true
        max_calls = 21_890
    ";

    let file = ConfigFile::from_toml(toml).unwrap();
    let runner = Runner::new(&file.runtime).unwrap();
    let err = runner.run().unwrap_err();

    assert!(err.is_resource_limit());
}

// ============================================================================
// Test: Call Counts
// ============================================================================

#[test]
fn test_call_count_matches_closed_form() {
    for n in 0..=20 {
        let mut meter = CallMeter::unlimited();
        let value = metered_fib(n, &mut meter).unwrap();

        assert_eq!(value, fib(n));
        assert_eq!(meter.calls(), 2 * fib(n + 1) - 1, "call count for n={n}");
    }
}
