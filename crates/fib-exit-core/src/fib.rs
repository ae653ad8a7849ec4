//! Naive recursive Fibonacci.
//!
//! `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n - 1) + fib(n - 2)`.
//! Evaluation is exponential in `n`; nothing here memoizes.

use fib_exit_common::FibError;

use crate::CallMeter;

/// Largest index whose Fibonacci number fits in a `u64`.
///
/// `fib(93) = 12_200_160_415_121_876_738`; `fib(94)` overflows.
pub const MAX_INPUT: u32 = 93;

/// Compute the n-th Fibonacci number by double recursion.
///
/// Callers must keep `n <= MAX_INPUT`; use [`checked_fib`] for untrusted
/// input.
pub fn fib(n: u32) -> u64 {
    if n < 2 {
        u64::from(n)
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

/// Like [`fib`], but rejects indices whose result would overflow.
pub fn checked_fib(n: u32) -> Result<u64, FibError> {
    ensure_in_range(n)?;
    Ok(fib(n))
}

/// Like [`checked_fib`], charging `meter` once per recursive call.
///
/// Fails with [`FibError::CallBudgetExhausted`] as soon as the meter's
/// limit is exceeded.
pub fn metered_fib(n: u32, meter: &mut CallMeter) -> Result<u64, FibError> {
    ensure_in_range(n)?;
    fib_charged(n, meter)
}

fn fib_charged(n: u32, meter: &mut CallMeter) -> Result<u64, FibError> {
    meter.charge()?;
    if n < 2 {
        return Ok(u64::from(n));
    }
    Ok(fib_charged(n - 1, meter)? + fib_charged(n - 2, meter)?)
}

fn ensure_in_range(n: u32) -> Result<(), FibError> {
    if n > MAX_INPUT {
        return Err(FibError::overflow(n));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(fib(0), 0);
        assert_eq!(fib(1), 1);
        assert_eq!(fib(2), 1);
        assert_eq!(fib(10), 55);
    }

    #[test]
    fn test_recurrence() {
        for n in 2..=25 {
            assert_eq!(fib(n), fib(n - 1) + fib(n - 2), "recurrence broken at n={n}");
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(fib(20), 6765);
        assert_eq!(fib(25), 75_025);
        assert_eq!(fib(30), 832_040);
    }

    #[test]
    fn test_pure() {
        let first = fib(22);
        let second = fib(22);
        assert_eq!(first, second);
    }

    #[test]
    fn test_max_input_is_last_fitting_index() {
        // Walk the sequence iteratively until the next term overflows
        let (mut a, mut b) = (0u64, 1u64);
        let mut last = 0u32;
        while let Some(next) = a.checked_add(b) {
            a = b;
            b = next;
            last += 1;
        }
        // `b` holds fib(last + 1), the final representable term
        assert_eq!(last + 1, MAX_INPUT);
        assert_eq!(b, 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_checked_fib() {
        assert_eq!(checked_fib(10), Ok(55));
        assert_eq!(checked_fib(MAX_INPUT + 1), Err(FibError::overflow(94)));
        assert!(checked_fib(u32::MAX).unwrap_err().is_overflow());
    }

    #[test]
    fn test_metered_fib_counts_calls() {
        let mut meter = CallMeter::unlimited();
        assert_eq!(metered_fib(10, &mut meter), Ok(55));
        // 2 * fib(11) - 1
        assert_eq!(meter.calls(), 177);
    }

    #[test]
    fn test_metered_fib_budget() {
        let mut meter = CallMeter::with_limit(177);
        assert_eq!(metered_fib(10, &mut meter), Ok(55));

        let mut meter = CallMeter::with_limit(176);
        assert_eq!(
            metered_fib(10, &mut meter),
            Err(FibError::CallBudgetExhausted { max_calls: 176 })
        );
    }

    #[test]
    fn test_metered_fib_rejects_before_charging() {
        let mut meter = CallMeter::unlimited();
        assert!(metered_fib(100, &mut meter).unwrap_err().is_overflow());
        assert_eq!(meter.calls(), 0);
    }
}
