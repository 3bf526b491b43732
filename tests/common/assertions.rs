//! Assertion utilities for testing.

use kona::TemperatureSummary;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a summary covers at least one row and that `Min <= Average <= Max`.
pub fn assert_ordered_summary(summary: &TemperatureSummary) {
    let (min, avg, max) = match (summary.min, summary.average, summary.max) {
        (Some(min), Some(avg), Some(max)) => (min, avg, max),
        _ => panic!("Summary has null fields: {:?}", summary),
    };

    assert!(
        min <= avg && avg <= max,
        "Summary out of order: min = {}, average = {}, max = {}",
        min,
        avg,
        max
    );
}
