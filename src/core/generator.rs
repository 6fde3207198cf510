//! Fixed-step sequence generation.
//!
//! Values are produced as `lower + i * step` and rounded to
//! [`DECIMAL_PLACES`] fractional digits. Rounding formats the exact binary
//! value with round-to-nearest, ties-to-even, then parses it back, so the
//! output is reproducible bit for bit.

pub const DECIMAL_PLACES: usize = 3;

/// Number of values `generate` yields: `floor((upper - lower) / step) + 1`.
///
/// A negative quotient gives 0. A non-finite quotient (zero step, infinite or
/// NaN bounds) also gives 0.
pub fn element_count(lower: f64, upper: f64, step: f64) -> usize {
    let span = ((upper - lower) / step).floor();
    if !span.is_finite() || span < 0.0 {
        return 0;
    }
    (span as usize).saturating_add(1)
}

pub fn round_to_places(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

pub fn generate(lower: f64, upper: f64, step: f64) -> Vec<f64> {
    let count = element_count(lower, upper, step);
    tracing::debug!(lower, upper, step, count, "Generating sequence");

    (0..count)
        .map(|i| round_to_places(lower + i as f64 * step, DECIMAL_PLACES))
        .collect()
}
