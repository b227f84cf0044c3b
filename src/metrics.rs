//! Zero-guarded ratio helpers shared by every calculator.
//!
//! A metric whose denominator is zero (or negative) is undefined and is
//! reported as `0.0`.  No calculator divides without going through one
//! of these helpers.

/// `numerator / denominator`, or `0.0` when the denominator is not
/// positive.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// `part / whole × 100`, or `0.0` when `whole` is not positive.
pub fn percentage(part: f64, whole: f64) -> f64 {
    ratio(part, whole) * 100.0
}

/// Return on cost: `profit / cost × 100`.  The same formula doubles as
/// the margin percentage reported by the pricing recommender.
pub fn roi(profit: f64, cost: f64) -> f64 {
    percentage(profit, cost)
}

/// Grosses a net amount up so that, after a `fee_percent` deduction,
/// exactly `net` remains.  A fee of 100% or more has no solution and
/// yields `0.0`.
pub fn gross_up(net: f64, fee_percent: f64) -> f64 {
    ratio(net, 1.0 - fee_percent / 100.0)
}
