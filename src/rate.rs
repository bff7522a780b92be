//! Rate and term normalization shared by the schedule builders and solvers

/// Months per year used to derive the periodic rate and the term count
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert an annual percentage rate (e.g. 13.5 for 13.5%) into a monthly periodic rate.
///
/// No validation is done: non-finite input yields non-finite output and
/// callers are expected to check.
pub fn monthly_rate(apr_percent: f64) -> f64 {
    apr_percent / 100.0 / MONTHS_PER_YEAR
}

/// Number of monthly periods for a term in years, `round(years * 12)`.
///
/// Returned as `f64` so a non-finite or non-positive term is visible to the caller
/// instead of being saturated by an integer cast.
pub fn term_months(years: f64) -> f64 {
    (years * MONTHS_PER_YEAR).round()
}

/// Longest term the schedule builders accept, in months. Row indices are `u32`.
pub const MAX_TERM_MONTHS: f64 = u32::MAX as f64;

/// Clamp `value` into `[min, max]`.
///
/// Non-finite values are returned unchanged so an invalid input stays invalid downstream.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    min.max(max.min(value))
}
