//! Inverse problems: what loan, rate or term fits a target monthly payment
//!
//! Single-value results use `f64::NAN` for out-of-domain input. The rate and term
//! solvers return `None` when no answer exists in the search interval.

use log::debug;

use super::bisection::{bisect, DEFAULT_ITERATIONS};
use crate::rate::{monthly_rate, term_months, MONTHS_PER_YEAR};
use crate::schedule::annuity_payment;

/// Default bounds for the rate search, percent
pub const DEFAULT_APR_MIN: f64 = 0.0;
pub const DEFAULT_APR_MAX: f64 = 60.0;

/// Default cap for the term search, years
pub const DEFAULT_MAX_YEARS: f64 = 30.0;

/// Margin a payment must clear above the first month's interest to amortize anything
pub const AMORTIZATION_EPSILON: f64 = 1e-9;

/// Largest principal that `payment` fully amortizes at `apr_percent` over `years`.
///
/// Closed-form inverse of [`annuity_payment`]. Returns `f64::NAN` for non-finite input,
/// a non-positive payment, or a term that rounds to zero months.
pub fn max_principal_by_payment(payment: f64, apr_percent: f64, years: f64) -> f64 {
    let i = monthly_rate(apr_percent);
    let n = term_months(years);

    if !payment.is_finite() || !apr_percent.is_finite() || !years.is_finite() {
        return f64::NAN;
    }
    if payment <= 0.0 || n <= 0.0 {
        return f64::NAN;
    }

    if i == 0.0 {
        return payment * n;
    }
    payment * (1.0 - (1.0 + i).powf(-n)) / i
}

/// True if a fixed `payment` exceeds the first month's interest on `principal`,
/// i.e. the loan actually amortizes instead of growing or standing still.
pub fn is_solvable_by_fixed_payment(principal: f64, apr_percent: f64, payment: f64) -> bool {
    let i = monthly_rate(apr_percent);
    i.is_finite()
        && principal.is_finite()
        && payment.is_finite()
        && principal > 0.0
        && payment > principal * i + AMORTIZATION_EPSILON
}

/// Highest APR in `[0, 60]` at which `principal` over `years` costs at most `target_payment`.
///
/// See [`needed_apr_for_payment_within`].
pub fn needed_apr_for_payment(principal: f64, years: f64, target_payment: f64) -> Option<f64> {
    needed_apr_for_payment_within(
        principal,
        years,
        target_payment,
        DEFAULT_APR_MIN,
        DEFAULT_APR_MAX,
        DEFAULT_ITERATIONS,
    )
}

/// Highest APR in `[apr_min, apr_max]` at which the annuity payment stays at or below
/// `target_payment`.
///
/// Returns `None` for non-finite or non-positive inputs, or when even an interest-free
/// loan needs more than `target_payment`: raising the rate only raises the payment.
/// If every rate up to `apr_max` is affordable the result converges to `apr_max`.
pub fn needed_apr_for_payment_within(
    principal: f64,
    years: f64,
    target_payment: f64,
    apr_min: f64,
    apr_max: f64,
    iterations: u32,
) -> Option<f64> {
    if !principal.is_finite() || !years.is_finite() || !target_payment.is_finite() {
        return None;
    }
    if principal <= 0.0 || years <= 0.0 || target_payment <= 0.0 {
        return None;
    }

    let interest_free = annuity_payment(principal, 0.0, years);
    if !interest_free.is_finite() || interest_free > target_payment {
        debug!(
            "needed apr: interest-free payment {:.2} exceeds target {:.2}",
            interest_free, target_payment
        );
        return None;
    }

    let apr = bisect(apr_min, apr_max, iterations, |apr| {
        annuity_payment(principal, apr, years) <= target_payment
    });
    debug!(
        "needed apr: principal={} years={} target={} -> {}",
        principal, years, target_payment, apr
    );
    Some(apr)
}

/// Shortest term up to 30 years at which `principal` at `apr_percent` costs at most
/// `target_payment`.
///
/// See [`needed_years_for_payment_within`].
pub fn needed_years_for_payment(principal: f64, apr_percent: f64, target_payment: f64) -> Option<f64> {
    needed_years_for_payment_within(
        principal,
        apr_percent,
        target_payment,
        DEFAULT_MAX_YEARS,
        DEFAULT_ITERATIONS,
    )
}

/// Shortest term in `[1/12, max_years]` at which the annuity payment is at or below
/// `target_payment`.
///
/// Returns `None` for non-finite or non-positive inputs, when the payment does not
/// exceed the first month's interest (the balance would never fall), or when even
/// `max_years` needs a higher payment than the target.
pub fn needed_years_for_payment_within(
    principal: f64,
    apr_percent: f64,
    target_payment: f64,
    max_years: f64,
    iterations: u32,
) -> Option<f64> {
    if !principal.is_finite() || !apr_percent.is_finite() || !target_payment.is_finite() {
        return None;
    }
    if principal <= 0.0 || target_payment <= 0.0 {
        return None;
    }
    if !max_years.is_finite() || max_years <= 0.0 {
        return None;
    }

    if !is_solvable_by_fixed_payment(principal, apr_percent, target_payment) {
        debug!(
            "needed years: target {:.2} does not cover interest {:.2}",
            target_payment,
            principal * monthly_rate(apr_percent)
        );
        return None;
    }

    let at_cap = annuity_payment(principal, apr_percent, max_years);
    if !at_cap.is_finite() || at_cap > target_payment {
        debug!(
            "needed years: payment at {} year cap is {:.2}, above target {:.2}",
            max_years, at_cap, target_payment
        );
        return None;
    }

    let years = bisect(max_years, 1.0 / MONTHS_PER_YEAR, iterations, |years| {
        annuity_payment(principal, apr_percent, years) <= target_payment
    });
    debug!(
        "needed years: principal={} apr={} target={} -> {}",
        principal, apr_percent, target_payment, years
    );
    Some(years)
}
