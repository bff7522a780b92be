//! Annuity (fixed payment) engine

use log::debug;

use super::row::{close_out, Schedule, ScheduleRow, PAID_OFF_EPSILON};
use crate::rate::{monthly_rate, term_months, MAX_TERM_MONTHS};

/// Monthly rate and period count for a loan, or `None` if the inputs are out of domain
/// (non-finite, non-positive principal, or a term that rounds to zero months or to more
/// months than a row index can hold).
pub(crate) fn loan_terms(principal: f64, apr_percent: f64, years: f64) -> Option<(f64, f64)> {
    let i = monthly_rate(apr_percent);
    let n = term_months(years);

    if !principal.is_finite() || !apr_percent.is_finite() || !years.is_finite() {
        return None;
    }
    if principal <= 0.0 || n <= 0.0 || n > MAX_TERM_MONTHS {
        return None;
    }
    Some((i, n))
}

/// Fixed monthly payment that amortizes `principal` over `years` at `apr_percent`.
///
/// Returns `f64::NAN` for out-of-domain input. A zero rate degenerates to `principal / n`.
pub fn annuity_payment(principal: f64, apr_percent: f64, years: f64) -> f64 {
    let Some((i, n)) = loan_terms(principal, apr_percent, years) else {
        return f64::NAN;
    };

    if i == 0.0 {
        return principal / n;
    }
    principal * (i / (1.0 - (1.0 + i).powf(-n)))
}

/// Month-by-month schedule for an annuity loan.
///
/// Stops early once the balance is paid off and forces the last balance to exactly zero.
/// Returns an empty schedule when the payment cannot be computed.
pub fn annuity_schedule(principal: f64, apr_percent: f64, years: f64) -> Schedule {
    let payment = annuity_payment(principal, apr_percent, years);
    if !payment.is_finite() {
        return Vec::new();
    }

    let i = monthly_rate(apr_percent);
    let n = term_months(years) as u32;
    let mut balance = principal;
    let mut rows = Vec::new();

    for month in 1..=n {
        let interest = balance * i;
        let principal_part = (payment - interest).max(0.0);
        balance = (balance - principal_part).max(0.0);

        rows.push(ScheduleRow {
            month,
            payment,
            interest,
            principal: principal_part,
            balance,
        });

        if balance <= PAID_OFF_EPSILON {
            break;
        }
    }

    close_out(&mut rows);
    debug!(
        "annuity schedule: principal={} apr={} years={} payment={:.2} rows={}",
        principal,
        apr_percent,
        years,
        payment,
        rows.len()
    );
    rows
}
