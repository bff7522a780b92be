//! Differentiated (declining payment) engine

use log::debug;

use super::annuity::loan_terms;
use super::row::{close_out, Schedule, ScheduleRow, PAID_OFF_EPSILON};

/// Schedule with a constant principal installment of `principal / n`.
///
/// Interest is charged on the outstanding balance, so the payment shrinks every month.
/// The last installment is capped at the remaining balance. Returns an empty schedule
/// for out-of-domain input.
pub fn differentiated_schedule(principal: f64, apr_percent: f64, years: f64) -> Schedule {
    let Some((i, n)) = loan_terms(principal, apr_percent, years) else {
        return Vec::new();
    };

    let base_principal = principal / n;
    let mut balance = principal;
    let mut rows = Vec::new();

    for month in 1..=n as u32 {
        let interest = balance * i;
        let principal_part = balance.min(base_principal);
        let payment = interest + principal_part;
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
        "differentiated schedule: principal={} apr={} years={} installment={:.2} rows={}",
        principal,
        apr_percent,
        years,
        base_principal,
        rows.len()
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::sum_schedule;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_example_loan_schedule() {
        let rows = differentiated_schedule(4_800_000.0, 13.5, 25.0);

        assert_eq!(rows.len(), 300);
        // 16,000 principal + 54,000 interest
        assert_abs_diff_eq!(rows[0].payment, 70_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rows[0].principal, 16_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rows[299].payment, 16_180.0, epsilon = 1e-3);
        assert!(rows[0].payment > rows[299].payment);
        assert_eq!(rows[299].balance, 0.0);
    }

    #[test]
    fn test_payments_non_increasing() {
        let rows = differentiated_schedule(2_500_000.0, 11.0, 20.0);
        for pair in rows.windows(2) {
            assert!(pair[0].payment >= pair[1].payment);
            assert!(pair[0].balance >= pair[1].balance);
        }
    }

    #[test]
    fn test_payment_is_interest_plus_principal() {
        let rows = differentiated_schedule(900_000.0, 8.4, 12.0);
        for row in &rows {
            assert_eq!(row.payment, row.interest + row.principal);
        }
    }

    #[test]
    fn test_principal_repaid() {
        let rows = differentiated_schedule(4_800_000.0, 13.5, 25.0);
        let totals = sum_schedule(&rows);
        assert_relative_eq!(totals.total_principal, 4_800_000.0, max_relative = 1e-3);
    }

    #[test]
    fn test_pays_less_interest_than_annuity() {
        let diff = sum_schedule(&differentiated_schedule(4_800_000.0, 13.5, 25.0));
        let annuity = sum_schedule(&crate::schedule::annuity_schedule(4_800_000.0, 13.5, 25.0));
        assert!(diff.total_interest < annuity.total_interest);
    }

    #[test]
    fn test_zero_rate_is_flat() {
        let rows = differentiated_schedule(1_000_000.0, 0.0, 10.0);

        assert_eq!(rows.len(), 120);
        assert!(rows.iter().all(|r| r.interest == 0.0));
        assert_relative_eq!(rows[0].payment, rows[119].payment, max_relative = 1e-9);
    }

    #[test]
    fn test_invalid_input_gives_empty_schedule() {
        assert!(differentiated_schedule(-1.0, 5.0, 10.0).is_empty());
        assert!(differentiated_schedule(1000.0, 5.0, f64::NAN).is_empty());
        assert!(differentiated_schedule(1000.0, 5.0, 0.01).is_empty());
        assert!(differentiated_schedule(1000.0, 5.0, 1e9).is_empty());
    }
}
