//! Everything the calculator shows for one loan

use serde::Serialize;

use super::annuity::annuity_payment;
use super::row::{sum_schedule, PaymentStats, Schedule, Totals};
use super::build_schedule;
use crate::loan::{LoanParams, PaymentType};

/// Payment, schedule and totals for a loan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub loan: LoanParams,

    /// Fixed annuity payment for the loan, NaN if the inputs are out of domain.
    /// Reported for both payment types as a point of comparison.
    pub annuity_payment: f64,

    /// Schedule for the loan's payment type
    pub schedule: Schedule,

    pub totals: Totals,

    /// First/last/average payment, only for differentiated loans with a schedule
    pub stats: Option<PaymentStats>,
}

impl Quote {
    pub fn compute(loan: &LoanParams) -> Self {
        let schedule = build_schedule(loan);
        let totals = sum_schedule(&schedule);
        let stats = match loan.payment_type {
            PaymentType::Differentiated => PaymentStats::from_schedule(&schedule),
            PaymentType::Annuity => None,
        };

        Self {
            loan: *loan,
            annuity_payment: annuity_payment(loan.principal, loan.apr, loan.years),
            schedule,
            totals,
            stats,
        }
    }

    /// Payment due in the first month, NaN for an empty schedule
    pub fn first_payment(&self) -> f64 {
        self.schedule.first().map(|r| r.payment).unwrap_or(f64::NAN)
    }

    /// True if no schedule could be computed for the inputs
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_annuity_quote() {
        let quote = Quote::compute(&LoanParams::default());

        assert_eq!(quote.totals.months, 300);
        assert!(quote.stats.is_none());
        assert_eq!(quote.first_payment(), quote.annuity_payment);
        assert_relative_eq!(
            quote.totals.total_payment,
            quote.annuity_payment * 300.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_differentiated_quote() {
        let loan = LoanParams::default().with_payment_type(PaymentType::Differentiated);
        let quote = Quote::compute(&loan);
        let stats = quote.stats.unwrap();

        assert_relative_eq!(stats.first, 70_000.0, max_relative = 1e-9);
        assert!(stats.last < stats.average && stats.average < stats.first);
        assert!(quote.annuity_payment.is_finite());
    }

    #[test]
    fn test_invalid_quote() {
        let loan = LoanParams::differentiated(0.0, 10.0, 10.0);
        let quote = Quote::compute(&loan);

        assert!(quote.is_empty());
        assert!(quote.annuity_payment.is_nan());
        assert!(quote.first_payment().is_nan());
        assert!(quote.stats.is_none());
        assert_eq!(quote.totals, Totals::default());
    }
}
