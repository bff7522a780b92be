//! Schedule rows and aggregate totals

use serde::{Deserialize, Serialize};

/// Balance at or below which a schedule is considered repaid
pub const PAID_OFF_EPSILON: f64 = 1e-6;

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Month index, starting at 1
    pub month: u32,

    /// Total paid this month (interest + principal)
    pub payment: f64,

    /// Interest portion of the payment
    pub interest: f64,

    /// Principal portion of the payment
    pub principal: f64,

    /// Remaining balance after the payment
    pub balance: f64,
}

/// Ordered rows, month 1 first. Empty means no schedule could be computed.
pub type Schedule = Vec<ScheduleRow>;

/// Sums over a schedule
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub total_payment: f64,
    pub total_interest: f64,
    pub total_principal: f64,
    pub months: u32,
}

/// Sum payment, interest and principal across all rows. Empty input gives all-zero totals.
pub fn sum_schedule(rows: &[ScheduleRow]) -> Totals {
    let total_payment: f64 = rows.iter().map(|r| r.payment).sum();
    let total_interest: f64 = rows.iter().map(|r| r.interest).sum();
    let total_principal: f64 = rows.iter().map(|r| r.principal).sum();

    Totals {
        total_payment,
        total_interest,
        total_principal,
        months: rows.len() as u32,
    }
}

/// First, last and average payment of a declining schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentStats {
    pub first: f64,
    pub last: f64,
    pub average: f64,
}

impl PaymentStats {
    pub fn from_schedule(rows: &[ScheduleRow]) -> Option<Self> {
        let first = rows.first()?.payment;
        let last = rows.last()?.payment;
        let totals = sum_schedule(rows);

        Some(Self {
            first,
            last,
            average: totals.total_payment / totals.months.max(1) as f64,
        })
    }
}

/// Force the final balance to exactly zero, absorbing accumulated rounding drift
pub(crate) fn close_out(rows: &mut Schedule) {
    if let Some(last) = rows.last_mut() {
        last.balance = 0.0;
    }
}
