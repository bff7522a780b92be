//! Payment formulas and amortization schedules

mod annuity;
mod differentiated;
mod quote;
mod row;

pub use annuity::{annuity_payment, annuity_schedule};
pub use differentiated::differentiated_schedule;
pub use quote::Quote;
pub use row::{sum_schedule, PaymentStats, Schedule, ScheduleRow, Totals, PAID_OFF_EPSILON};

use crate::loan::{LoanParams, PaymentType};

/// Build the schedule for the loan's payment type
pub fn build_schedule(loan: &LoanParams) -> Schedule {
    match loan.payment_type {
        PaymentType::Annuity => annuity_schedule(loan.principal, loan.apr, loan.years),
        PaymentType::Differentiated => differentiated_schedule(loan.principal, loan.apr, loan.years),
    }
}
