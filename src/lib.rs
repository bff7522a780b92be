//! Mortgage Calc - payment engine for fixed-rate mortgages
//!
//! This library provides:
//! - Annuity (fixed payment) and differentiated (declining payment) amortization schedules
//! - Inverse solvers: maximum principal, required rate and required term for a target payment
//! - Schedule totals, semicolon-delimited export, and what-if scenario comparisons
//!
//! Invalid numeric input is reported as `f64::NAN` (or an empty schedule); a target payment
//! that no rate or term can meet is reported as `None`.

pub mod config;
pub mod error;
pub mod export;
pub mod loan;
pub mod rate;
pub mod scenario;
pub mod schedule;
pub mod solver;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use error::{MortgageError, Result};
pub use loan::{InputWarning, LoanParams, PaymentType};
pub use rate::monthly_rate;
pub use scenario::ScenarioRunner;
pub use schedule::{
    annuity_payment, annuity_schedule, build_schedule, differentiated_schedule, sum_schedule,
    PaymentStats, Quote, Schedule, ScheduleRow, Totals,
};
pub use solver::{
    max_principal_by_payment, needed_apr_for_payment, needed_years_for_payment,
    AffordabilityReport,
};
