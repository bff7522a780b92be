//! Inverse solvers for a target monthly payment

mod affordability;
mod bisection;
mod report;

pub use affordability::{
    is_solvable_by_fixed_payment, max_principal_by_payment, needed_apr_for_payment,
    needed_apr_for_payment_within, needed_years_for_payment, needed_years_for_payment_within,
    AMORTIZATION_EPSILON, DEFAULT_APR_MAX, DEFAULT_APR_MIN, DEFAULT_MAX_YEARS,
};
pub use bisection::{bisect, DEFAULT_ITERATIONS};
pub use report::AffordabilityReport;
