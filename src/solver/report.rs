//! Affordability answers for a target payment, as shown side by side in the calculator

use log::debug;
use serde::Serialize;

use super::affordability::{
    max_principal_by_payment, needed_apr_for_payment_within, needed_years_for_payment_within,
};
use crate::config::CalculatorConfig;
use crate::loan::LoanParams;

/// Answers to the three inverse questions for one loan and target payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffordabilityReport {
    /// Target monthly payment
    pub target_payment: f64,

    /// Term cap in years after clamping
    pub cap_years: f64,

    /// Largest principal the target repays at the loan's APR over `cap_years`, NaN on invalid input
    pub max_principal: f64,

    /// APR at which the loan's principal over `cap_years` costs the target, if any
    pub needed_apr: Option<f64>,

    /// Shortest term (at most `cap_years`) at the loan's APR that meets the target, if any
    pub needed_years: Option<f64>,
}

impl AffordabilityReport {
    /// The annuity convention is assumed for all three answers; the loan's own term is ignored
    /// in favour of `cap_years`, which is clamped into the configured bounds.
    pub fn compute(loan: &LoanParams, target_payment: f64, cap_years: f64, config: &CalculatorConfig) -> Self {
        let cap_years = config.clamp_cap(cap_years);

        let report = Self {
            target_payment,
            cap_years,
            max_principal: max_principal_by_payment(target_payment, loan.apr, cap_years),
            needed_apr: needed_apr_for_payment_within(
                loan.principal,
                cap_years,
                target_payment,
                config.apr_min,
                config.apr_max,
                config.iterations,
            ),
            needed_years: needed_years_for_payment_within(
                loan.principal,
                loan.apr,
                target_payment,
                cap_years,
                config.iterations,
            ),
        };
        debug!("{:?}", report);
        report
    }

    /// Report using the configured default target and cap
    pub fn with_defaults(loan: &LoanParams, config: &CalculatorConfig) -> Self {
        Self::compute(loan, config.target_payment, config.max_years_cap, config)
    }
}
