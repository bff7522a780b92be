//! Scenario runner for what-if comparisons on a single loan
//!
//! Holds the calculator configuration once, then evaluates the same loan under
//! different payment types or rates. Rate ladders are evaluated in parallel.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::CalculatorConfig;
use crate::loan::{LoanParams, PaymentType};
use crate::schedule::{Quote, Totals};
use crate::solver::AffordabilityReport;

/// Summary of the loan at one rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateScenario {
    pub apr: f64,
    pub first_payment: f64,
    pub last_payment: f64,
    pub totals: Totals,
}

/// Annuity and differentiated quotes for the same loan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentTypeComparison {
    pub annuity: Quote,
    pub differentiated: Quote,
}

impl PaymentTypeComparison {
    /// Interest saved by choosing differentiated over annuity repayment
    pub fn interest_saved(&self) -> f64 {
        self.annuity.totals.total_interest - self.differentiated.totals.total_interest
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: CalculatorConfig,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Quote the loan with its term clamped into the configured bounds
    pub fn quote(&self, loan: &LoanParams) -> Quote {
        let mut loan = *loan;
        loan.years = self.config.clamp_term(loan.years);
        Quote::compute(&loan)
    }

    pub fn compare_payment_types(&self, loan: &LoanParams) -> PaymentTypeComparison {
        PaymentTypeComparison {
            annuity: self.quote(&loan.with_payment_type(PaymentType::Annuity)),
            differentiated: self.quote(&loan.with_payment_type(PaymentType::Differentiated)),
        }
    }

    /// Evaluate the loan at each APR, keeping input order
    pub fn rate_sensitivity(&self, loan: &LoanParams, aprs: &[f64]) -> Vec<RateScenario> {
        aprs.par_iter()
            .map(|&apr| {
                let quote = self.quote(&loan.with_apr(apr));
                RateScenario {
                    apr,
                    first_payment: quote.first_payment(),
                    last_payment: quote.schedule.last().map(|r| r.payment).unwrap_or(f64::NAN),
                    totals: quote.totals,
                }
            })
            .collect()
    }

    /// Affordability answers for the loan using the configured target and cap
    pub fn affordability(&self, loan: &LoanParams) -> AffordabilityReport {
        AffordabilityReport::with_defaults(loan, &self.config)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CalculatorConfig {
        &mut self.config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
