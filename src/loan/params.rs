//! Loan parameters matching the calculator's input form

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MortgageError, Result};
use crate::rate::{term_months, MAX_TERM_MONTHS};

/// Highest APR (percent) that is not flagged as unusual
pub const ADVISORY_MAX_APR: f64 = 60.0;

/// Terms above this many years are flagged; most lenders stop around 30
pub const ADVISORY_MAX_YEARS: f64 = 30.0;

/// Repayment convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Fixed monthly payment for the whole term
    #[default]
    Annuity,
    /// Fixed principal installment, payment declines as interest shrinks
    Differentiated,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Annuity => "annuity",
            PaymentType::Differentiated => "differentiated",
        }
    }

    pub fn all() -> [PaymentType; 2] {
        [PaymentType::Annuity, PaymentType::Differentiated]
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "annuity" => Ok(PaymentType::Annuity),
            "differentiated" => Ok(PaymentType::Differentiated),
            other => Err(format!("unknown payment type: {}", other)),
        }
    }
}

/// Advisory notes about unusual inputs. They never block a computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum InputWarning {
    /// Principal is zero or negative
    NonPositivePrincipal,
    /// APR is negative or above the advisory maximum
    UnusualRate(f64),
    /// Term is longer than lenders usually allow
    LongTerm(f64),
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::NonPositivePrincipal => write!(f, "loan principal must be greater than zero"),
            InputWarning::UnusualRate(apr) => write!(f, "rate {}% looks unusual, check the value", apr),
            InputWarning::LongTerm(years) => write!(
                f,
                "term of {} years exceeds the usual {} year lender cap",
                years, ADVISORY_MAX_YEARS
            ),
        }
    }
}

/// Inputs for one loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParams {
    /// Amount borrowed, currency units
    pub principal: f64,

    /// Nominal annual rate in percent (13.5 means 13.5%)
    pub apr: f64,

    /// Term in years, fractional terms allowed
    pub years: f64,

    #[serde(default)]
    pub payment_type: PaymentType,
}

impl LoanParams {
    pub fn new(principal: f64, apr: f64, years: f64, payment_type: PaymentType) -> Self {
        Self {
            principal,
            apr,
            years,
            payment_type,
        }
    }

    pub fn annuity(principal: f64, apr: f64, years: f64) -> Self {
        Self::new(principal, apr, years, PaymentType::Annuity)
    }

    pub fn differentiated(principal: f64, apr: f64, years: f64) -> Self {
        Self::new(principal, apr, years, PaymentType::Differentiated)
    }

    /// Same loan with a different repayment convention
    pub fn with_payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = payment_type;
        self
    }

    /// Same loan at a different rate
    pub fn with_apr(mut self, apr: f64) -> Self {
        self.apr = apr;
        self
    }

    /// Number of monthly periods, `round(years * 12)`
    pub fn months(&self) -> f64 {
        term_months(self.years)
    }

    /// Check the conditions under which the payment formulas return NaN
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(MortgageError::InvalidParameter {
                name: "principal",
                value: self.principal,
            });
        }
        if !self.apr.is_finite() {
            return Err(MortgageError::InvalidParameter {
                name: "apr",
                value: self.apr,
            });
        }
        if !self.years.is_finite() || self.months() <= 0.0 || self.months() > MAX_TERM_MONTHS {
            return Err(MortgageError::InvalidParameter {
                name: "years",
                value: self.years,
            });
        }
        Ok(())
    }

    /// Advisory warnings for the inputs, in display order
    pub fn warnings(&self) -> Vec<InputWarning> {
        let mut out = Vec::new();
        if self.principal <= 0.0 {
            out.push(InputWarning::NonPositivePrincipal);
        }
        if self.apr < 0.0 || self.apr > ADVISORY_MAX_APR {
            out.push(InputWarning::UnusualRate(self.apr));
        }
        if self.years > ADVISORY_MAX_YEARS {
            out.push(InputWarning::LongTerm(self.years));
        }
        out
    }

    /// Log each advisory warning at `warn` level and hand them back to the caller
    pub fn log_warnings(&self) -> Vec<InputWarning> {
        let warnings = self.warnings();
        for warning in &warnings {
            warn!("{}", warning);
        }
        warnings
    }
}

impl Default for LoanParams {
    /// The calculator's example loan
    fn default() -> Self {
        Self::annuity(4_800_000.0, 13.5, 25.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_example_loan() {
        let loan = LoanParams::default();
        assert_eq!(loan.principal, 4_800_000.0);
        assert_eq!(loan.apr, 13.5);
        assert_eq!(loan.years, 25.0);
        assert_eq!(loan.payment_type, PaymentType::Annuity);
        assert_eq!(loan.months(), 300.0);
    }

    #[test]
    fn test_payment_type_parse() {
        assert_eq!("annuity".parse::<PaymentType>(), Ok(PaymentType::Annuity));
        assert_eq!("Differentiated".parse::<PaymentType>(), Ok(PaymentType::Differentiated));
        assert!("balloon".parse::<PaymentType>().is_err());
    }

    #[test]
    fn test_payment_type_serde() {
        let json = serde_json::to_string(&PaymentType::Differentiated).unwrap();
        assert_eq!(json, "\"differentiated\"");

        let loan: LoanParams =
            serde_json::from_str(r#"{"principal": 1000.0, "apr": 5.0, "years": 2.0}"#).unwrap();
        assert_eq!(loan.payment_type, PaymentType::Annuity);
    }

    #[test]
    fn test_validate() {
        assert!(LoanParams::default().validate().is_ok());
        assert!(LoanParams::annuity(1000.0, 0.0, 1.0).validate().is_ok());

        let err = LoanParams::annuity(0.0, 5.0, 10.0).validate().unwrap_err();
        assert!(matches!(err, MortgageError::InvalidParameter { name: "principal", .. }));

        let err = LoanParams::annuity(1000.0, f64::NAN, 10.0).validate().unwrap_err();
        assert!(matches!(err, MortgageError::InvalidParameter { name: "apr", .. }));

        // rounds to zero months
        let err = LoanParams::annuity(1000.0, 5.0, 0.03).validate().unwrap_err();
        assert!(matches!(err, MortgageError::InvalidParameter { name: "years", .. }));

        let err = LoanParams::annuity(1000.0, 5.0, 1e9).validate().unwrap_err();
        assert!(matches!(err, MortgageError::InvalidParameter { name: "years", .. }));
    }

    #[test]
    fn test_warnings() {
        assert!(LoanParams::default().warnings().is_empty());

        let loan = LoanParams::annuity(0.0, 75.0, 35.0);
        assert_eq!(
            loan.warnings(),
            vec![
                InputWarning::NonPositivePrincipal,
                InputWarning::UnusualRate(75.0),
                InputWarning::LongTerm(35.0),
            ]
        );

        let negative_rate = LoanParams::annuity(1000.0, -1.0, 10.0);
        assert_eq!(negative_rate.warnings(), vec![InputWarning::UnusualRate(-1.0)]);
    }

    #[test]
    fn test_log_warnings_returns_warnings() {
        let loan = LoanParams::annuity(500_000.0, 80.0, 40.0);
        assert_eq!(loan.log_warnings(), loan.warnings());
        assert!(LoanParams::default().log_warnings().is_empty());
    }
}
