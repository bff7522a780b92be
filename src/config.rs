//! Calculator configuration
//!
//! Every field has a serde default, so a JSON file only needs the values it overrides:
//!
//! ```json
//! { "max_years_cap": 25, "target_payment": 55000 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::rate::clamp;
use crate::solver::{DEFAULT_APR_MAX, DEFAULT_APR_MIN, DEFAULT_ITERATIONS, DEFAULT_MAX_YEARS};

fn default_apr_min() -> f64 { DEFAULT_APR_MIN }
fn default_apr_max() -> f64 { DEFAULT_APR_MAX }
fn default_iterations() -> u32 { DEFAULT_ITERATIONS }
fn default_max_years_cap() -> f64 { DEFAULT_MAX_YEARS }
fn default_cap_bounds() -> (f64, f64) { (5.0, 50.0) }
fn default_term_bounds() -> (f64, f64) { (1.0, 50.0) }
fn default_target_payment() -> f64 { 40_000.0 }

/// Solver bounds and input limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Lower end of the rate search, percent
    #[serde(default = "default_apr_min")]
    pub apr_min: f64,

    /// Upper end of the rate search, percent
    #[serde(default = "default_apr_max")]
    pub apr_max: f64,

    /// Bisection steps for the rate and term solvers
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Term cap for affordability searches, years
    #[serde(default = "default_max_years_cap")]
    pub max_years_cap: f64,

    /// Allowed range for the term cap, years
    #[serde(default = "default_cap_bounds")]
    pub cap_bounds: (f64, f64),

    /// Allowed range for a loan term, years
    #[serde(default = "default_term_bounds")]
    pub term_bounds: (f64, f64),

    /// Target monthly payment for affordability searches
    #[serde(default = "default_target_payment")]
    pub target_payment: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            apr_min: default_apr_min(),
            apr_max: default_apr_max(),
            iterations: default_iterations(),
            max_years_cap: default_max_years_cap(),
            cap_bounds: default_cap_bounds(),
            term_bounds: default_term_bounds(),
            target_payment: default_target_payment(),
        }
    }
}

impl CalculatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Clamp a loan term into `term_bounds`
    pub fn clamp_term(&self, years: f64) -> f64 {
        clamp(years, self.term_bounds.0, self.term_bounds.1)
    }

    /// Clamp an affordability term cap into `cap_bounds`
    pub fn clamp_cap(&self, cap_years: f64) -> f64 {
        clamp(cap_years, self.cap_bounds.0, self.cap_bounds.1)
    }
}
