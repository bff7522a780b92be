//! Error type for everything that crosses the numeric core's boundary
//!
//! The payment formulas and solvers themselves never return this type: they signal
//! invalid input with `f64::NAN` (or an empty schedule) and infeasibility with `None`.
//! `MortgageError` covers I/O, export parsing, configuration and explicit validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MortgageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
    },

    #[error("malformed schedule row at line {line}: {message}")]
    MalformedRow {
        line: u64,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, MortgageError>;
