//! Loan parameters and input checks

mod params;

pub use params::{InputWarning, LoanParams, PaymentType};
