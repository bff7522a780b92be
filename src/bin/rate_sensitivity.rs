//! Evaluate the example loan across an APR ladder and write a CSV summary
//!
//! Usage: cargo run --release --bin rate_sensitivity [output.csv]

use anyhow::{Context, Result};
use log::info;
use mortgage_calc::{LoanParams, PaymentType, ScenarioRunner};
use std::env;
use std::time::Instant;

/// 0% to 30% in quarter-point steps
fn apr_ladder() -> Vec<f64> {
    (0..=120).map(|step| step as f64 * 0.25).collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "rate_sensitivity.csv".to_string());

    let start = Instant::now();
    let runner = ScenarioRunner::new();
    let aprs = apr_ladder();

    let mut wtr = csv::Writer::from_path(&output_path)
        .with_context(|| format!("failed to create {}", output_path))?;
    wtr.write_record([
        "PaymentType", "APR", "FirstPayment", "LastPayment", "TotalPaid", "TotalInterest", "Months",
    ])?;

    for payment_type in PaymentType::all() {
        let loan = LoanParams::default().with_payment_type(payment_type);
        let scenarios = runner.rate_sensitivity(&loan, &aprs);
        info!("{}: {} scenarios", payment_type, scenarios.len());

        for s in &scenarios {
            wtr.write_record([
                payment_type.to_string(),
                format!("{:.2}", s.apr),
                format!("{:.2}", s.first_payment),
                format!("{:.2}", s.last_payment),
                format!("{:.2}", s.totals.total_payment),
                format!("{:.2}", s.totals.total_interest),
                s.totals.months.to_string(),
            ])?;
        }
    }
    wtr.flush()?;

    println!("Wrote {} rates x 2 payment types to {} in {:?}", aprs.len(), output_path, start.elapsed());
    Ok(())
}
