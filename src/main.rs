//! Mortgage calculator CLI
//!
//! Command-line interface for schedules, affordability searches and payment type comparisons

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use mortgage_calc::{
    export, AffordabilityReport, CalculatorConfig, LoanParams, PaymentType, Quote, ScenarioRunner,
};

#[derive(Parser)]
#[command(name = "mortgage-calc", version, about = "Mortgage payment schedules and affordability")]
struct Cli {
    /// JSON config file with solver bounds and defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct LoanArgs {
    /// Loan principal
    #[arg(long, default_value_t = 4_800_000.0)]
    principal: f64,

    /// Annual rate, percent
    #[arg(long, default_value_t = 13.5)]
    apr: f64,
}

#[derive(Subcommand)]
enum Command {
    /// Monthly payment and amortization schedule
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,

        /// Term in years
        #[arg(long, default_value_t = 25.0)]
        years: f64,

        /// annuity or differentiated
        #[arg(long = "type", default_value = "annuity")]
        payment_type: PaymentType,

        /// Write the full schedule to this file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Number of rows to print
        #[arg(long, default_value_t = 24)]
        rows: usize,
    },
    /// Maximum principal, needed rate and needed term for a target payment
    Afford {
        #[command(flatten)]
        loan: LoanArgs,

        /// Target monthly payment (defaults to the config value)
        #[arg(long)]
        target: Option<f64>,

        /// Term cap in years (defaults to the config value)
        #[arg(long)]
        cap_years: Option<f64>,
    },
    /// Annuity and differentiated repayment side by side
    Compare {
        #[command(flatten)]
        loan: LoanArgs,

        /// Term in years
        #[arg(long, default_value_t = 25.0)]
        years: f64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    let runner = ScenarioRunner::with_config(config);

    match cli.command {
        Command::Schedule { loan, years, payment_type, csv, rows } => {
            let params = LoanParams::new(loan.principal, loan.apr, years, payment_type);
            params.log_warnings();

            let quote = runner.quote(&params);
            if let Some(path) = csv {
                export::save_schedule(&path, &quote.schedule)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print_quote(&quote, rows);
            }
        }
        Command::Afford { loan, target, cap_years } => {
            let target = target.unwrap_or(runner.config().target_payment);
            let cap_years = cap_years.unwrap_or(runner.config().max_years_cap);
            let params = LoanParams::annuity(loan.principal, loan.apr, cap_years);
            params.log_warnings();

            let report = AffordabilityReport::compute(&params, target, cap_years, runner.config());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_affordability(&params, &report);
            }
        }
        Command::Compare { loan, years } => {
            let params = LoanParams::annuity(loan.principal, loan.apr, years);
            params.log_warnings();

            let comparison = runner.compare_payment_types(&params);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                println!("{:<16} {:>14} {:>14}", "", "Annuity", "Differentiated");
                println!("{}", "-".repeat(46));
                println!("{:<16} {:>14.2} {:>14.2}", "First payment",
                    comparison.annuity.first_payment(), comparison.differentiated.first_payment());
                println!("{:<16} {:>14.2} {:>14.2}", "Total paid",
                    comparison.annuity.totals.total_payment, comparison.differentiated.totals.total_payment);
                println!("{:<16} {:>14.2} {:>14.2}", "Total interest",
                    comparison.annuity.totals.total_interest, comparison.differentiated.totals.total_interest);
                println!("{:<16} {:>14} {:>14}", "Months",
                    comparison.annuity.totals.months, comparison.differentiated.totals.months);
                println!("\nInterest saved with differentiated: {:.2}", comparison.interest_saved());
            }
        }
    }

    Ok(())
}

fn print_quote(quote: &Quote, rows: usize) {
    let loan = &quote.loan;
    println!("Loan: {:.2} at {}% over {} years ({})", loan.principal, loan.apr, loan.years, loan.payment_type);

    if quote.is_empty() {
        println!("No schedule could be computed for these inputs.");
        return;
    }

    match quote.stats {
        Some(stats) => {
            println!("  First payment:   {:.2}", stats.first);
            println!("  Last payment:    {:.2}", stats.last);
            println!("  Average payment: {:.2}", stats.average);
        }
        None => println!("  Monthly payment: {:.2}", quote.annuity_payment),
    }
    println!("  Total paid:      {:.2}", quote.totals.total_payment);
    println!("  Total interest:  {:.2}", quote.totals.total_interest);
    println!("  Months:          {}", quote.totals.months);
    println!();

    println!("{:>5} {:>14} {:>14} {:>14} {:>16}", "Month", "Payment", "Interest", "Principal", "Balance");
    println!("{}", "-".repeat(67));
    for row in quote.schedule.iter().take(rows) {
        println!("{:>5} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
            row.month, row.payment, row.interest, row.principal, row.balance);
    }
    if quote.schedule.len() > rows {
        println!("... ({} more months)", quote.schedule.len() - rows);
    }
}

fn print_affordability(params: &LoanParams, report: &AffordabilityReport) {
    println!("Target payment {:.2}, term cap {} years", report.target_payment, report.cap_years);
    println!();
    println!("Max principal at {}%: {:.2}", params.apr, report.max_principal);
    match report.needed_apr {
        Some(apr) => println!("Needed rate for {:.2}: {:.2}%", params.principal, apr),
        None => println!("Needed rate for {:.2}: no solution", params.principal),
    }
    match report.needed_years {
        Some(years) => println!("Needed term for {:.2} at {}%: {:.2} years", params.principal, params.apr, years),
        None => {
            println!("Needed term for {:.2} at {}%: no solution", params.principal, params.apr);
            println!("  (usually the payment is below the first month's interest, so the loan never amortizes)");
        }
    }
}
