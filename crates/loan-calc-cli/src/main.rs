mod output;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use rust_decimal::Decimal;
use std::process;

use loan_calc_core::{calculate, AmortisationPolicy, LoanRequest};

/// Loan repayment calculator
#[derive(Parser)]
#[command(
    name = "loancalc",
    version,
    about = "Loan repayment calculator with decimal precision",
    long_about = "Computes annuity or differentiated repayment figures from a partial \
                  set of loan parameters, solving for whichever of principal, monthly \
                  payment or period count is omitted."
)]
struct Cli {
    /// Payment schedule type
    #[arg(long = "type", value_enum)]
    schedule: ScheduleType,

    /// Fixed monthly payment amount (annuity only)
    #[arg(long)]
    payment: Option<Decimal>,

    /// Loan principal
    #[arg(long)]
    principal: Option<Decimal>,

    /// Number of periods (months)
    #[arg(long)]
    periods: Option<u32>,

    /// Annual interest rate as a percentage (e.g. 10 for 10%)
    #[arg(long)]
    interest: Option<Decimal>,

    /// Output format
    #[arg(long, default_value = "text")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScheduleType {
    Annuity,
    Diff,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<ScheduleType> for AmortisationPolicy {
    fn from(schedule: ScheduleType) -> Self {
        match schedule {
            ScheduleType::Annuity => AmortisationPolicy::Annuity,
            ScheduleType::Diff => AmortisationPolicy::Differentiated,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let request = LoanRequest {
        policy: cli.schedule.into(),
        principal: cli.principal,
        payment: cli.payment,
        periods: cli.periods,
        annual_rate_percent: cli.interest,
    };

    match calculate(&request) {
        Ok(result) => {
            output::format_output(&cli.output, &result);
            process::exit(0);
        }
        Err(e) => {
            // Contract with callers: a single literal line on stdout,
            // diagnostics on stderr.
            println!("Incorrect parameters");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
