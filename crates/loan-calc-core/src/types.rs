use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Convert a nominal annual percentage rate (10 means 10%) into the
/// monthly fractional rate used by every repayment formula.
pub fn monthly_rate(annual_rate_percent: Decimal) -> Rate {
    annual_rate_percent / dec!(1200)
}

/// Amortisation policy for a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmortisationPolicy {
    /// Fixed equal monthly payment across all periods.
    Annuity,
    /// Constant principal portion plus declining interest portion.
    #[serde(rename = "diff")]
    Differentiated,
}

/// A single loan calculation request.
///
/// For the annuity policy exactly one of `principal`, `payment` and
/// `periods` is left unset and solved for. For the differentiated policy
/// `principal` and `periods` must be set and `payment` must not be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub policy: AmortisationPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<u32>,
    /// Nominal annual interest rate as a percentage (10 means 10%).
    /// Presence is checked during validation, not deserialization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_rate_percent: Option<Rate>,
}

/// One month of a differentiated repayment schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayment {
    /// Month number (1-indexed, chronological).
    pub month: u32,
    pub amount: Money,
}

/// Result of a loan calculation, tagged by the quantity that was solved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoanSolution {
    /// Largest whole-unit principal the given payment fully services.
    Principal { principal: Money, overpayment: Money },
    /// Smallest whole-unit payment that fully repays the principal.
    Payment { payment: Money, overpayment: Money },
    /// Repayment duration, rounded up to whole months.
    Duration {
        years: u32,
        months: u32,
        overpayment: Money,
    },
    /// Full differentiated schedule, one entry per month.
    Schedule {
        payments: Vec<MonthlyPayment>,
        overpayment: Money,
    },
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
