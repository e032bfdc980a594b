//! Request validation and dispatch.
//!
//! A [`LoanRequest`] is resolved once, up front, into a typed calculation
//! plan: either the request names exactly the quantities its policy needs
//! and the missing one is solved for, or the whole request is rejected
//! before any arithmetic runs. No partial results are ever produced.

use std::time::Instant;

use rust_decimal::Decimal;

use crate::annuity;
use crate::differentiated;
use crate::error::LoanCalcError;
use crate::types::{
    monthly_rate, with_metadata, AmortisationPolicy, ComputationOutput, LoanRequest, LoanSolution,
    Money, Rate,
};
use crate::LoanCalcResult;

/// The single calculation a validated request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CalculationPlan {
    AnnuityPrincipal { payment: Money, periods: u32 },
    AnnuityPayment { principal: Money, periods: u32 },
    AnnuityPeriods { principal: Money, payment: Money },
    Differentiated { principal: Money, periods: u32 },
}

fn invalid(field: &str, reason: &str) -> LoanCalcError {
    LoanCalcError::InvalidInput {
        field: field.into(),
        reason: reason.into(),
    }
}

fn require_positive(field: &str, value: Option<Decimal>) -> LoanCalcResult<()> {
    match value {
        Some(v) if v <= Decimal::ZERO => {
            Err(invalid(field, "must be strictly positive when supplied"))
        }
        _ => Ok(()),
    }
}

/// Resolve a request into its calculation plan, rejecting it if any
/// precondition fails. Returns the plan plus the annual percentage rate.
fn classify(request: &LoanRequest) -> LoanCalcResult<(CalculationPlan, Rate)> {
    let annual = request
        .annual_rate_percent
        .ok_or_else(|| invalid("annual_rate_percent", "interest rate is required"))?;
    if annual <= Decimal::ZERO {
        return Err(invalid(
            "annual_rate_percent",
            "interest rate must be strictly positive",
        ));
    }

    require_positive("payment", request.payment)?;
    require_positive("principal", request.principal)?;
    if request.periods == Some(0) {
        return Err(invalid("periods", "must be strictly positive when supplied"));
    }

    let plan = match request.policy {
        AmortisationPolicy::Differentiated => {
            if request.payment.is_some() {
                return Err(invalid(
                    "payment",
                    "a differentiated schedule derives each month's payment; \
                     it cannot be supplied",
                ));
            }
            match (request.principal, request.periods) {
                (Some(principal), Some(periods)) => CalculationPlan::Differentiated {
                    principal,
                    periods,
                },
                _ => {
                    return Err(invalid(
                        "request",
                        "a differentiated schedule requires both principal and periods",
                    ))
                }
            }
        }
        AmortisationPolicy::Annuity => match (request.principal, request.payment, request.periods)
        {
            (None, Some(payment), Some(periods)) => {
                CalculationPlan::AnnuityPrincipal { payment, periods }
            }
            (Some(principal), None, Some(periods)) => {
                CalculationPlan::AnnuityPayment { principal, periods }
            }
            (Some(principal), Some(payment), None) => {
                CalculationPlan::AnnuityPeriods { principal, payment }
            }
            _ => {
                return Err(invalid(
                    "request",
                    "exactly one of principal, payment and periods must be left unset",
                ))
            }
        },
    };

    Ok((plan, annual))
}

/// Check every precondition of a request without computing anything.
pub fn validate(request: &LoanRequest) -> LoanCalcResult<()> {
    classify(request).map(|_| ())
}

/// Validate a request, run the calculation it describes and wrap the
/// solution in the standard output envelope.
pub fn calculate(request: &LoanRequest) -> LoanCalcResult<ComputationOutput<LoanSolution>> {
    let start = Instant::now();
    let (plan, annual) = classify(request)?;
    let rate = monthly_rate(annual);

    let (methodology, solution) = match plan {
        CalculationPlan::AnnuityPrincipal { payment, periods } => {
            let (principal, overpayment) = annuity::solve_principal(payment, periods, rate)?;
            (
                "annuity_solve_principal",
                LoanSolution::Principal {
                    principal,
                    overpayment,
                },
            )
        }
        CalculationPlan::AnnuityPayment { principal, periods } => {
            let (payment, overpayment) = annuity::solve_payment(principal, periods, rate)?;
            (
                "annuity_solve_payment",
                LoanSolution::Payment {
                    payment,
                    overpayment,
                },
            )
        }
        CalculationPlan::AnnuityPeriods { principal, payment } => {
            // The periods solver takes the annual figure: its affordability
            // guard compares in cross-multiplied form before the lossy
            // monthly-rate conversion.
            let (periods, overpayment) = annuity::solve_periods(principal, payment, annual)?;
            (
                "annuity_solve_periods",
                LoanSolution::Duration {
                    years: periods / 12,
                    months: periods % 12,
                    overpayment,
                },
            )
        }
        CalculationPlan::Differentiated { principal, periods } => {
            let (payments, overpayment) =
                differentiated::build_schedule(principal, periods, rate)?;
            (
                "differentiated_schedule",
                LoanSolution::Schedule {
                    payments,
                    overpayment,
                },
            )
        }
    };

    let elapsed_us = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        methodology,
        request,
        Vec::new(),
        elapsed_us,
        solution,
    ))
}
