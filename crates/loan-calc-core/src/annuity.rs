//! Annuity solvers: fixed equal monthly payment across all periods.
//!
//! Each solver takes the two known quantities and derives the third,
//! together with the overpayment over the loan's life. Rounding always
//! moves in the lender's favour: principal is truncated down, payment and
//! period count are rounded up. Overpayment is derived from the rounded
//! figure, not the exact real-valued one.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::LoanCalcError;
use crate::types::{monthly_rate, Money, Rate};
use crate::LoanCalcResult;

/// Growth factor (1 + i)^n shared by the principal and payment solvers.
fn compound_factor(rate: Rate, periods: u32) -> Decimal {
    (Decimal::ONE + rate).powd(Decimal::from(periods))
}

/// Annuity coefficient i(1+i)^n / ((1+i)^n - 1).
fn annuity_coefficient(rate: Rate, periods: u32) -> Rate {
    let factor = compound_factor(rate, periods);
    rate * factor / (factor - Decimal::ONE)
}

/// Solve for the loan principal given a fixed monthly payment.
///
/// Returns `(principal, overpayment)`. The principal is floored to a whole
/// unit, the largest amount the given payment fully services.
pub fn solve_principal(payment: Money, periods: u32, rate: Rate) -> LoanCalcResult<(Money, Money)> {
    let principal = (payment / annuity_coefficient(rate, periods)).floor();
    let overpayment = payment * Decimal::from(periods) - principal;
    Ok((principal, overpayment))
}

/// Solve for the fixed monthly payment given the loan principal.
///
/// Returns `(payment, overpayment)`. The payment is ceiled to a whole
/// unit so that integer-currency payments fully repay the loan.
pub fn solve_payment(principal: Money, periods: u32, rate: Rate) -> LoanCalcResult<(Money, Money)> {
    let payment = (principal * annuity_coefficient(rate, periods)).ceil();
    let overpayment = payment * Decimal::from(periods) - principal;
    Ok((payment, overpayment))
}

/// Solve for the number of monthly periods needed to repay `principal`
/// with a fixed monthly `payment`, rounded up to whole months.
///
/// Takes the annual percentage rate, unlike the other solvers: the
/// affordability guard must compare `payment` against `principal / 1200`ths
/// of the annual rate in cross-multiplied form. Dividing down to the
/// monthly rate first truncates, and a payment exactly equal to the first
/// month's interest slips past the guard.
///
/// Returns `(periods, overpayment)`. Fails when the payment does not
/// exceed the first month's interest: the balance would never shrink and
/// the logarithm argument would be non-positive.
pub fn solve_periods(
    principal: Money,
    payment: Money,
    annual_rate_percent: Decimal,
) -> LoanCalcResult<(u32, Money)> {
    // Exact form of payment <= i * principal with i = annual / 1200.
    if payment * dec!(1200) <= annual_rate_percent * principal {
        let first_month_interest = annual_rate_percent * principal / dec!(1200);
        return Err(LoanCalcError::FinancialImpossibility(format!(
            "payment {payment} does not cover the first month's interest \
             {first_month_interest}; the loan can never be repaid"
        )));
    }

    let rate = monthly_rate(annual_rate_percent);
    let first_month_interest = rate * principal;

    // log base (1+i) of payment / (payment - i*principal)
    let ratio = payment / (payment - first_month_interest);
    let exact = ratio.ln() / (Decimal::ONE + rate).ln();
    let periods = exact.ceil().to_u32().ok_or_else(|| LoanCalcError::InvalidInput {
        field: "periods".into(),
        reason: "derived period count is out of range".into(),
    })?;

    let overpayment = payment * Decimal::from(periods) - principal;
    Ok((periods, overpayment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::monthly_rate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_solve_principal_basic() {
        // payment 8722 over 120 months at 5.6% annual
        let (principal, overpayment) =
            solve_principal(dec!(8722), 120, monthly_rate(dec!(5.6))).unwrap();
        assert_eq!(principal, dec!(800018));
        assert_eq!(overpayment, dec!(246622));
    }

    #[test]
    fn test_solve_payment_basic() {
        let (payment, overpayment) =
            solve_payment(dec!(1000000), 60, monthly_rate(dec!(10))).unwrap();
        assert_eq!(payment, dec!(21248));
        assert_eq!(overpayment, dec!(274880));
    }

    #[test]
    fn test_solve_payment_monotone_in_rate() {
        let (at_five, _) = solve_payment(dec!(1000000), 60, monthly_rate(dec!(5))).unwrap();
        let (at_ten, _) = solve_payment(dec!(1000000), 60, monthly_rate(dec!(10))).unwrap();
        assert_eq!(at_five, dec!(18872));
        assert!(at_ten > at_five);
    }

    #[test]
    fn test_solve_periods_basic() {
        let (periods, overpayment) =
            solve_periods(dec!(500000), dec!(23000), dec!(7.8)).unwrap();
        assert_eq!(periods, 24);
        assert_eq!(overpayment, dec!(52000));
    }

    #[test]
    fn test_solve_periods_rounds_up_partial_month() {
        // exact solution is ~97.7 months
        let (periods, overpayment) =
            solve_periods(dec!(1000000), dec!(15000), dec!(10)).unwrap();
        assert_eq!(periods, 98);
        assert_eq!(overpayment, dec!(470000));
    }

    #[test]
    fn test_solve_periods_payment_below_interest() {
        // first month's interest on 120000 at 10% annual is exactly 1000
        let err = solve_periods(dec!(120000), dec!(800), dec!(10)).unwrap_err();
        assert!(matches!(err, LoanCalcError::FinancialImpossibility(_)));
    }

    #[test]
    fn test_solve_periods_payment_equal_to_interest() {
        // The monthly rate 10/1200 does not terminate as a decimal, so the
        // truncated product 120000 * i lands a hair below 1000. The guard
        // must still reject the exact boundary.
        let err = solve_periods(dec!(120000), dec!(1000), dec!(10)).unwrap_err();
        assert!(matches!(err, LoanCalcError::FinancialImpossibility(_)));
    }

    #[test]
    fn test_solve_periods_payment_just_above_interest() {
        let (periods, overpayment) =
            solve_periods(dec!(120000), dec!(2000), dec!(10)).unwrap();
        assert_eq!(periods, 84);
        assert_eq!(overpayment, dec!(48000));
    }

    #[test]
    fn test_floor_then_ceil_favours_lender() {
        // Solving principal from a payment and then re-solving the payment
        // from that principal never undercuts the original payment.
        let rate = monthly_rate(dec!(5.6));
        let (principal, _) = solve_principal(dec!(8722), 120, rate).unwrap();
        let (payment, _) = solve_payment(principal, 120, rate).unwrap();
        assert!(payment >= dec!(8722));
    }
}
