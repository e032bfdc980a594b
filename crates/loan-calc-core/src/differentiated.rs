//! Differentiated schedule: constant principal portion plus interest on
//! the outstanding balance, so the total payment declines month by month.

use rust_decimal::Decimal;

use crate::error::LoanCalcError;
use crate::types::{Money, MonthlyPayment, Rate};
use crate::LoanCalcResult;

/// Build the month-by-month differentiated repayment schedule.
///
/// Each month `m` (1-indexed) pays `principal/n` plus interest on the
/// balance outstanding at the start of the month. Every amount is ceiled
/// independently to a whole unit; the overpayment is the sum of the
/// ceiled amounts minus the principal, so it is never negative.
pub fn build_schedule(
    principal: Money,
    periods: u32,
    rate: Rate,
) -> LoanCalcResult<(Vec<MonthlyPayment>, Money)> {
    if periods == 0 {
        return Err(LoanCalcError::InvalidInput {
            field: "periods".into(),
            reason: "Period count must be at least 1".into(),
        });
    }

    let periods_dec = Decimal::from(periods);
    let base = principal / periods_dec;

    let mut payments = Vec::with_capacity(periods as usize);
    let mut total = Decimal::ZERO;

    for month in 1..=periods {
        let repaid = principal * Decimal::from(month - 1) / periods_dec;
        let amount = (base + rate * (principal - repaid)).ceil();
        total += amount;
        payments.push(MonthlyPayment { month, amount });
    }

    Ok((payments, total - principal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::monthly_rate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_schedule_basic() {
        let (payments, overpayment) =
            build_schedule(dec!(500000), 8, monthly_rate(dec!(7.8))).unwrap();

        let amounts: Vec<Decimal> = payments.iter().map(|p| p.amount).collect();
        assert_eq!(
            amounts,
            vec![
                dec!(65750),
                dec!(65344),
                dec!(64938),
                dec!(64532),
                dec!(64125),
                dec!(63719),
                dec!(63313),
                dec!(62907),
            ]
        );
        assert_eq!(overpayment, dec!(14628));
    }

    #[test]
    fn test_schedule_is_strictly_decreasing() {
        let (payments, _) = build_schedule(dec!(500000), 8, monthly_rate(dec!(7.8))).unwrap();
        for pair in payments.windows(2) {
            assert!(pair[0].amount > pair[1].amount);
        }
    }

    #[test]
    fn test_schedule_months_are_one_indexed_and_chronological() {
        let (payments, _) = build_schedule(dec!(1000), 3, monthly_rate(dec!(12))).unwrap();
        let months: Vec<u32> = payments.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_period() {
        // One month: the whole principal plus one month of interest, ceiled.
        let (payments, overpayment) =
            build_schedule(dec!(1000), 1, monthly_rate(dec!(10))).unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].amount, dec!(1009));
        assert_eq!(overpayment, dec!(9));
    }

    #[test]
    fn test_overpayment_never_negative() {
        for periods in [1u32, 2, 5, 12, 36] {
            let (_, overpayment) =
                build_schedule(dec!(12345.67), periods, monthly_rate(dec!(0.1))).unwrap();
            assert!(overpayment >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_zero_periods_rejected() {
        let err = build_schedule(dec!(1000), 0, monthly_rate(dec!(10))).unwrap_err();
        assert!(matches!(err, LoanCalcError::InvalidInput { .. }));
    }
}
