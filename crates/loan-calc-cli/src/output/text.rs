use loan_calc_core::LoanSolution;

/// Print the human-readable result lines for a solved request.
pub fn print_text(solution: &LoanSolution) {
    match solution {
        LoanSolution::Principal {
            principal,
            overpayment,
        } => {
            println!("Your loan principal = {}!", principal);
            println!("Overpayment = {}", overpayment);
        }
        LoanSolution::Payment {
            payment,
            overpayment,
        } => {
            println!("Your annuity payment = {}!", payment);
            println!("Overpayment = {}", overpayment);
        }
        LoanSolution::Duration {
            years,
            months,
            overpayment,
        } => {
            println!(
                "It will take {} to repay this loan!",
                duration_phrase(*years, *months)
            );
            println!("Overpayment = {}", overpayment);
        }
        LoanSolution::Schedule {
            payments,
            overpayment,
        } => {
            for line in payments {
                println!("Month {}: payment is {}", line.month, line.amount);
            }
            println!("Overpayment = {}", overpayment);
        }
    }
}

/// Render a duration, omitting zero components: "8 years and 2 months",
/// "2 years", "5 months".
fn duration_phrase(years: u32, months: u32) -> String {
    match (years, months) {
        (0, m) => format!("{} months", m),
        (y, 0) => format!("{} years", y),
        (y, m) => format!("{} years and {} months", y, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duration_phrase_both_components() {
        assert_eq!(duration_phrase(8, 2), "8 years and 2 months");
    }

    #[test]
    fn test_duration_phrase_whole_years() {
        assert_eq!(duration_phrase(2, 0), "2 years");
    }

    #[test]
    fn test_duration_phrase_under_a_year() {
        assert_eq!(duration_phrase(0, 5), "5 months");
    }
}
