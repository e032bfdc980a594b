use loan_calc_core::{ComputationOutput, LoanSolution};

/// Pretty-print the full computation envelope as JSON to stdout.
pub fn print_json(output: &ComputationOutput<LoanSolution>) {
    match serde_json::to_string_pretty(output) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
