pub mod json;
pub mod text;

use crate::OutputFormat;
use loan_calc_core::{ComputationOutput, LoanSolution};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, output: &ComputationOutput<LoanSolution>) {
    match format {
        OutputFormat::Text => text::print_text(&output.result),
        OutputFormat::Json => json::print_json(output),
    }
}
