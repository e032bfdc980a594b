pub mod annuity;
pub mod calculator;
pub mod differentiated;
pub mod error;
pub mod types;

pub use calculator::{calculate, validate};
pub use error::LoanCalcError;
pub use types::*;

/// Standard result type for all loan-calc operations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;
