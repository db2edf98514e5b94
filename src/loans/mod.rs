//! Fixed-rate installment loans: amortization core plus instrument wrappers

mod amortization;
mod auto;
mod comparison;
mod mortgage;

pub use amortization::{amortize, AmortizationRow, AmortizationSchedule, LoanTerms};
pub use auto::{auto_loan, AutoLoanParams, AutoLoanResult};
pub use comparison::{
    compare, Comparison, ComparisonParams, LoanSide, SavingsBreakdownRow, SavingsSide,
};
pub use mortgage::{mortgage, MortgageParams, MortgageResult, MortgageRow};
