//! Auto loan calculator

use serde::{Deserialize, Serialize};

use super::amortization::{amortize, AmortizationSchedule, LoanTerms};
use crate::error::CalcError;

/// Auto loan inputs
#[derive(Debug, Clone)]
pub struct AutoLoanParams {
    /// Total purchase amount before reductions
    pub loan_amount: f64,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Term in years
    pub term_years: u32,

    pub down_payment: f64,
    pub trade_in_value: f64,

    /// Voluntary extra principal per month
    pub extra_payment: f64,
}

/// Auto loan result: amount financed plus the amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoLoanResult {
    pub amount_financed: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub months: u32,
    pub schedule: AmortizationSchedule,
}

/// Amortize an auto loan after netting out down payment and trade-in
pub fn auto_loan(params: &AutoLoanParams) -> Result<AutoLoanResult, CalcError> {
    let amount_financed = params.loan_amount - params.down_payment - params.trade_in_value;
    if amount_financed <= 0.0 {
        return Err(CalcError::NothingToFinance);
    }

    let schedule = amortize(&LoanTerms {
        principal: amount_financed,
        annual_rate_pct: params.annual_rate_pct,
        term_months: params.term_years * 12,
        extra_payment: params.extra_payment,
    })?;

    Ok(AutoLoanResult {
        amount_financed,
        monthly_payment: schedule.monthly_payment,
        total_interest: schedule.total_interest(),
        months: schedule.months(),
        schedule,
    })
}
