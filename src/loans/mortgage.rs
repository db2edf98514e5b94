//! Mortgage calculator
//!
//! Same amortization core as the auto loan, plus a monthly escrow layer
//! (property tax, insurance, PMI) that is collected with the payment but
//! never amortized.

use serde::{Deserialize, Serialize};

use super::amortization::{amortize, LoanTerms};
use crate::error::CalcError;
use crate::projection::TerminationCause;

/// Mortgage inputs
#[derive(Debug, Clone)]
pub struct MortgageParams {
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Term in years
    pub term_years: u32,

    /// Monthly escrow items
    pub property_tax: f64,
    pub insurance: f64,
    pub pmi: f64,

    /// Voluntary extra principal per month
    pub extra_payment: f64,
}

impl MortgageParams {
    fn monthly_escrow(&self) -> f64 {
        self.property_tax + self.insurance + self.pmi
    }
}

/// One month of a mortgage schedule, escrow included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageRow {
    pub month: u32,

    /// Full outlay: principal + interest + escrow
    pub payment: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub pmi: f64,
    pub total_interest_paid: f64,
    pub remaining_balance: f64,
}

/// Mortgage result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageResult {
    /// Monthly payment including escrow (excludes extra payment)
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub months: u32,
    pub rows: Vec<MortgageRow>,
    pub termination: TerminationCause,
}

/// Amortize a mortgage with escrow collected alongside each payment
pub fn mortgage(params: &MortgageParams) -> Result<MortgageResult, CalcError> {
    let schedule = amortize(&LoanTerms {
        principal: params.principal,
        annual_rate_pct: params.annual_rate_pct,
        term_months: params.term_years * 12,
        extra_payment: params.extra_payment,
    })?;

    let escrow = params.monthly_escrow();
    let rows: Vec<MortgageRow> = schedule
        .rows
        .iter()
        .map(|r| MortgageRow {
            month: r.month,
            payment: r.payment + escrow,
            principal_paid: r.principal_paid,
            interest_paid: r.interest_paid,
            property_tax: params.property_tax,
            insurance: params.insurance,
            pmi: params.pmi,
            total_interest_paid: r.total_interest_paid,
            remaining_balance: r.remaining_balance,
        })
        .collect();

    Ok(MortgageResult {
        monthly_payment: schedule.monthly_payment + escrow,
        total_interest: schedule.total_interest(),
        months: schedule.months(),
        rows,
        termination: schedule.termination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> MortgageParams {
        MortgageParams {
            principal: 300_000.0,
            annual_rate_pct: 6.5,
            term_years: 30,
            property_tax: 250.0,
            insurance: 100.0,
            pmi: 0.0,
            extra_payment: 0.0,
        }
    }

    #[test]
    fn test_escrow_rides_on_top_of_amortization() {
        let result = mortgage(&base_params()).unwrap();
        assert_eq!(result.months, 360);

        let first = &result.rows[0];
        // Escrow is part of the outlay but not the principal/interest split
        assert!((first.payment - (first.principal_paid + first.interest_paid + 350.0)).abs() < 1e-9);
        assert_eq!(result.rows.last().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_escrow_does_not_change_interest() {
        let with_escrow = mortgage(&base_params()).unwrap();
        let without_escrow = mortgage(&MortgageParams {
            property_tax: 0.0,
            insurance: 0.0,
            ..base_params()
        })
        .unwrap();

        assert!((with_escrow.total_interest - without_escrow.total_interest).abs() < 1e-9);
        assert_eq!(with_escrow.months, without_escrow.months);
    }
}
