//! Shared amortization core for fixed-rate installment loans
//!
//! Computes the level payment from the annuity formula and drives the
//! projector in paydown mode. Principal/interest splits are derived from the
//! projector rows; the final payment is clamped to the remaining balance
//! plus interest rather than the scheduled amount.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::projection::annuity::level_payment;
use crate::projection::{
    ContributionTiming, FlowDirection, Projector, ProjectorConfig, StopRule, TerminationCause,
};

/// Terms of a fixed-rate monthly installment loan
#[derive(Debug, Clone)]
pub struct LoanTerms {
    /// Amount financed
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Term in months
    pub term_months: u32,

    /// Voluntary extra principal per month
    pub extra_payment: f64,
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub total_interest_paid: f64,
    pub remaining_balance: f64,
}

/// Full amortization result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Scheduled monthly installment from the annuity formula
    /// (excludes any extra payment)
    pub monthly_payment: f64,
    pub rows: Vec<AmortizationRow>,
    pub termination: TerminationCause,
}

impl AmortizationSchedule {
    pub fn months(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.last().map(|r| r.total_interest_paid).unwrap_or(0.0)
    }

    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }
}

/// Amortize a loan month by month until payoff or end of term
pub fn amortize(terms: &LoanTerms) -> Result<AmortizationSchedule, CalcError> {
    let monthly_rate = terms.annual_rate_pct / 100.0 / 12.0;
    let monthly_payment = level_payment(terms.principal, monthly_rate, terms.term_months)?;

    let config = ProjectorConfig {
        starting_balance: terms.principal,
        periodic_rate: monthly_rate,
        contribution: monthly_payment + terms.extra_payment,
        timing: ContributionTiming::AfterInterest,
        direction: FlowDirection::Paydown,
        periods_per_year: 12,
        horizon_periods: terms.term_months,
        stop: StopRule::BalanceExhausted,
        ..Default::default()
    };
    let schedule = Projector::new(config).run();

    let rows = schedule
        .rows
        .iter()
        .map(|r| AmortizationRow {
            month: r.period,
            payment: r.contribution,
            principal_paid: r.contribution - r.interest,
            interest_paid: r.interest,
            total_interest_paid: r.cumulative_interest,
            remaining_balance: r.balance,
        })
        .collect();

    Ok(AmortizationSchedule {
        monthly_payment,
        rows,
        termination: schedule.termination,
    })
}
