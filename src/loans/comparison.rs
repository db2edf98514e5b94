//! Finance-or-save comparison
//!
//! Prices one expense two ways: borrow today (closed-form loan cost) or save
//! up first (goal-seek the contribution, then project the trajectory).

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::projection::annuity::{inflation_adjusted_target, level_payment, required_contribution};
use crate::projection::{
    ContributionTiming, FlowDirection, Frequency, Projector, ProjectorConfig, RateConversion,
    StopRule,
};

/// Comparison inputs
#[derive(Debug, Clone)]
pub struct ComparisonParams {
    /// Cost of the expense if paid today
    pub expense_amount: f64,
    pub current_savings: f64,

    /// Loan side: annual rate in percent and term in years
    pub loan_rate_pct: f64,
    pub loan_term_years: u32,

    /// Savings side: expected annual return and inflation, both percent
    pub return_rate_pct: f64,
    pub inflation_pct: f64,

    /// How long the purchase can wait
    pub savings_term_months: u32,
    pub frequency: Frequency,
}

/// Borrow-today outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSide {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_cost: f64,
}

/// Save-first outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsSide {
    /// May be negative when growth alone covers the goal
    pub required_contribution: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

/// One period of the save-first trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsBreakdownRow {
    pub period: u32,

    /// Elapsed time as "1y 3m" / "8m"
    pub elapsed: String,
    pub contribution: f64,
    pub interest_earned: f64,
    pub savings_balance: f64,
}

/// Full comparison result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub loan: LoanSide,
    pub savings: SavingsSide,
    pub breakdown: Vec<SavingsBreakdownRow>,
}

impl Comparison {
    /// True when saving first ends up cheaper than the loan's total cost
    pub fn saving_is_cheaper(&self) -> bool {
        self.savings.required_contribution * self.breakdown.len() as f64
            <= self.loan.total_cost
    }
}

/// Run both scenarios and assemble the comparison
pub fn compare(params: &ComparisonParams) -> Result<Comparison, CalcError> {
    // Loan side: closed-form level payment
    let term_months = params.loan_term_years * 12;
    let monthly_payment =
        level_payment(params.expense_amount, params.loan_rate_pct / 100.0 / 12.0, term_months)?;
    let total_cost = monthly_payment * term_months as f64;
    let loan = LoanSide {
        monthly_payment,
        total_interest: total_cost - params.expense_amount,
        total_cost,
    };

    // Savings side: inflation-adjusted goal, effective periodic rate
    let ppy = params.frequency.periods_per_year();
    let periods = params.savings_term_months * ppy / 12;
    let goal = inflation_adjusted_target(
        params.expense_amount,
        params.inflation_pct / 100.0,
        params.savings_term_months as f64 / 12.0,
    );
    let periodic_rate = RateConversion::Effective.periodic_rate(params.return_rate_pct, ppy);
    let contribution =
        required_contribution(goal, params.current_savings, periodic_rate, periods)?;

    let schedule = Projector::new(ProjectorConfig {
        starting_balance: params.current_savings,
        periodic_rate,
        contribution,
        timing: ContributionTiming::AfterInterest,
        direction: FlowDirection::Deposit,
        periods_per_year: ppy,
        horizon_periods: periods,
        stop: StopRule::AtHorizon,
        ..Default::default()
    })
    .run();

    let breakdown = schedule
        .rows
        .iter()
        .map(|r| SavingsBreakdownRow {
            period: r.period,
            elapsed: elapsed_label(r.period, ppy),
            contribution: r.contribution,
            interest_earned: r.interest,
            savings_balance: r.balance,
        })
        .collect();

    let savings = SavingsSide {
        required_contribution: contribution,
        total_interest: schedule.total_interest(),
        final_balance: schedule.final_balance(),
    };

    Ok(Comparison {
        loan,
        savings,
        breakdown,
    })
}

fn elapsed_label(period: u32, periods_per_year: u32) -> String {
    let months = period * 12 / periods_per_year;
    let years = months / 12;
    let rem = months % 12;
    if years > 0 {
        format!("{}y {}m", years, rem)
    } else {
        format!("{}m", rem)
    }
}
