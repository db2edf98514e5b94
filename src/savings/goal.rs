//! Savings goal planner
//!
//! Solves the future-value-of-annuity equation for the contribution needed
//! to reach an inflation-adjusted target, then projects the trajectory
//! forward as a cross-check and progress table.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::projection::annuity::{inflation_adjusted_target, required_contribution};
use crate::projection::{
    ContributionTiming, FlowDirection, Frequency, Horizon, Projector, ProjectorConfig,
    RateConversion, StopRule,
};

/// Savings goal inputs
#[derive(Debug, Clone)]
pub struct SavingsGoalParams {
    pub target_amount: f64,
    pub current_savings: f64,
    pub horizon: Horizon,

    /// Expected annual return in percent
    pub return_rate_pct: f64,

    /// Expected annual inflation in percent
    pub inflation_pct: f64,
    pub frequency: Frequency,
}

/// One period of goal progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRow {
    pub period: u32,
    pub year: u32,
    pub contribution: f64,
    pub interest_earned: f64,
    pub end_balance: f64,
}

/// Savings goal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoalPlan {
    /// Contribution per period solving the annuity equation.
    /// Negative when uncontributed growth already overshoots the target;
    /// surfaced as-is.
    pub required_contribution: f64,

    /// Target expressed in today's dollars
    pub adjusted_target: f64,
    pub final_balance: f64,
    pub rows: Vec<GoalRow>,
}

/// Solve for the required contribution and project the savings trajectory
pub fn savings_goal(params: &SavingsGoalParams) -> Result<SavingsGoalPlan, CalcError> {
    let ppy = params.frequency.periods_per_year();
    let total_months = params.horizon.months(ppy);
    let total_periods = params.horizon.periods(ppy);

    let adjusted_target = inflation_adjusted_target(
        params.target_amount,
        params.inflation_pct / 100.0,
        total_months as f64 / 12.0,
    );
    let periodic_rate = RateConversion::Effective.periodic_rate(params.return_rate_pct, ppy);
    let contribution =
        required_contribution(adjusted_target, params.current_savings, periodic_rate, total_periods)?;

    let schedule = Projector::new(ProjectorConfig {
        starting_balance: params.current_savings,
        periodic_rate,
        contribution,
        timing: ContributionTiming::AfterInterest,
        direction: FlowDirection::Deposit,
        periods_per_year: ppy,
        horizon_periods: total_periods,
        stop: StopRule::AtHorizon,
        ..Default::default()
    })
    .run();

    let rows = schedule
        .rows
        .iter()
        .map(|r| GoalRow {
            period: r.period,
            year: r.year,
            contribution: r.contribution,
            interest_earned: r.interest,
            end_balance: r.balance,
        })
        .collect();

    Ok(SavingsGoalPlan {
        required_contribution: contribution,
        adjusted_target,
        final_balance: schedule.final_balance(),
        rows,
    })
}
