//! Retirement savings planner
//!
//! Deflates the nominal return by inflation, goal-seeks the per-period
//! contribution, then projects forward producing both a per-period detail
//! table and a per-year rollup keyed by attained age.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::projection::annuity::{inflation_adjusted_target, required_contribution};
use crate::projection::{
    ContributionTiming, FlowDirection, Frequency, Projector, ProjectorConfig, RateConversion,
    StopRule,
};

/// Retirement planner inputs
#[derive(Debug, Clone)]
pub struct RetirementParams {
    pub current_age: u32,
    pub retirement_age: u32,
    pub target_amount: f64,
    pub current_savings: f64,

    /// Expected annual return in percent
    pub annual_return_pct: f64,

    /// Expected annual inflation in percent
    pub inflation_pct: f64,
    pub frequency: Frequency,
}

/// One contribution period of detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementPeriodRow {
    /// Attained age during this period's year
    pub age: u32,
    pub period: u32,
    pub start_balance: f64,
    pub contribution: f64,
    pub interest_earned: f64,
    pub end_balance: f64,
}

/// One year of rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementYearRow {
    pub age: u32,
    pub start_balance: f64,
    pub total_contributions: f64,
    pub interest_earned: f64,
    pub end_balance: f64,
}

/// Retirement plan: solved contribution plus both tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementPlan {
    /// Contribution per period; negative when current savings already
    /// outgrow the target (surfaced as-is)
    pub required_contribution: f64,
    pub adjusted_target: f64,
    pub final_balance: f64,
    pub periods: Vec<RetirementPeriodRow>,
    pub years: Vec<RetirementYearRow>,
}

/// Solve and project a retirement savings plan
pub fn retirement_plan(params: &RetirementParams) -> Result<RetirementPlan, CalcError> {
    if params.retirement_age <= params.current_age {
        return Err(CalcError::NoYearsToRetirement {
            current_age: params.current_age,
            retirement_age: params.retirement_age,
        });
    }
    let years = params.retirement_age - params.current_age;
    let ppy = params.frequency.periods_per_year();
    let total_periods = years * ppy;

    // Inflation-adjusted annual return: ((1+r)/(1+i)) - 1
    let annual_return = params.annual_return_pct / 100.0;
    let inflation = params.inflation_pct / 100.0;
    let real_annual = if inflation > 0.0 {
        (1.0 + annual_return) / (1.0 + inflation) - 1.0
    } else {
        annual_return
    };
    let periodic_rate = RateConversion::Nominal.periodic_rate(real_annual * 100.0, ppy);

    let adjusted_target =
        inflation_adjusted_target(params.target_amount, inflation, years as f64);
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

    let mut periods = Vec::with_capacity(schedule.len());
    let mut years_rollup: Vec<RetirementYearRow> = Vec::with_capacity(years as usize);
    let mut year_start_balance = params.current_savings;

    for row in &schedule.rows {
        let age = params.current_age + row.year;
        periods.push(RetirementPeriodRow {
            age,
            period: row.period,
            start_balance: row.balance - row.interest - row.contribution,
            contribution: row.contribution,
            interest_earned: row.interest,
            end_balance: row.balance,
        });

        match years_rollup.last_mut() {
            Some(year) if year.age == age => {
                year.total_contributions += row.contribution;
                year.interest_earned += row.interest;
                year.end_balance = row.balance;
            }
            _ => {
                years_rollup.push(RetirementYearRow {
                    age,
                    start_balance: year_start_balance,
                    total_contributions: row.contribution,
                    interest_earned: row.interest,
                    end_balance: row.balance,
                });
            }
        }
        if row.period % ppy == 0 {
            year_start_balance = row.balance;
        }
    }

    Ok(RetirementPlan {
        required_contribution: contribution,
        adjusted_target,
        final_balance: schedule.final_balance(),
        periods,
        years: years_rollup,
    })
}
