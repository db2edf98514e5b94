//! Emergency fund planner
//!
//! No interest: the fund sits in cash. Contributions at any frequency are
//! normalized to a monthly accrual and the schedule runs month by month
//! until the coverage target is met.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::projection::Frequency;

/// Emergency fund inputs
#[derive(Debug, Clone)]
pub struct EmergencyFundParams {
    pub monthly_expenses: f64,

    /// Months of expenses the fund should cover
    pub coverage_months: u32,
    pub current_savings: f64,

    /// Contribution per period at `frequency`
    pub contribution: f64,
    pub frequency: Frequency,
}

/// One month of progress toward the target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyRow {
    pub month: u32,
    pub savings_balance: f64,
    pub target_fund: f64,
    pub remaining_amount: f64,
}

/// Emergency fund plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundPlan {
    pub target_fund: f64,
    pub months_needed: u32,
    pub rows: Vec<EmergencyRow>,
}

/// Build the month-by-month savings plan for the coverage target
pub fn emergency_fund(params: &EmergencyFundParams) -> Result<EmergencyFundPlan, CalcError> {
    let target_fund = params.monthly_expenses * params.coverage_months as f64;

    // Per-period contribution normalized to a monthly accrual
    let ppy = params.frequency.periods_per_year();
    let monthly_accrual = params.contribution * ppy as f64 / 12.0;

    let mut balance = params.current_savings;
    if balance < target_fund && monthly_accrual <= 0.0 {
        return Err(CalcError::UnfundedTarget {
            contribution: params.contribution,
            target: target_fund,
        });
    }

    let mut rows = Vec::new();
    let mut month = 0;
    while balance < target_fund {
        month += 1;
        balance += monthly_accrual;
        rows.push(EmergencyRow {
            month,
            savings_balance: balance,
            target_fund,
            remaining_amount: (target_fund - balance).max(0.0),
        });
    }

    Ok(EmergencyFundPlan {
        target_fund,
        months_needed: month,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_contributions_reach_target() {
        let plan = emergency_fund(&EmergencyFundParams {
            monthly_expenses: 2_000.0,
            coverage_months: 6,
            current_savings: 0.0,
            contribution: 500.0,
            frequency: Frequency::Monthly,
        })
        .unwrap();

        assert_eq!(plan.target_fund, 12_000.0);
        assert_eq!(plan.months_needed, 24);
        assert_eq!(plan.rows.last().unwrap().remaining_amount, 0.0);
    }

    #[test]
    fn test_weekly_contributions_accrue_faster_than_monthly_same_amount() {
        let weekly = emergency_fund(&EmergencyFundParams {
            monthly_expenses: 1_000.0,
            coverage_months: 3,
            current_savings: 0.0,
            contribution: 100.0,
            frequency: Frequency::Weekly,
        })
        .unwrap();
        let monthly = emergency_fund(&EmergencyFundParams {
            monthly_expenses: 1_000.0,
            coverage_months: 3,
            current_savings: 0.0,
            contribution: 100.0,
            frequency: Frequency::Monthly,
        })
        .unwrap();

        assert!(weekly.months_needed < monthly.months_needed);
    }

    #[test]
    fn test_already_funded_plan_is_empty() {
        let plan = emergency_fund(&EmergencyFundParams {
            monthly_expenses: 1_000.0,
            coverage_months: 3,
            current_savings: 5_000.0,
            contribution: 100.0,
            frequency: Frequency::Monthly,
        })
        .unwrap();

        assert_eq!(plan.months_needed, 0);
        assert!(plan.rows.is_empty());
    }

    #[test]
    fn test_zero_contribution_with_unmet_target_is_an_error() {
        let result = emergency_fund(&EmergencyFundParams {
            monthly_expenses: 1_000.0,
            coverage_months: 3,
            current_savings: 0.0,
            contribution: 0.0,
            frequency: Frequency::Monthly,
        });
        assert!(matches!(result, Err(CalcError::UnfundedTarget { .. })));
    }
}
