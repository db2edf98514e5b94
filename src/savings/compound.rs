//! Compound interest calculator
//!
//! Contributions land at the start of each period and earn interest
//! immediately. Supports an annual contribution increase and an optional
//! inflation-adjusted real-balance column.

use serde::{Deserialize, Serialize};

use crate::projection::{
    ContributionTiming, FlowDirection, Frequency, Horizon, Projector, ProjectorConfig,
    RateConversion, StopRule,
};

/// Compound interest inputs
#[derive(Debug, Clone)]
pub struct CompoundParams {
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Contribution per period
    pub contribution: f64,
    pub frequency: Frequency,
    pub horizon: Horizon,

    /// Annual contribution increase in percent
    pub annual_increase_pct: f64,

    /// Annual inflation in percent; 0 disables the real-balance column
    pub inflation_pct: f64,
}

/// One period of growth detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundRow {
    pub period: u32,
    pub month: u32,
    pub year: u32,

    /// Principal plus all contributions to date
    pub total_contributions: f64,
    pub interest: f64,
    pub total_interest: f64,
    pub balance: f64,
    pub real_balance: Option<f64>,
}

/// Compound growth result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundResult {
    pub rows: Vec<CompoundRow>,
    pub final_balance: f64,
    pub total_interest: f64,
    pub total_contributions: f64,
}

/// Project compound growth over the horizon
pub fn compound_interest(params: &CompoundParams) -> CompoundResult {
    let ppy = params.frequency.periods_per_year();
    let inflation = params.inflation_pct / 100.0;

    let config = ProjectorConfig {
        starting_balance: params.principal,
        periodic_rate: RateConversion::Nominal.periodic_rate(params.annual_rate_pct, ppy),
        contribution: params.contribution,
        timing: ContributionTiming::BeforeInterest,
        direction: FlowDirection::Deposit,
        periods_per_year: ppy,
        contribution_growth: params.annual_increase_pct / 100.0,
        inflation: (inflation > 0.0).then_some(inflation),
        horizon_periods: params.horizon.periods(ppy),
        stop: StopRule::AtHorizon,
    };
    let schedule = Projector::new(config).run();

    let rows: Vec<CompoundRow> = schedule
        .rows
        .iter()
        .map(|r| {
            let month = (r.period - 1) * 12 / ppy + 1;
            CompoundRow {
                period: r.period,
                month,
                year: (month - 1) / 12 + 1,
                total_contributions: params.principal + r.cumulative_contributions,
                interest: r.interest,
                total_interest: r.cumulative_interest,
                balance: r.balance,
                real_balance: r.real_balance,
            }
        })
        .collect();

    CompoundResult {
        final_balance: schedule.final_balance(),
        total_interest: schedule.total_interest(),
        total_contributions: params.principal + schedule.total_contributions(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_year_monthly_compounding() {
        // $1000 at 12% nominal, no contributions: 1% monthly for 12 periods
        let result = compound_interest(&CompoundParams {
            principal: 1_000.0,
            annual_rate_pct: 12.0,
            contribution: 0.0,
            frequency: Frequency::Monthly,
            horizon: Horizon::Years(1),
            annual_increase_pct: 0.0,
            inflation_pct: 0.0,
        });

        assert_eq!(result.rows.len(), 12);
        assert_relative_eq!(result.final_balance, 1_000.0 * 1.01_f64.powi(12), epsilon = 1e-9);
        assert!(result.rows[0].real_balance.is_none());
    }

    #[test]
    fn test_contribution_earns_interest_same_period() {
        let result = compound_interest(&CompoundParams {
            principal: 0.0,
            annual_rate_pct: 12.0,
            contribution: 100.0,
            frequency: Frequency::Monthly,
            horizon: Horizon::Periods(1),
            annual_increase_pct: 0.0,
            inflation_pct: 0.0,
        });
        // 100 deposited, then 1% on the new balance
        assert_relative_eq!(result.final_balance, 101.0, epsilon = 1e-12);
    }

    #[test]
    fn test_month_and_year_columns_for_weekly_frequency() {
        let result = compound_interest(&CompoundParams {
            principal: 100.0,
            annual_rate_pct: 5.0,
            contribution: 10.0,
            frequency: Frequency::Weekly,
            horizon: Horizon::Years(2),
            annual_increase_pct: 0.0,
            inflation_pct: 0.0,
        });

        assert_eq!(result.rows.len(), 104);
        assert_eq!(result.rows[0].month, 1);
        assert_eq!(result.rows[0].year, 1);
        assert_eq!(result.rows[103].year, 2);
    }

    #[test]
    fn test_annual_increase_raises_later_contributions() {
        let result = compound_interest(&CompoundParams {
            principal: 0.0,
            annual_rate_pct: 0.0,
            contribution: 100.0,
            frequency: Frequency::Monthly,
            horizon: Horizon::Years(2),
            annual_increase_pct: 10.0,
            inflation_pct: 0.0,
        });

        // Year 1: 12 * 100, year 2: 12 * 110
        assert_relative_eq!(result.total_contributions, 1_200.0 + 1_320.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inflation_populates_real_balance() {
        let result = compound_interest(&CompoundParams {
            principal: 1_000.0,
            annual_rate_pct: 5.0,
            contribution: 0.0,
            frequency: Frequency::Monthly,
            horizon: Horizon::Years(1),
            annual_increase_pct: 0.0,
            inflation_pct: 3.0,
        });

        let last = result.rows.last().unwrap();
        let real = last.real_balance.unwrap();
        assert!(real < last.balance);
        assert_relative_eq!(real, last.balance / 1.03, epsilon = 1e-9);
    }
}
