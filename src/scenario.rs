//! Scenario runner for batch projections
//!
//! Every projection is a pure function of its configuration, so batches run
//! in parallel with no shared state. Results come back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::projection::{Projector, ProjectorConfig, RateConversion, Schedule};

/// Run a batch of independent projections in parallel
pub fn run_batch(configs: &[ProjectorConfig]) -> Vec<Schedule> {
    configs
        .par_iter()
        .map(|config| Projector::new(config.clone()).run())
        .collect()
}

/// Outcome of one rate in a sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateOutcome {
    pub annual_rate_pct: f64,
    pub final_balance: f64,
    pub total_interest: f64,
    pub periods: u32,
}

/// Project one plan across candidate annual rates, in parallel.
/// Outcomes are returned in the order the rates were given.
pub fn sweep_rates(
    base: &ProjectorConfig,
    conversion: RateConversion,
    annual_rates_pct: &[f64],
) -> Vec<RateOutcome> {
    annual_rates_pct
        .par_iter()
        .map(|&rate_pct| {
            let config = ProjectorConfig {
                periodic_rate: conversion.periodic_rate(rate_pct, base.periods_per_year),
                ..base.clone()
            };
            let schedule = Projector::new(config).run();
            RateOutcome {
                annual_rate_pct: rate_pct,
                final_balance: schedule.final_balance(),
                total_interest: schedule.total_interest(),
                periods: schedule.len() as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ContributionTiming, FlowDirection, StopRule};

    fn base_config() -> ProjectorConfig {
        ProjectorConfig {
            starting_balance: 1_000.0,
            contribution: 100.0,
            timing: ContributionTiming::AfterInterest,
            direction: FlowDirection::Deposit,
            periods_per_year: 12,
            horizon_periods: 120,
            stop: StopRule::AtHorizon,
            ..Default::default()
        }
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let configs: Vec<ProjectorConfig> = [12, 24, 36]
            .iter()
            .map(|&n| ProjectorConfig {
                horizon_periods: n,
                ..base_config()
            })
            .collect();

        let results = run_batch(&configs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].len(), 12);
        assert_eq!(results[1].len(), 24);
        assert_eq!(results[2].len(), 36);
    }

    #[test]
    fn test_higher_rate_grows_more() {
        let outcomes = sweep_rates(&base_config(), RateConversion::Nominal, &[3.0, 5.0, 7.0]);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].annual_rate_pct, 3.0);
        assert!(outcomes[2].final_balance > outcomes[0].final_balance);
        assert!(outcomes[2].total_interest > outcomes[0].total_interest);
    }
}
