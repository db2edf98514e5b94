//! Core recurrence for period-by-period cash-flow projections
//!
//! One engine serves every calculator: savings growth, loan amortization,
//! and goal tracking differ only in contribution timing, flow direction,
//! and stop rule. Each projection is a pure function of its configuration.

use super::params::{ContributionTiming, FlowDirection, ProjectorConfig, StopRule};
use super::schedule::{PeriodRow, Schedule, TerminationCause};

/// Residual below which a paydown balance counts as fully amortized.
/// Half a cent: absorbs the float dust an exact annuity payment leaves at
/// period N without ever forgiving a collectible amount.
const BALANCE_EPSILON: f64 = 0.005;

/// Periodic cash-flow projector
pub struct Projector {
    config: ProjectorConfig,
}

impl Projector {
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    /// Run the projection to its horizon or earlier stop
    pub fn run(&self) -> Schedule {
        let config = &self.config;
        let ppy = config.periods_per_year.max(1);

        let mut balance = config.starting_balance;
        let mut contribution = config.contribution;
        let mut cumulative_interest = 0.0;
        let mut cumulative_contributions = 0.0;

        let mut rows = Vec::with_capacity(config.horizon_periods.min(4096) as usize);
        let mut termination = TerminationCause::HorizonExhausted;

        for period in 1..=config.horizon_periods {
            let (interest, applied) = match config.timing {
                ContributionTiming::BeforeInterest => {
                    let applied = self.apply_flow(&mut balance, contribution);
                    let interest = balance * config.periodic_rate;
                    balance += interest;
                    (interest, applied)
                }
                ContributionTiming::AfterInterest => {
                    let interest = balance * config.periodic_rate;
                    balance += interest;
                    let applied = self.apply_flow(&mut balance, contribution);
                    (interest, applied)
                }
            };

            cumulative_interest += interest;
            cumulative_contributions += applied;

            let mut terminal = false;
            match config.stop {
                StopRule::BalanceExhausted if balance <= BALANCE_EPSILON => {
                    balance = 0.0;
                    termination = TerminationCause::BalanceExhausted;
                    terminal = true;
                }
                StopRule::TargetReached(goal) if balance >= goal => {
                    termination = TerminationCause::TargetReached;
                    terminal = true;
                }
                _ => {}
            }

            rows.push(PeriodRow {
                period,
                year: (period + ppy - 1) / ppy,
                contribution: applied,
                interest,
                cumulative_contributions,
                cumulative_interest,
                balance,
                real_balance: self.real_balance(balance, period),
            });

            if terminal {
                break;
            }

            // Contribution growth steps once per full year of periods
            if period % ppy == 0 {
                contribution *= 1.0 + config.contribution_growth;
            }
        }

        Schedule { rows, termination }
    }

    /// Apply the periodic flow and return the amount actually applied.
    /// Paydowns are capped at the outstanding balance so it never goes
    /// negative.
    fn apply_flow(&self, balance: &mut f64, contribution: f64) -> f64 {
        match self.config.direction {
            FlowDirection::Deposit => {
                *balance += contribution;
                contribution
            }
            FlowDirection::Paydown => {
                let applied = contribution.min(*balance);
                *balance -= applied;
                applied
            }
        }
    }

    /// Deflate a nominal balance by the configured inflation rate.
    /// Month timing follows the period-to-month mapping of the detail tables:
    /// month = (period-1) * 12 / ppy + 1.
    fn real_balance(&self, balance: f64, period: u32) -> Option<f64> {
        let inflation = self.config.inflation?;
        let month = (period - 1) * 12 / self.config.periods_per_year.max(1) + 1;
        Some(balance / (1.0 + inflation).powf(month as f64 / 12.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::annuity::level_payment;

    fn savings_config(rate: f64, contribution: f64, periods: u32) -> ProjectorConfig {
        ProjectorConfig {
            starting_balance: 0.0,
            periodic_rate: rate,
            contribution,
            timing: ContributionTiming::AfterInterest,
            direction: FlowDirection::Deposit,
            periods_per_year: 12,
            horizon_periods: periods,
            ..Default::default()
        }
    }

    #[test]
    fn test_fixed_horizon_runs_all_periods() {
        let schedule = Projector::new(savings_config(0.005, 100.0, 24)).run();
        assert_eq!(schedule.len(), 24);
        assert_eq!(schedule.termination, TerminationCause::HorizonExhausted);
    }

    #[test]
    fn test_cumulative_totals_monotone() {
        let schedule = Projector::new(savings_config(0.004, 250.0, 120)).run();
        for pair in schedule.rows.windows(2) {
            assert!(pair[1].cumulative_interest >= pair[0].cumulative_interest);
            assert!(pair[1].cumulative_contributions >= pair[0].cumulative_contributions);
        }
    }

    #[test]
    fn test_paydown_terminates_at_zero() {
        let rate = 0.06 / 12.0;
        let payment = level_payment(10_000.0, rate, 36).unwrap();
        let config = ProjectorConfig {
            starting_balance: 10_000.0,
            periodic_rate: rate,
            contribution: payment,
            direction: FlowDirection::Paydown,
            stop: StopRule::BalanceExhausted,
            horizon_periods: 36,
            ..Default::default()
        };
        let schedule = Projector::new(config).run();
        assert_eq!(schedule.len(), 36);
        assert_eq!(schedule.termination, TerminationCause::BalanceExhausted);
        assert_eq!(schedule.final_balance(), 0.0);
        // Balance never negative along the way
        assert!(schedule.rows.iter().all(|r| r.balance >= 0.0));
    }

    #[test]
    fn test_extra_payment_shortens_schedule() {
        let rate = 0.06 / 12.0;
        let payment = level_payment(10_000.0, rate, 36).unwrap();
        let config = ProjectorConfig {
            starting_balance: 10_000.0,
            periodic_rate: rate,
            contribution: payment + 100.0,
            direction: FlowDirection::Paydown,
            stop: StopRule::BalanceExhausted,
            horizon_periods: 36,
            ..Default::default()
        };
        let schedule = Projector::new(config).run();
        assert!(schedule.len() < 36);
        assert_eq!(schedule.final_balance(), 0.0);
        // Final payment is clamped to what remains, not the scheduled amount
        let last = schedule.rows.last().unwrap();
        assert!(last.contribution <= payment + 100.0);
    }

    #[test]
    fn test_target_stop() {
        let config = ProjectorConfig {
            stop: StopRule::TargetReached(1_000.0),
            ..savings_config(0.0, 100.0, 120)
        };
        let schedule = Projector::new(config).run();
        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule.termination, TerminationCause::TargetReached);
    }

    #[test]
    fn test_contribution_growth_steps_annually() {
        let config = ProjectorConfig {
            contribution_growth: 0.10,
            ..savings_config(0.0, 100.0, 25)
        };
        let schedule = Projector::new(config).run();
        assert!((schedule.rows[11].contribution - 100.0).abs() < 1e-12);
        assert!((schedule.rows[12].contribution - 110.0).abs() < 1e-12);
        assert!((schedule.rows[24].contribution - 121.0).abs() < 1e-12);
    }

    #[test]
    fn test_timing_order_matters() {
        // One period at 1%: contribute-then-accrue earns interest on the
        // contribution, accrue-then-contribute does not.
        let before = Projector::new(ProjectorConfig {
            starting_balance: 1_000.0,
            periodic_rate: 0.01,
            contribution: 100.0,
            timing: ContributionTiming::BeforeInterest,
            horizon_periods: 1,
            ..Default::default()
        })
        .run();
        let after = Projector::new(ProjectorConfig {
            starting_balance: 1_000.0,
            periodic_rate: 0.01,
            contribution: 100.0,
            timing: ContributionTiming::AfterInterest,
            horizon_periods: 1,
            ..Default::default()
        })
        .run();
        assert!((before.final_balance() - 1_111.0).abs() < 1e-9);
        assert!((after.final_balance() - 1_110.0).abs() < 1e-9);
    }

    #[test]
    fn test_real_balance_deflates() {
        let config = ProjectorConfig {
            inflation: Some(0.03),
            ..savings_config(0.005, 100.0, 24)
        };
        let schedule = Projector::new(config).run();
        for row in &schedule.rows {
            let real = row.real_balance.expect("real balance populated");
            assert!(real < row.balance);
        }
    }
}
