//! Schedule output structures for projections

use serde::{Deserialize, Serialize};

/// Why a schedule stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationCause {
    /// Ran the full horizon
    HorizonExhausted,
    /// Paydown balance reached zero early
    BalanceExhausted,
    /// Balance crossed the target
    TargetReached,
}

/// A single period of projection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRow {
    /// Period index, 1-based
    pub period: u32,

    /// Calendar year of the period, 1-based
    pub year: u32,

    /// Flow applied this period (payment or deposit actually applied)
    pub contribution: f64,

    /// Interest accrued this period
    pub interest: f64,

    /// Running sum of applied flows
    pub cumulative_contributions: f64,

    /// Running sum of accrued interest
    pub cumulative_interest: f64,

    /// End-of-period nominal balance
    pub balance: f64,

    /// Inflation-deflated balance, when an inflation rate was supplied
    pub real_balance: Option<f64>,
}

/// Complete projection result: ordered period rows plus the stop cause.
/// Produced in one pass and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub rows: Vec<PeriodRow>,
    pub termination: TerminationCause,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Balance after the last projected period
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map(|r| r.balance).unwrap_or(0.0)
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.last().map(|r| r.cumulative_interest).unwrap_or(0.0)
    }

    pub fn total_contributions(&self) -> f64 {
        self.rows
            .last()
            .map(|r| r.cumulative_contributions)
            .unwrap_or(0.0)
    }

    /// Summary statistics over the whole schedule
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            periods: self.rows.len() as u32,
            final_balance: self.final_balance(),
            total_interest: self.total_interest(),
            total_contributions: self.total_contributions(),
            termination: self.termination,
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub periods: u32,
    pub final_balance: f64,
    pub total_interest: f64,
    pub total_contributions: f64,
    pub termination: TerminationCause,
}
