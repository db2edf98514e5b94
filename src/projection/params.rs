//! Projection parameters: frequency table, rate conversion, and policy knobs

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Compounding / contribution frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    /// Number of periods in a full year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Daily => 365,
            Frequency::Weekly => 52,
            Frequency::BiWeekly => 26,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::Annual => 1,
        }
    }

    /// Look up a frequency by key. Unrecognized keys fall back to monthly.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "bi-weekly" | "biweekly" => Frequency::BiWeekly,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "yearly" | "annually" | "annual" => Frequency::Annual,
            other => {
                log::warn!("unrecognized frequency '{}', defaulting to monthly", other);
                Frequency::Monthly
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annual => "annual",
        }
    }
}

/// How an annual rate is converted to a per-period rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateConversion {
    /// periodic = annual / periods_per_year (loans, retirement planner)
    Nominal,
    /// periodic = (1 + annual)^(1/ppy) - 1 (savings goal, comparison)
    Effective,
}

impl RateConversion {
    /// Convert an annual percentage rate to a per-period decimal rate
    pub fn periodic_rate(&self, annual_rate_pct: f64, periods_per_year: u32) -> f64 {
        let annual = annual_rate_pct / 100.0;
        match self {
            RateConversion::Nominal => annual / periods_per_year as f64,
            RateConversion::Effective => {
                (1.0 + annual).powf(1.0 / periods_per_year as f64) - 1.0
            }
        }
    }
}

/// Projection horizon in calendar or period units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    Periods(u32),
    Months(u32),
    Years(u32),
}

impl Horizon {
    /// Total number of periods at the given frequency
    pub fn periods(&self, periods_per_year: u32) -> u32 {
        match self {
            Horizon::Periods(n) => *n,
            Horizon::Months(m) => m * periods_per_year / 12,
            Horizon::Years(y) => y * periods_per_year,
        }
    }

    /// Horizon length in months (years and months map exactly; periods
    /// require the frequency to convert)
    pub fn months(&self, periods_per_year: u32) -> u32 {
        match self {
            Horizon::Periods(n) => n * 12 / periods_per_year,
            Horizon::Months(m) => *m,
            Horizon::Years(y) => y * 12,
        }
    }
}

impl FromStr for Horizon {
    type Err = CalcError;

    /// Parse duration strings of the form "12 months" or "5 years"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let mut parts = lower.split_whitespace();
        let count: u32 = parts
            .next()
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| CalcError::InvalidDuration(s.to_string()))?;
        let unit = parts
            .next()
            .ok_or_else(|| CalcError::InvalidDuration(s.to_string()))?;
        if parts.next().is_some() {
            return Err(CalcError::InvalidDuration(s.to_string()));
        }
        if unit.starts_with("year") {
            Ok(Horizon::Years(count))
        } else if unit.starts_with("month") {
            Ok(Horizon::Months(count))
        } else if unit.starts_with("period") {
            Ok(Horizon::Periods(count))
        } else {
            Err(CalcError::InvalidDuration(s.to_string()))
        }
    }
}

/// Whether the periodic flow is applied before or after interest accrues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionTiming {
    /// Contribute first, then accrue interest on the new balance
    BeforeInterest,
    /// Accrue interest first, then apply the contribution
    AfterInterest,
}

/// Sign convention for the periodic flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    /// Contribution adds to the balance (savings, investments)
    Deposit,
    /// Contribution reduces the balance (loan payments); the applied amount
    /// is capped at the outstanding balance
    Paydown,
}

/// When a projection stops before its horizon
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopRule {
    /// Run the full horizon
    AtHorizon,
    /// Stop once a paydown balance reaches zero
    BalanceExhausted,
    /// Stop once the balance reaches the target
    TargetReached(f64),
}

/// Configuration for a single projection run
#[derive(Debug, Clone)]
pub struct ProjectorConfig {
    /// Balance at period 0
    pub starting_balance: f64,

    /// Per-period rate as a decimal (may be 0)
    pub periodic_rate: f64,

    /// Periodic flow amount; sign convention set by `direction`
    pub contribution: f64,

    pub timing: ContributionTiming,
    pub direction: FlowDirection,

    /// Periods per year, used for contribution growth and real-balance timing
    pub periods_per_year: u32,

    /// Annual contribution growth as a decimal, applied once every
    /// `periods_per_year` periods
    pub contribution_growth: f64,

    /// Annual inflation as a decimal; populates the real-balance column
    pub inflation: Option<f64>,

    /// Maximum number of periods to project
    pub horizon_periods: u32,

    pub stop: StopRule,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            starting_balance: 0.0,
            periodic_rate: 0.0,
            contribution: 0.0,
            timing: ContributionTiming::AfterInterest,
            direction: FlowDirection::Deposit,
            periods_per_year: 12,
            contribution_growth: 0.0,
            inflation: None,
            horizon_periods: 360,
            stop: StopRule::AtHorizon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table() {
        assert_eq!(Frequency::Daily.periods_per_year(), 365);
        assert_eq!(Frequency::BiWeekly.periods_per_year(), 26);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
    }

    #[test]
    fn test_frequency_fallback_is_monthly() {
        assert_eq!(Frequency::from_key("fortnightly"), Frequency::Monthly);
        assert_eq!(Frequency::from_key(""), Frequency::Monthly);
        assert_eq!(Frequency::from_key("Bi-Weekly"), Frequency::BiWeekly);
    }

    #[test]
    fn test_rate_conversion() {
        // 12% nominal annual -> 1% monthly
        let nominal = RateConversion::Nominal.periodic_rate(12.0, 12);
        assert!((nominal - 0.01).abs() < 1e-12);

        // Effective conversion compounds back to the annual rate
        let effective = RateConversion::Effective.periodic_rate(5.0, 12);
        let annual = (1.0 + effective).powi(12) - 1.0;
        assert!((annual - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_horizon_units() {
        assert_eq!(Horizon::Years(5).periods(12), 60);
        assert_eq!(Horizon::Months(24).periods(12), 24);
        assert_eq!(Horizon::Months(24).periods(26), 52);
        assert_eq!(Horizon::Periods(10).periods(365), 10);
    }

    #[test]
    fn test_duration_parsing() {
        assert_eq!("12 months".parse::<Horizon>().unwrap(), Horizon::Months(12));
        assert_eq!("5 years".parse::<Horizon>().unwrap(), Horizon::Years(5));
        assert_eq!("1 year".parse::<Horizon>().unwrap(), Horizon::Years(1));
        assert!("a while".parse::<Horizon>().is_err());
        assert!("12".parse::<Horizon>().is_err());
        assert!("12 fortnights".parse::<Horizon>().is_err());
    }
}
