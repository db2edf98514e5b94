//! Stock growth calculator
//!
//! Two return streams per period: market growth first, then dividends
//! (reinvested into the balance or paid out but still tracked), then the
//! periodic contribution. The dual-rate recurrence keeps its own loop; the
//! shared projector models a single rate.

use serde::{Deserialize, Serialize};

use crate::projection::{Frequency, Horizon, RateConversion};

/// Stock growth inputs
#[derive(Debug, Clone)]
pub struct StockGrowthParams {
    pub initial_investment: f64,

    /// Expected annual price return in percent
    pub annual_rate_pct: f64,

    /// Contribution per period
    pub contribution: f64,
    pub frequency: Frequency,
    pub horizon: Horizon,

    /// Annual dividend yield in percent
    pub dividend_yield_pct: f64,
    pub reinvest_dividends: bool,
}

/// One period of investment detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRow {
    pub period: u32,
    pub year: u32,
    pub total_contributions: f64,
    pub dividends: f64,
    pub growth: f64,
    pub total_dividends: f64,
    pub total_growth: f64,
    pub balance: f64,
}

/// Stock growth result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockGrowthResult {
    pub rows: Vec<StockRow>,
    pub final_balance: f64,
    pub total_growth: f64,
    pub total_dividends: f64,
    pub total_contributions: f64,
}

/// Project investment growth with dividends over the horizon
pub fn stock_growth(params: &StockGrowthParams) -> StockGrowthResult {
    let ppy = params.frequency.periods_per_year();
    let periodic_rate = RateConversion::Nominal.periodic_rate(params.annual_rate_pct, ppy);
    let dividend_rate = RateConversion::Nominal.periodic_rate(params.dividend_yield_pct, ppy);
    let total_periods = params.horizon.periods(ppy);

    let mut balance = params.initial_investment;
    let mut total_contributions = params.initial_investment;
    let mut total_growth = 0.0;
    let mut total_dividends = 0.0;
    let mut rows = Vec::with_capacity(total_periods.min(4096) as usize);

    for period in 1..=total_periods {
        let growth = balance * periodic_rate;
        balance += growth;
        total_growth += growth;

        let dividends = balance * dividend_rate;
        if params.reinvest_dividends {
            balance += dividends;
        }
        total_dividends += dividends;

        balance += params.contribution;
        total_contributions += params.contribution;

        rows.push(StockRow {
            period,
            year: (period + ppy - 1) / ppy,
            total_contributions,
            dividends,
            growth,
            total_dividends,
            total_growth,
            balance,
        });
    }

    StockGrowthResult {
        final_balance: balance,
        total_growth,
        total_dividends,
        total_contributions,
        rows,
    }
}
