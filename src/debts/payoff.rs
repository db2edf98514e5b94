//! Debt payoff engine: snowball and avalanche ordering with a shared
//! extra-payment pool
//!
//! Each month every unpaid debt accrues interest at its own monthly rate and
//! pays min(minimum, remaining balance + interest); the extra pool is then
//! applied to debts in priority order until exhausted. The plan terminates
//! when all balances reach zero.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::debt::Debt;
use crate::error::CalcError;

/// Hard backstop against plans that cannot amortize
const DEFAULT_MAX_MONTHS: u32 = 1_200;

/// Priority ordering for the extra-payment pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffStrategy {
    /// Smallest balance first
    Snowball,
    /// Highest rate first
    Avalanche,
}

impl PayoffStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffStrategy::Snowball => "snowball",
            PayoffStrategy::Avalanche => "avalanche",
        }
    }
}

impl FromStr for PayoffStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "snowball" => Ok(PayoffStrategy::Snowball),
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            other => Err(format!(
                "unknown payoff strategy '{}': expected snowball or avalanche",
                other
            )),
        }
    }
}

/// Payoff run configuration
#[derive(Debug, Clone)]
pub struct PayoffConfig {
    pub strategy: PayoffStrategy,

    /// Shared extra payment per month, applied in priority order
    pub extra_payment: f64,

    /// Month cap; exceeded means the plan does not terminate
    pub max_months: u32,
}

impl PayoffConfig {
    pub fn new(strategy: PayoffStrategy, extra_payment: f64) -> Self {
        Self {
            strategy,
            extra_payment,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

/// Per-debt state within one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtSnapshot {
    pub name: String,
    pub payment: f64,
    pub interest: f64,
    pub balance: f64,
}

/// One month of the payoff schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffMonth {
    pub month: u32,
    pub total_payment: f64,
    pub cumulative_interest: f64,

    /// Snapshots in priority order, one per debt (paid-off debts stay with
    /// zero payment and balance)
    pub debts: Vec<DebtSnapshot>,
}

/// Complete payoff result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffResult {
    pub strategy: PayoffStrategy,

    /// Debt names in priority order
    pub order: Vec<String>,
    pub months: Vec<PayoffMonth>,
    pub total_interest: f64,
    pub total_paid: f64,
}

impl PayoffResult {
    pub fn months_to_debt_free(&self) -> u32 {
        self.months.len() as u32
    }
}

/// Run the payoff plan to completion
pub fn payoff_plan(debts: &[Debt], config: &PayoffConfig) -> Result<PayoffResult, CalcError> {
    if debts.is_empty() {
        return Err(CalcError::NoDebts);
    }

    let mut ordered: Vec<Debt> = debts.to_vec();
    match config.strategy {
        PayoffStrategy::Snowball => {
            ordered.sort_by(|a, b| a.balance.total_cmp(&b.balance));
        }
        PayoffStrategy::Avalanche => {
            ordered.sort_by(|a, b| b.annual_rate_pct.total_cmp(&a.annual_rate_pct));
        }
    }

    // With no pool relief, a minimum that never covers its own interest can
    // never amortize; fail up front instead of looping to the cap.
    if config.extra_payment <= 0.0 {
        for debt in &ordered {
            let first_interest = debt.balance * debt.monthly_rate();
            if debt.balance > 0.0 && debt.min_payment <= first_interest {
                return Err(CalcError::NonAmortizingDebt {
                    name: debt.name.clone(),
                    min_payment: debt.min_payment,
                    interest: first_interest,
                });
            }
        }
    }

    let order: Vec<String> = ordered.iter().map(|d| d.name.clone()).collect();
    let mut balances: Vec<f64> = ordered.iter().map(|d| d.balance).collect();
    let mut months = Vec::new();
    let mut total_interest = 0.0;
    let mut total_paid = 0.0;
    let mut month = 0;

    while balances.iter().any(|&b| b > 0.0) {
        month += 1;
        if month > config.max_months {
            return Err(CalcError::PayoffCapExceeded(config.max_months));
        }

        let mut snapshots: Vec<DebtSnapshot> = Vec::with_capacity(ordered.len());
        let mut month_payment = 0.0;

        // Minimum payments: interest accrues, then min(minimum, amount owed)
        for (debt, balance) in ordered.iter().zip(balances.iter_mut()) {
            if *balance <= 0.0 {
                snapshots.push(DebtSnapshot {
                    name: debt.name.clone(),
                    payment: 0.0,
                    interest: 0.0,
                    balance: 0.0,
                });
                continue;
            }

            let interest = *balance * debt.monthly_rate();
            let owed = *balance + interest;
            let payment = debt.min_payment.min(owed);
            *balance = owed - payment;

            total_interest += interest;
            month_payment += payment;
            snapshots.push(DebtSnapshot {
                name: debt.name.clone(),
                payment,
                interest,
                balance: *balance,
            });
        }

        // Extra pool sweeps remaining balances in priority order
        let mut pool = config.extra_payment;
        for (snapshot, balance) in snapshots.iter_mut().zip(balances.iter_mut()) {
            if pool <= 0.0 {
                break;
            }
            if *balance <= 0.0 {
                continue;
            }
            let applied = pool.min(*balance);
            *balance -= applied;
            pool -= applied;
            snapshot.payment += applied;
            snapshot.balance = *balance;
            month_payment += applied;
        }

        total_paid += month_payment;
        months.push(PayoffMonth {
            month,
            total_payment: month_payment,
            cumulative_interest: total_interest,
            debts: snapshots,
        });
    }

    Ok(PayoffResult {
        strategy: config.strategy,
        order,
        months,
        total_interest,
        total_paid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_debts() -> Vec<Debt> {
        vec![
            Debt::new("card", 1_000.0, 20.0, 50.0),
            Debt::new("car", 5_000.0, 5.0, 150.0),
            Debt::new("store", 500.0, 25.0, 25.0),
        ]
    }

    #[test]
    fn test_snowball_orders_by_balance() {
        let result =
            payoff_plan(&sample_debts(), &PayoffConfig::new(PayoffStrategy::Snowball, 100.0))
                .unwrap();
        assert_eq!(result.order, vec!["store", "card", "car"]);
    }

    #[test]
    fn test_avalanche_orders_by_rate() {
        let result =
            payoff_plan(&sample_debts(), &PayoffConfig::new(PayoffStrategy::Avalanche, 100.0))
                .unwrap();
        assert_eq!(result.order, vec!["store", "card", "car"]);
    }

    #[test]
    fn test_total_paid_is_principal_plus_interest() {
        let result =
            payoff_plan(&sample_debts(), &PayoffConfig::new(PayoffStrategy::Snowball, 100.0))
                .unwrap();
        let principal: f64 = sample_debts().iter().map(|d| d.balance).sum();
        assert!((result.total_paid - (principal + result.total_interest)).abs() < 1e-6);
    }

    #[test]
    fn test_all_balances_zero_at_end() {
        let result =
            payoff_plan(&sample_debts(), &PayoffConfig::new(PayoffStrategy::Avalanche, 0.0))
                .unwrap();
        let last = result.months.last().unwrap();
        assert!(last.debts.iter().all(|d| d.balance == 0.0));
    }

    #[test]
    fn test_avalanche_never_pays_more_interest_than_snowball() {
        // Ordering differs: "low" has the small balance, "high" the high rate
        let debts = vec![
            Debt::new("high", 4_000.0, 22.0, 120.0),
            Debt::new("low", 1_500.0, 6.0, 50.0),
        ];
        let snowball =
            payoff_plan(&debts, &PayoffConfig::new(PayoffStrategy::Snowball, 200.0)).unwrap();
        let avalanche =
            payoff_plan(&debts, &PayoffConfig::new(PayoffStrategy::Avalanche, 200.0)).unwrap();

        assert_eq!(snowball.order, vec!["low", "high"]);
        assert_eq!(avalanche.order, vec!["high", "low"]);
        assert!(avalanche.total_interest <= snowball.total_interest);
    }

    #[test]
    fn test_non_amortizing_debt_detected() {
        // 24% annual on 10k is $200/month interest; a $150 minimum with no
        // extra pool can never reduce the balance.
        let debts = vec![Debt::new("trap", 10_000.0, 24.0, 150.0)];
        let result = payoff_plan(&debts, &PayoffConfig::new(PayoffStrategy::Snowball, 0.0));
        assert!(matches!(result, Err(CalcError::NonAmortizingDebt { .. })));
    }

    #[test]
    fn test_empty_debt_set_is_an_error() {
        let result = payoff_plan(&[], &PayoffConfig::new(PayoffStrategy::Snowball, 0.0));
        assert!(matches!(result, Err(CalcError::NoDebts)));
    }

    #[test]
    fn test_final_payment_clamped_to_amount_owed() {
        let debts = vec![Debt::new("small", 40.0, 12.0, 100.0)];
        let result =
            payoff_plan(&debts, &PayoffConfig::new(PayoffStrategy::Snowball, 0.0)).unwrap();
        assert_eq!(result.months.len(), 1);
        let snap = &result.months[0].debts[0];
        // Pays balance + one month of interest, not the full minimum
        assert!((snap.payment - (40.0 + 40.0 * 0.01)).abs() < 1e-9);
        assert_eq!(snap.balance, 0.0);
    }
}
