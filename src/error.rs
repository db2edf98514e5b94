//! Error taxonomy for the calculator suite
//!
//! Degenerate-parameter conditions (zero-rate annuity limits, non-positive
//! horizons, unfunded targets) are typed errors rather than arithmetic faults.
//! IO and CSV failures are fatal and carry their underlying cause.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("horizon must be at least one period")]
    NonPositiveHorizon,

    #[error("monthly income must be positive, got {0:.2}")]
    NonPositiveIncome(f64),

    #[error("down payment and trade-in cover the full purchase; nothing to finance")]
    NothingToFinance,

    #[error("retirement age {retirement_age} must be greater than current age {current_age}")]
    NoYearsToRetirement {
        current_age: u32,
        retirement_age: u32,
    },

    #[error("no debts supplied")]
    NoDebts,

    #[error(
        "debt '{name}' can never amortize: minimum payment {min_payment:.2} \
         does not cover first-month interest {interest:.2}"
    )]
    NonAmortizingDebt {
        name: String,
        min_payment: f64,
        interest: f64,
    },

    #[error("payoff plan did not terminate within {0} months")]
    PayoffCapExceeded(u32),

    #[error("contribution of {contribution:.2} per period can never reach target {target:.2}")]
    UnfundedTarget { contribution: f64, target: f64 },

    #[error("invalid duration '{0}': expected forms like '12 months' or '5 years'")]
    InvalidDuration(String),

    #[error("failed to write table")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize table row")]
    Csv(#[from] csv::Error),
}
