//! fincalc - personal-finance calculators on a unified projection engine
//!
//! This library provides:
//! - A periodic cash-flow projector parameterized by contribution timing,
//!   flow direction, and stop rule
//! - Closed-form annuity arithmetic with explicit zero-rate limits
//! - Loan amortization (auto, mortgage) and a finance-or-save comparison
//! - Savings calculators (compound interest, stock growth, savings goal,
//!   retirement, emergency fund)
//! - A multi-debt payoff engine (snowball/avalanche)
//! - Budget planning, federal-holiday long-weekend suggestions, and a
//!   parallel scenario runner

pub mod budget;
pub mod debts;
pub mod error;
pub mod holidays;
pub mod loans;
pub mod projection;
pub mod report;
pub mod savings;
pub mod scenario;

// Re-export commonly used types
pub use error::CalcError;
pub use projection::{
    Frequency, Horizon, PeriodRow, Projector, ProjectorConfig, RateConversion, Schedule,
    TerminationCause,
};
