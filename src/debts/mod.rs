//! Multi-debt payoff planning

mod debt;
mod payoff;

pub use debt::Debt;
pub use payoff::{
    payoff_plan, DebtSnapshot, PayoffConfig, PayoffMonth, PayoffResult, PayoffStrategy,
};
