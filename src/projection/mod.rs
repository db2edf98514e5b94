//! Periodic cash-flow projector: parameters, recurrence, and annuity forms

mod engine;
mod params;
mod schedule;

pub mod annuity;

pub use engine::Projector;
pub use params::{
    ContributionTiming, FlowDirection, Frequency, Horizon, ProjectorConfig, RateConversion,
    StopRule,
};
pub use schedule::{PeriodRow, Schedule, ScheduleSummary, TerminationCause};
