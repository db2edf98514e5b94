//! Closed-form annuity arithmetic: level payments and goal-seeking
//!
//! Both formulas divide by the periodic rate, so the r = 0 limit is handled
//! explicitly rather than evaluated literally.

use crate::error::CalcError;

/// Level installment L such that B0 = L * (1 - (1+r)^-n) / r.
///
/// At r = 0 the limit is L = B0 / n.
pub fn level_payment(principal: f64, periodic_rate: f64, periods: u32) -> Result<f64, CalcError> {
    if periods == 0 {
        return Err(CalcError::NonPositiveHorizon);
    }
    if periodic_rate == 0.0 {
        return Ok(principal / periods as f64);
    }
    Ok(principal * periodic_rate / (1.0 - (1.0 + periodic_rate).powi(-(periods as i32))))
}

/// Future value of a starting balance plus a level contribution stream,
/// contributions applied after interest each period.
pub fn future_value(
    starting_balance: f64,
    contribution: f64,
    periodic_rate: f64,
    periods: u32,
) -> f64 {
    let n = periods as f64;
    if periodic_rate == 0.0 {
        return starting_balance + contribution * n;
    }
    let growth = (1.0 + periodic_rate).powi(periods as i32);
    starting_balance * growth + contribution * (growth - 1.0) / periodic_rate
}

/// Periodic contribution C solving
/// target = B0 * (1+r)^n + C * ((1+r)^n - 1) / r.
///
/// A negative result is legitimate: the target is already exceeded by
/// uncontributed growth. It is surfaced as-is, never clamped; a caller that
/// labels it "required contribution" is reporting that withdrawals of that
/// size would still hit the target.
///
/// At r = 0 the limit is C = (target - B0) / n.
pub fn required_contribution(
    target: f64,
    starting_balance: f64,
    periodic_rate: f64,
    periods: u32,
) -> Result<f64, CalcError> {
    if periods == 0 {
        return Err(CalcError::NonPositiveHorizon);
    }
    if periodic_rate == 0.0 {
        return Ok((target - starting_balance) / periods as f64);
    }
    let growth = (1.0 + periodic_rate).powi(periods as i32);
    Ok((target - starting_balance * growth) * periodic_rate / (growth - 1.0))
}

/// Deflate a future target into today's dollars:
/// G_adj = G / (1 + inflation)^years.
pub fn inflation_adjusted_target(target: f64, annual_inflation: f64, years: f64) -> f64 {
    if annual_inflation == 0.0 {
        return target;
    }
    target / (1.0 + annual_inflation).powf(years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_level_payment_reference_loan() {
        // $20,000 at 6% over 5 years -> about $386.66/month
        let payment = level_payment(20_000.0, 0.06 / 12.0, 60).unwrap();
        assert_relative_eq!(payment, 386.66, epsilon = 0.005);
    }

    #[test]
    fn test_level_payment_zero_rate() {
        let payment = level_payment(12_000.0, 0.0, 24).unwrap();
        assert_eq!(payment, 500.0);
    }

    #[test]
    fn test_level_payment_rejects_zero_periods() {
        assert!(matches!(
            level_payment(1_000.0, 0.01, 0),
            Err(CalcError::NonPositiveHorizon)
        ));
    }

    #[test]
    fn test_required_contribution_inverts_future_value() {
        let rate = (1.05_f64).powf(1.0 / 12.0) - 1.0;
        let c = required_contribution(10_000.0, 0.0, rate, 24).unwrap();
        let fv = future_value(0.0, c, rate, 24);
        assert!((fv - 10_000.0).abs() < 0.01);
    }

    #[test]
    fn test_required_contribution_zero_rate_limit() {
        let c = required_contribution(1_200.0, 0.0, 0.0, 12).unwrap();
        assert_eq!(c, 100.0);
    }

    #[test]
    fn test_negative_contribution_surfaced() {
        // Growth alone already overshoots the target; the answer is negative
        // and must come back unclamped.
        let c = required_contribution(1_000.0, 10_000.0, 0.01, 12).unwrap();
        assert!(c < 0.0);
        let fv = future_value(10_000.0, c, 0.01, 12);
        assert!((fv - 1_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_inflation_adjusted_target() {
        let adj = inflation_adjusted_target(10_000.0, 0.02, 2.0);
        assert_relative_eq!(adj, 10_000.0 / 1.02_f64.powi(2), epsilon = 1e-9);
        assert_eq!(inflation_adjusted_target(10_000.0, 0.0, 5.0), 10_000.0);
    }
}
