//! Debt record

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single debt: revolving balance, its own rate, and a minimum payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub name: String,
    pub balance: f64,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,
    pub min_payment: f64,
}

impl Debt {
    pub fn new(name: impl Into<String>, balance: f64, annual_rate_pct: f64, min_payment: f64) -> Self {
        Self {
            name: name.into(),
            balance,
            annual_rate_pct,
            min_payment,
        }
    }

    /// Per-month rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }
}

impl FromStr for Debt {
    type Err = String;

    /// Parse a compact debt spec: "name:balance:rate:min_payment"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 4 {
            return Err(format!(
                "invalid debt spec '{}': expected name:balance:rate:min_payment",
                s
            ));
        }
        let parse = |field: &str, label: &str| -> Result<f64, String> {
            field
                .parse()
                .map_err(|_| format!("invalid {} '{}' in debt spec '{}'", label, field, s))
        };
        Ok(Debt {
            name: parts[0].to_string(),
            balance: parse(parts[1], "balance")?,
            annual_rate_pct: parse(parts[2], "rate")?,
            min_payment: parse(parts[3], "minimum payment")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        let debt = Debt::new("card", 5_000.0, 24.0, 100.0);
        assert!((debt.monthly_rate() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_spec_parsing() {
        let debt: Debt = "visa:4500:19.99:90".parse().unwrap();
        assert_eq!(debt.name, "visa");
        assert_eq!(debt.balance, 4_500.0);
        assert_eq!(debt.annual_rate_pct, 19.99);
        assert_eq!(debt.min_payment, 90.0);

        assert!("visa:4500".parse::<Debt>().is_err());
        assert!("visa:abc:19.99:90".parse::<Debt>().is_err());
    }
}
