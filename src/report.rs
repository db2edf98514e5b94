//! CSV table writer and console formatting
//!
//! The tabular-file seam for calculator output: each logical table ("Amortization
//! Schedule", "Yearly Summary", ...) becomes one CSV file next to the others.
//! Serde-serializable row types drive the headers.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::debts::PayoffResult;
use crate::error::CalcError;

/// Write one table of serializable rows to a CSV file
pub fn write_table<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<(), CalcError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a payoff schedule as a wide table: one row per month, a
/// payment/interest/balance column triple per debt in priority order.
pub fn write_payoff_table<P: AsRef<Path>>(path: P, result: &PayoffResult) -> Result<(), CalcError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["Month".to_string(), "Total Payment".to_string(), "Total Interest Paid".to_string()];
    for name in &result.order {
        header.push(format!("{} Payment", name));
        header.push(format!("{} Interest", name));
        header.push(format!("{} Balance", name));
    }
    writer.write_record(&header)?;

    for month in &result.months {
        let mut record = vec![
            month.month.to_string(),
            format!("{:.2}", month.total_payment),
            format!("{:.2}", month.cumulative_interest),
        ];
        for debt in &month.debts {
            record.push(format!("{:.2}", debt.payment));
            record.push(format!("{:.2}", debt.interest));
            record.push(format!("{:.2}", debt.balance));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// File path for a named table under an output base:
/// ("plan", "Yearly Summary") -> plan_yearly_summary.csv
pub fn table_path(base: &str, table_name: &str) -> PathBuf {
    let slug: String = table_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    PathBuf::from(format!("{}_{}.csv", base, slug))
}

/// Fixed-point currency display with thousands separators: 1234.5 -> "$1,234.50"
pub fn fmt_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{:02}", grouped, frac)
    } else {
        format!("${}.{:02}", grouped, frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debts::{payoff_plan, Debt, PayoffConfig, PayoffStrategy};

    #[test]
    fn test_fmt_currency() {
        assert_eq!(fmt_currency(0.0), "$0.00");
        assert_eq!(fmt_currency(386.657), "$386.66");
        assert_eq!(fmt_currency(1_234.5), "$1,234.50");
        assert_eq!(fmt_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(fmt_currency(-42.5), "-$42.50");
    }

    #[test]
    fn test_table_path_slugs() {
        assert_eq!(
            table_path("plan", "Yearly Summary"),
            PathBuf::from("plan_yearly_summary.csv")
        );
        assert_eq!(
            table_path("out", "Amortization Schedule"),
            PathBuf::from("out_amortization_schedule.csv")
        );
    }

    #[test]
    fn test_write_table_roundtrip() {
        #[derive(serde::Serialize)]
        struct Row {
            month: u32,
            balance: f64,
        }

        let dir = std::env::temp_dir().join("fincalc_report_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rows.csv");

        write_table(&path, &[Row { month: 1, balance: 10.5 }, Row { month: 2, balance: 0.0 }])
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("month,balance"));
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_payoff_table_has_column_triple_per_debt() {
        let debts = vec![
            Debt::new("a", 500.0, 10.0, 100.0),
            Debt::new("b", 300.0, 5.0, 50.0),
        ];
        let result = payoff_plan(&debts, &PayoffConfig::new(PayoffStrategy::Snowball, 0.0)).unwrap();

        let dir = std::env::temp_dir().join("fincalc_report_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("payoff.csv");
        write_payoff_table(&path, &result).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(header.split(',').count(), 3 + 3 * 2);
        assert!(header.contains("b Payment"));
    }
}
