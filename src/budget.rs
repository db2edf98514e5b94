//! Monthly budget planner
//!
//! Compares budgeted against actual spending per category, expresses each
//! category as a share of income, and appends a Total row.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// One budget category with planned and observed spending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub name: String,
    pub budgeted: f64,
    pub actual: f64,
}

impl FromStr for BudgetCategory {
    type Err = String;

    /// Parse a compact category spec: "name:budgeted:actual"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(format!(
                "invalid category spec '{}': expected name:budgeted:actual",
                s
            ));
        }
        let parse = |field: &str, label: &str| -> Result<f64, String> {
            field
                .parse()
                .map_err(|_| format!("invalid {} '{}' in category spec '{}'", label, field, s))
        };
        Ok(BudgetCategory {
            name: parts[0].to_string(),
            budgeted: parse(parts[1], "budgeted amount")?,
            actual: parse(parts[2], "actual amount")?,
        })
    }
}

/// One line of the budget overview (category or Total)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: String,
    pub budgeted: f64,
    pub actual: f64,

    /// actual - budgeted; positive means overspent
    pub difference: f64,

    /// Budgeted amount as a percentage of monthly income
    pub pct_of_income: f64,
}

/// Budget overview with Total row and leftover income
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetReport {
    pub lines: Vec<BudgetLine>,
    pub remaining_income: f64,
}

impl BudgetReport {
    /// The appended Total line
    pub fn total(&self) -> &BudgetLine {
        self.lines.last().expect("report always has a Total line")
    }
}

/// Build the budget overview for one month of income
pub fn plan_budget(
    monthly_income: f64,
    categories: &[BudgetCategory],
) -> Result<BudgetReport, CalcError> {
    if monthly_income <= 0.0 {
        return Err(CalcError::NonPositiveIncome(monthly_income));
    }

    let total_budget: f64 = categories.iter().map(|c| c.budgeted).sum();
    let total_actual: f64 = categories.iter().map(|c| c.actual).sum();

    let mut lines: Vec<BudgetLine> = categories
        .iter()
        .map(|c| BudgetLine {
            category: c.name.clone(),
            budgeted: c.budgeted,
            actual: c.actual,
            difference: c.actual - c.budgeted,
            pct_of_income: c.budgeted / monthly_income * 100.0,
        })
        .collect();

    lines.push(BudgetLine {
        category: "Total".to_string(),
        budgeted: total_budget,
        actual: total_actual,
        difference: total_actual - total_budget,
        pct_of_income: total_budget / monthly_income * 100.0,
    });

    Ok(BudgetReport {
        lines,
        remaining_income: monthly_income - total_budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_categories() -> Vec<BudgetCategory> {
        vec![
            BudgetCategory {
                name: "rent".into(),
                budgeted: 1_500.0,
                actual: 1_500.0,
            },
            BudgetCategory {
                name: "food".into(),
                budgeted: 600.0,
                actual: 720.0,
            },
            BudgetCategory {
                name: "transport".into(),
                budgeted: 200.0,
                actual: 150.0,
            },
        ]
    }

    #[test]
    fn test_totals_and_remaining_income() {
        let report = plan_budget(5_000.0, &sample_categories()).unwrap();
        assert_eq!(report.lines.len(), 4);

        let total = report.total();
        assert_eq!(total.category, "Total");
        assert_eq!(total.budgeted, 2_300.0);
        assert_eq!(total.actual, 2_370.0);
        assert_eq!(report.remaining_income, 2_700.0);
    }

    #[test]
    fn test_percentages_of_income() {
        let report = plan_budget(5_000.0, &sample_categories()).unwrap();
        assert!((report.lines[0].pct_of_income - 30.0).abs() < 1e-9);
        assert!((report.total().pct_of_income - 46.0).abs() < 1e-9);
    }

    #[test]
    fn test_overspend_shows_positive_difference() {
        let report = plan_budget(5_000.0, &sample_categories()).unwrap();
        assert_eq!(report.lines[1].difference, 120.0);
        assert_eq!(report.lines[2].difference, -50.0);
    }

    #[test]
    fn test_non_positive_income_is_an_error() {
        assert!(matches!(
            plan_budget(0.0, &sample_categories()),
            Err(CalcError::NonPositiveIncome(_))
        ));
        assert!(matches!(
            plan_budget(-100.0, &sample_categories()),
            Err(CalcError::NonPositiveIncome(_))
        ));
    }

    #[test]
    fn test_category_spec_parsing() {
        let cat: BudgetCategory = "food:600:720".parse().unwrap();
        assert_eq!(cat.name, "food");
        assert_eq!(cat.budgeted, 600.0);
        assert_eq!(cat.actual, 720.0);
        assert!("food:600".parse::<BudgetCategory>().is_err());
    }
}
