//! fincalc CLI
//!
//! One subcommand per calculator. Scalar inputs are flags; durations accept
//! "12 months" / "5 years" strings. Each run prints a console summary and,
//! when --out is given, writes one CSV file per named table.

use anyhow::Context;
use clap::{Parser, Subcommand};

use fincalc::budget::{plan_budget, BudgetCategory};
use fincalc::debts::{payoff_plan, Debt, PayoffConfig, PayoffStrategy};
use fincalc::holidays::suggest_long_weekends;
use fincalc::loans::{auto_loan, compare, mortgage, AutoLoanParams, ComparisonParams, MortgageParams};
use fincalc::projection::{
    ContributionTiming, FlowDirection, Frequency, Horizon, ProjectorConfig, RateConversion,
    StopRule,
};
use fincalc::report::{fmt_currency, table_path, write_payoff_table, write_table};
use fincalc::savings::{
    compound_interest, emergency_fund, retirement_plan, savings_goal, stock_growth,
    CompoundParams, EmergencyFundParams, RetirementParams, SavingsGoalParams, StockGrowthParams,
};
use fincalc::scenario::sweep_rates;

#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Personal-finance calculators with CSV table output"
)]
struct Cli {
    /// Print the summary as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Auto loan amortization schedule
    AutoLoan {
        /// Total purchase amount
        #[arg(long)]
        amount: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        /// Loan term in years
        #[arg(long)]
        term_years: u32,
        #[arg(long, default_value_t = 0.0)]
        down_payment: f64,
        #[arg(long, default_value_t = 0.0)]
        trade_in: f64,
        /// Extra principal per month
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
        /// Base name for output CSV files
        #[arg(long)]
        out: Option<String>,
    },

    /// Mortgage amortization with escrow
    Mortgage {
        #[arg(long)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        term_years: u32,
        /// Monthly property tax
        #[arg(long, default_value_t = 0.0)]
        property_tax: f64,
        /// Monthly insurance
        #[arg(long, default_value_t = 0.0)]
        insurance: f64,
        /// Monthly PMI
        #[arg(long, default_value_t = 0.0)]
        pmi: f64,
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
        #[arg(long)]
        out: Option<String>,
    },

    /// Compound interest growth
    Compound {
        #[arg(long)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        /// Contribution per period
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,
        /// daily, weekly, bi-weekly, monthly, quarterly, annual
        #[arg(long, default_value = "monthly")]
        frequency: String,
        /// e.g. "12 months" or "5 years"
        #[arg(long)]
        duration: Horizon,
        /// Annual contribution increase in percent
        #[arg(long, default_value_t = 0.0)]
        annual_increase: f64,
        /// Annual inflation in percent (adds a real-balance column)
        #[arg(long, default_value_t = 0.0)]
        inflation: f64,
        #[arg(long)]
        out: Option<String>,
    },

    /// Stock investment growth with dividends
    Stock {
        #[arg(long)]
        initial: f64,
        /// Expected annual return in percent
        #[arg(long)]
        rate: f64,
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,
        #[arg(long, default_value = "monthly")]
        frequency: String,
        #[arg(long)]
        duration: Horizon,
        /// Annual dividend yield in percent
        #[arg(long, default_value_t = 0.0)]
        dividend_yield: f64,
        /// Pay dividends out instead of reinvesting
        #[arg(long)]
        no_reinvest: bool,
        #[arg(long)]
        out: Option<String>,
    },

    /// Required contribution to hit a savings goal
    SavingsGoal {
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = 0.0)]
        current: f64,
        #[arg(long)]
        duration: Horizon,
        /// Expected annual return in percent
        #[arg(long)]
        rate: f64,
        #[arg(long, default_value_t = 0.0)]
        inflation: f64,
        #[arg(long, default_value = "monthly")]
        frequency: String,
        #[arg(long)]
        out: Option<String>,
    },

    /// Retirement savings plan
    Retirement {
        #[arg(long)]
        current_age: u32,
        #[arg(long)]
        retirement_age: u32,
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = 0.0)]
        current_savings: f64,
        /// Expected annual return in percent
        #[arg(long)]
        rate: f64,
        #[arg(long, default_value_t = 0.0)]
        inflation: f64,
        #[arg(long, default_value = "monthly")]
        frequency: String,
        #[arg(long)]
        out: Option<String>,
    },

    /// Months needed to build an emergency fund
    EmergencyFund {
        #[arg(long)]
        monthly_expenses: f64,
        /// Months of expenses to cover
        #[arg(long, default_value_t = 6)]
        coverage_months: u32,
        #[arg(long, default_value_t = 0.0)]
        current: f64,
        /// Contribution per period
        #[arg(long)]
        contribution: f64,
        #[arg(long, default_value = "monthly")]
        frequency: String,
        #[arg(long)]
        out: Option<String>,
    },

    /// Multi-debt payoff schedule (snowball or avalanche)
    DebtPayoff {
        /// Repeatable debt spec: name:balance:rate:min_payment
        #[arg(long = "debt", required = true)]
        debts: Vec<Debt>,
        /// snowball or avalanche
        #[arg(long, default_value = "snowball")]
        method: PayoffStrategy,
        /// Shared extra payment per month
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
        #[arg(long)]
        out: Option<String>,
    },

    /// Compare financing an expense against saving up for it
    Compare {
        #[arg(long)]
        expense: f64,
        #[arg(long, default_value_t = 0.0)]
        current_savings: f64,
        /// Loan annual rate in percent
        #[arg(long)]
        loan_rate: f64,
        #[arg(long)]
        loan_term_years: u32,
        /// Savings annual return in percent
        #[arg(long)]
        return_rate: f64,
        #[arg(long, default_value_t = 0.0)]
        inflation: f64,
        /// How many months the purchase can wait
        #[arg(long)]
        savings_months: u32,
        #[arg(long, default_value = "monthly")]
        frequency: String,
        #[arg(long)]
        out: Option<String>,
    },

    /// Budget overview against monthly income
    Budget {
        #[arg(long)]
        income: f64,
        /// Repeatable category spec: name:budgeted:actual
        #[arg(long = "category", required = true)]
        categories: Vec<BudgetCategory>,
        #[arg(long)]
        out: Option<String>,
    },

    /// Long-weekend suggestions around federal holidays
    LongWeekends {
        #[arg(long)]
        year: i32,
    },

    /// Project one savings plan across several annual rates
    Sweep {
        #[arg(long, default_value_t = 0.0)]
        principal: f64,
        #[arg(long)]
        contribution: f64,
        /// Comma-separated annual rates in percent
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
        #[arg(long)]
        years: u32,
        #[arg(long, default_value = "monthly")]
        frequency: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::AutoLoan {
            amount,
            rate,
            term_years,
            down_payment,
            trade_in,
            extra,
            out,
        } => {
            let result = auto_loan(&AutoLoanParams {
                loan_amount: amount,
                annual_rate_pct: rate,
                term_years,
                down_payment,
                trade_in_value: trade_in,
                extra_payment: extra,
            })?;

            if let Some(base) = &out {
                let path = table_path(base, "Amortization Schedule");
                write_table(&path, &result.schedule.rows)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Amortization schedule written to {}", path.display());
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "amount_financed": result.amount_financed,
                        "monthly_payment": result.monthly_payment,
                        "total_interest": result.total_interest,
                        "months": result.months,
                    }))?
                );
            } else {
                println!("Amount financed:  {}", fmt_currency(result.amount_financed));
                println!("Monthly payment:  {}", fmt_currency(result.monthly_payment));
                println!("Total interest:   {}", fmt_currency(result.total_interest));
                println!("Paid off in:      {} months", result.months);
            }
        }

        Command::Mortgage {
            principal,
            rate,
            term_years,
            property_tax,
            insurance,
            pmi,
            extra,
            out,
        } => {
            let result = mortgage(&MortgageParams {
                principal,
                annual_rate_pct: rate,
                term_years,
                property_tax,
                insurance,
                pmi,
                extra_payment: extra,
            })?;

            if let Some(base) = &out {
                let path = table_path(base, "Amortization Schedule");
                write_table(&path, &result.rows)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Amortization schedule written to {}", path.display());
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "monthly_payment": result.monthly_payment,
                        "total_interest": result.total_interest,
                        "months": result.months,
                    }))?
                );
            } else {
                println!("Monthly payment (incl. escrow): {}", fmt_currency(result.monthly_payment));
                println!("Total interest:                 {}", fmt_currency(result.total_interest));
                println!("Paid off in:                    {} months", result.months);
            }
        }

        Command::Compound {
            principal,
            rate,
            contribution,
            frequency,
            duration,
            annual_increase,
            inflation,
            out,
        } => {
            let result = compound_interest(&CompoundParams {
                principal,
                annual_rate_pct: rate,
                contribution,
                frequency: Frequency::from_key(&frequency),
                horizon: duration,
                annual_increase_pct: annual_increase,
                inflation_pct: inflation,
            });

            if let Some(base) = &out {
                let path = table_path(base, "Detailed Data");
                write_table(&path, &result.rows)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Growth detail written to {}", path.display());
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "final_balance": result.final_balance,
                        "total_interest": result.total_interest,
                        "total_contributions": result.total_contributions,
                        "periods": result.rows.len(),
                    }))?
                );
            } else {
                println!("Final balance:       {}", fmt_currency(result.final_balance));
                println!("Total contributions: {}", fmt_currency(result.total_contributions));
                println!("Total interest:      {}", fmt_currency(result.total_interest));
            }
        }

        Command::Stock {
            initial,
            rate,
            contribution,
            frequency,
            duration,
            dividend_yield,
            no_reinvest,
            out,
        } => {
            let result = stock_growth(&StockGrowthParams {
                initial_investment: initial,
                annual_rate_pct: rate,
                contribution,
                frequency: Frequency::from_key(&frequency),
                horizon: duration,
                dividend_yield_pct: dividend_yield,
                reinvest_dividends: !no_reinvest,
            });

            if let Some(base) = &out {
                let path = table_path(base, "Detailed Data");
                write_table(&path, &result.rows)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Growth detail written to {}", path.display());
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "final_balance": result.final_balance,
                        "total_growth": result.total_growth,
                        "total_dividends": result.total_dividends,
                        "total_contributions": result.total_contributions,
                    }))?
                );
            } else {
                println!("Final balance:       {}", fmt_currency(result.final_balance));
                println!("Total growth:        {}", fmt_currency(result.total_growth));
                println!("Total dividends:     {}", fmt_currency(result.total_dividends));
                println!("Total contributions: {}", fmt_currency(result.total_contributions));
            }
        }

        Command::SavingsGoal {
            target,
            current,
            duration,
            rate,
            inflation,
            frequency,
            out,
        } => {
            let freq = Frequency::from_key(&frequency);
            let plan = savings_goal(&SavingsGoalParams {
                target_amount: target,
                current_savings: current,
                horizon: duration,
                return_rate_pct: rate,
                inflation_pct: inflation,
                frequency: freq,
            })?;

            if let Some(base) = &out {
                let path = table_path(base, "Savings Goal Progress");
                write_table(&path, &plan.rows)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Progress table written to {}", path.display());
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "required_contribution": plan.required_contribution,
                        "adjusted_target": plan.adjusted_target,
                        "final_balance": plan.final_balance,
                        "frequency": freq.as_str(),
                    }))?
                );
            } else {
                println!(
                    "Required {} contribution: {}",
                    freq.as_str(),
                    fmt_currency(plan.required_contribution)
                );
                if plan.required_contribution < 0.0 {
                    println!("(negative: growth on current savings already exceeds the target)");
                }
                println!("Inflation-adjusted target: {}", fmt_currency(plan.adjusted_target));
                println!("Projected final balance:   {}", fmt_currency(plan.final_balance));
            }
        }

        Command::Retirement {
            current_age,
            retirement_age,
            target,
            current_savings,
            rate,
            inflation,
            frequency,
            out,
        } => {
            let freq = Frequency::from_key(&frequency);
            let plan = retirement_plan(&RetirementParams {
                current_age,
                retirement_age,
                target_amount: target,
                current_savings,
                annual_return_pct: rate,
                inflation_pct: inflation,
                frequency: freq,
            })?;

            if let Some(base) = &out {
                let yearly = table_path(base, "Yearly Summary");
                write_table(&yearly, &plan.years)
                    .with_context(|| format!("writing {}", yearly.display()))?;
                let detail = table_path(base, "Detailed Breakdown");
                write_table(&detail, &plan.periods)
                    .with_context(|| format!("writing {}", detail.display()))?;
                println!("Tables written to {} and {}", yearly.display(), detail.display());
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "required_contribution": plan.required_contribution,
                        "adjusted_target": plan.adjusted_target,
                        "final_balance": plan.final_balance,
                        "frequency": freq.as_str(),
                    }))?
                );
            } else {
                println!(
                    "Required {} contribution: {}",
                    freq.as_str(),
                    fmt_currency(plan.required_contribution)
                );
                println!("Inflation-adjusted target: {}", fmt_currency(plan.adjusted_target));
                println!("Projected final balance:   {}", fmt_currency(plan.final_balance));
            }
        }

        Command::EmergencyFund {
            monthly_expenses,
            coverage_months,
            current,
            contribution,
            frequency,
            out,
        } => {
            let plan = emergency_fund(&EmergencyFundParams {
                monthly_expenses,
                coverage_months,
                current_savings: current,
                contribution,
                frequency: Frequency::from_key(&frequency),
            })?;

            if let Some(base) = &out {
                let path = table_path(base, "Savings Progress");
                write_table(&path, &plan.rows)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Progress table written to {}", path.display());
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "target_fund": plan.target_fund,
                        "months_needed": plan.months_needed,
                    }))?
                );
            } else {
                println!("Target fund:   {}", fmt_currency(plan.target_fund));
                println!("Months needed: {}", plan.months_needed);
            }
        }

        Command::DebtPayoff {
            debts,
            method,
            extra,
            out,
        } => {
            let result = payoff_plan(&debts, &PayoffConfig::new(method, extra))?;

            if let Some(base) = &out {
                let path = table_path(base, "Debt Payoff Schedule");
                write_payoff_table(&path, &result)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Payoff schedule written to {}", path.display());
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "strategy": result.strategy.as_str(),
                        "order": result.order.clone(),
                        "months_to_debt_free": result.months_to_debt_free(),
                        "total_interest": result.total_interest,
                        "total_paid": result.total_paid,
                    }))?
                );
            } else {
                println!("Strategy:            {}", result.strategy.as_str());
                println!("Payoff order:        {}", result.order.join(", "));
                println!("Months to debt-free: {}", result.months_to_debt_free());
                println!("Total interest:      {}", fmt_currency(result.total_interest));
                println!("Total paid:          {}", fmt_currency(result.total_paid));
            }
        }

        Command::Compare {
            expense,
            current_savings,
            loan_rate,
            loan_term_years,
            return_rate,
            inflation,
            savings_months,
            frequency,
            out,
        } => {
            let result = compare(&ComparisonParams {
                expense_amount: expense,
                current_savings,
                loan_rate_pct: loan_rate,
                loan_term_years,
                return_rate_pct: return_rate,
                inflation_pct: inflation,
                savings_term_months: savings_months,
                frequency: Frequency::from_key(&frequency),
            })?;

            if let Some(base) = &out {
                let loan_path = table_path(base, "Loan Details");
                write_table(&loan_path, std::slice::from_ref(&result.loan))
                    .with_context(|| format!("writing {}", loan_path.display()))?;
                let savings_path = table_path(base, "Savings Details");
                write_table(&savings_path, std::slice::from_ref(&result.savings))
                    .with_context(|| format!("writing {}", savings_path.display()))?;
                let breakdown_path = table_path(base, "Savings Breakdown");
                write_table(&breakdown_path, &result.breakdown)
                    .with_context(|| format!("writing {}", breakdown_path.display()))?;
                println!(
                    "Tables written to {}, {}, {}",
                    loan_path.display(),
                    savings_path.display(),
                    breakdown_path.display()
                );
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Loan:    payment {}/month, total cost {}, interest {}",
                    fmt_currency(result.loan.monthly_payment),
                    fmt_currency(result.loan.total_cost),
                    fmt_currency(result.loan.total_interest));
                println!("Savings: contribute {}/period, final balance {}, interest earned {}",
                    fmt_currency(result.savings.required_contribution),
                    fmt_currency(result.savings.final_balance),
                    fmt_currency(result.savings.total_interest));
                if result.saving_is_cheaper() {
                    println!("Saving first costs less than financing.");
                } else {
                    println!("Financing costs less than saving first.");
                }
            }
        }

        Command::Budget {
            income,
            categories,
            out,
        } => {
            let report = plan_budget(income, &categories)?;

            if let Some(base) = &out {
                let path = table_path(base, "Budget Overview");
                write_table(&path, &report.lines)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Budget overview written to {}", path.display());
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{:<16} {:>12} {:>12} {:>12} {:>8}",
                    "Category", "Budgeted", "Actual", "Difference", "% Income"
                );
                for line in &report.lines {
                    println!(
                        "{:<16} {:>12} {:>12} {:>12} {:>7.1}%",
                        line.category,
                        fmt_currency(line.budgeted),
                        fmt_currency(line.actual),
                        fmt_currency(line.difference),
                        line.pct_of_income
                    );
                }
                println!("Remaining income: {}", fmt_currency(report.remaining_income));
            }
        }

        Command::LongWeekends { year } => {
            let suggestions = suggest_long_weekends(year);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                println!("Long weekend suggestions for {}:", year);
                for s in &suggestions {
                    println!("- {} on {}: {}", s.holiday, s.date, s.advice.description());
                }
            }
        }

        Command::Sweep {
            principal,
            contribution,
            rates,
            years,
            frequency,
        } => {
            let freq = Frequency::from_key(&frequency);
            let ppy = freq.periods_per_year();
            let base = ProjectorConfig {
                starting_balance: principal,
                contribution,
                timing: ContributionTiming::AfterInterest,
                direction: FlowDirection::Deposit,
                periods_per_year: ppy,
                horizon_periods: years * ppy,
                stop: StopRule::AtHorizon,
                ..Default::default()
            };
            let outcomes = sweep_rates(&base, RateConversion::Nominal, &rates);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcomes)?);
            } else {
                println!("{:>8} {:>16} {:>16}", "Rate", "Final Balance", "Total Interest");
                for outcome in &outcomes {
                    println!(
                        "{:>7.2}% {:>16} {:>16}",
                        outcome.annual_rate_pct,
                        fmt_currency(outcome.final_balance),
                        fmt_currency(outcome.total_interest)
                    );
                }
            }
        }
    }

    Ok(())
}
