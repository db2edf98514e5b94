//! U.S. federal holiday rules and long-weekend suggestions
//!
//! A holiday is either a fixed month/day or a weekday rule (nth or last
//! weekday of a month). Rules are data, evaluation is one pass per year.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Date rule for a holiday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month and day every year
    Fixed { month: u32, day: u32 },
    /// nth occurrence of a weekday within the month (1-based)
    NthWeekday { month: u32, weekday: Weekday, n: u8 },
    /// Final occurrence of a weekday within the month
    LastWeekday { month: u32, weekday: Weekday },
}

impl HolidayRule {
    /// Resolve the rule to a concrete date in the given year.
    /// None only for degenerate rules (e.g. a fifth Monday that month lacks).
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            HolidayRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            HolidayRule::NthWeekday { month, weekday, n } => {
                NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
            }
            HolidayRule::LastWeekday { month, weekday } => {
                let mut date = last_day_of_month(year, month)?;
                while date.weekday() != weekday {
                    date = date.pred_opt()?;
                }
                Some(date)
            }
        }
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// A named holiday with its date rule
#[derive(Debug, Clone)]
pub struct Holiday {
    pub name: &'static str,
    pub rule: HolidayRule,
}

/// The ten U.S. federal holidays
pub fn federal_holidays() -> Vec<Holiday> {
    use HolidayRule::*;
    use Weekday::*;
    vec![
        Holiday { name: "New Year's Day", rule: Fixed { month: 1, day: 1 } },
        Holiday { name: "Martin Luther King Jr. Day", rule: NthWeekday { month: 1, weekday: Mon, n: 3 } },
        Holiday { name: "Presidents' Day", rule: NthWeekday { month: 2, weekday: Mon, n: 3 } },
        Holiday { name: "Memorial Day", rule: LastWeekday { month: 5, weekday: Mon } },
        Holiday { name: "Independence Day", rule: Fixed { month: 7, day: 4 } },
        Holiday { name: "Labor Day", rule: NthWeekday { month: 9, weekday: Mon, n: 1 } },
        Holiday { name: "Columbus Day", rule: NthWeekday { month: 10, weekday: Mon, n: 2 } },
        Holiday { name: "Veterans Day", rule: Fixed { month: 11, day: 11 } },
        Holiday { name: "Thanksgiving Day", rule: NthWeekday { month: 11, weekday: Thu, n: 4 } },
        Holiday { name: "Christmas Day", rule: Fixed { month: 12, day: 25 } },
    ]
}

/// Which adjacent day(s) to take off around a holiday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LongWeekendAdvice {
    /// Holiday lands Monday or Thursday
    TakeFriday,
    /// Holiday lands Tuesday or Friday
    TakeMonday,
    /// Midweek holiday: bridge the rest of the week
    TakeThursdayAndFriday,
    /// Already on a weekend; no long weekend to build
    FallsOnWeekend,
}

impl LongWeekendAdvice {
    pub fn for_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon | Weekday::Thu => LongWeekendAdvice::TakeFriday,
            Weekday::Tue | Weekday::Fri => LongWeekendAdvice::TakeMonday,
            Weekday::Wed => LongWeekendAdvice::TakeThursdayAndFriday,
            Weekday::Sat | Weekday::Sun => LongWeekendAdvice::FallsOnWeekend,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LongWeekendAdvice::TakeFriday => "Take Friday off for a 4-day weekend.",
            LongWeekendAdvice::TakeMonday => "Take Monday off for a 4-day weekend.",
            LongWeekendAdvice::TakeThursdayAndFriday => {
                "Take Thursday and Friday for a 5-day weekend."
            }
            LongWeekendAdvice::FallsOnWeekend => {
                "Falls on a weekend. Consider an alternative holiday."
            }
        }
    }
}

/// One holiday's long-weekend suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LongWeekendSuggestion {
    pub holiday: String,
    pub date: NaiveDate,
    pub advice: LongWeekendAdvice,
}

/// Suggest long weekends around every federal holiday in the year
pub fn suggest_long_weekends(year: i32) -> Vec<LongWeekendSuggestion> {
    federal_holidays()
        .iter()
        .filter_map(|holiday| {
            let date = holiday.rule.resolve(year)?;
            Some(LongWeekendSuggestion {
                holiday: holiday.name.to_string(),
                date,
                advice: LongWeekendAdvice::for_weekday(date.weekday()),
            })
        })
        .collect()
}
