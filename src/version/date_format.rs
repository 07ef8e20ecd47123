//! Supported date layouts for date-based version tokens
//!
//! Each layout has an exact grammar: two digits for day and month, four for
//! the year, and a fixed separator (`.` or `-`).

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use regex::{Captures, Regex};

use crate::version::error::StrategyError;

/// A date layout accepted by [`crate::version::date::DateStrategy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `dd.MM.yyyy`
    DayMonthYearDot,
    /// `MM.dd.yyyy`
    #[default]
    MonthDayYearDot,
    /// `yyyy.MM.dd`
    YearMonthDayDot,
    /// `yyyy-MM-dd`
    YearMonthDayDash,
    /// `MM-dd-yyyy`
    MonthDayYearDash,
    /// `dd-MM-yyyy`
    DayMonthYearDash,
}

/// Position of each date component in the capture groups
#[derive(Debug, Clone, Copy)]
enum FieldOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

impl DateFormat {
    pub const ALL: [DateFormat; 6] = [
        DateFormat::DayMonthYearDot,
        DateFormat::MonthDayYearDot,
        DateFormat::YearMonthDayDot,
        DateFormat::YearMonthDayDash,
        DateFormat::MonthDayYearDash,
        DateFormat::DayMonthYearDash,
    ];

    /// Returns the literal identifier of this format (e.g. `yyyy-MM-dd`)
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYearDot => "dd.MM.yyyy",
            DateFormat::MonthDayYearDot => "MM.dd.yyyy",
            DateFormat::YearMonthDayDot => "yyyy.MM.dd",
            DateFormat::YearMonthDayDash => "yyyy-MM-dd",
            DateFormat::MonthDayYearDash => "MM-dd-yyyy",
            DateFormat::DayMonthYearDash => "dd-MM-yyyy",
        }
    }

    /// Comma-separated list of every supported identifier
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(DateFormat::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn separator(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYearDot
            | DateFormat::MonthDayYearDot
            | DateFormat::YearMonthDayDot => r"\.",
            DateFormat::YearMonthDayDash
            | DateFormat::MonthDayYearDash
            | DateFormat::DayMonthYearDash => "-",
        }
    }

    fn field_order(&self) -> FieldOrder {
        match self {
            DateFormat::DayMonthYearDot | DateFormat::DayMonthYearDash => FieldOrder::DayMonthYear,
            DateFormat::MonthDayYearDot | DateFormat::MonthDayYearDash => FieldOrder::MonthDayYear,
            DateFormat::YearMonthDayDot | DateFormat::YearMonthDayDash => FieldOrder::YearMonthDay,
        }
    }

    /// Build the anchored grammar for this format
    pub(crate) fn pattern(&self) -> Regex {
        let sep = self.separator();
        let pattern = match self.field_order() {
            FieldOrder::YearMonthDay => format!(r"^(\d{{4}}){sep}(\d{{2}}){sep}(\d{{2}})$"),
            FieldOrder::DayMonthYear | FieldOrder::MonthDayYear => {
                format!(r"^(\d{{2}}){sep}(\d{{2}}){sep}(\d{{4}})$")
            }
        };
        Regex::new(&pattern).expect("date format grammar is a valid regex")
    }

    /// Turn the captures of [`DateFormat::pattern`] into a calendar date
    ///
    /// Out-of-range months and days roll over into the following (or, for
    /// `00`, the preceding) period: `2024-02-30` is 2024-03-01 and
    /// `2024-13-01` is 2025-01-01.
    pub(crate) fn build_date(&self, caps: &Captures<'_>) -> Option<NaiveDate> {
        let field = |i: usize| -> Option<u32> { caps.get(i)?.as_str().parse().ok() };
        let (year, month, day) = match self.field_order() {
            FieldOrder::DayMonthYear => (field(3)?, field(2)?, field(1)?),
            FieldOrder::MonthDayYear => (field(3)?, field(1)?, field(2)?),
            FieldOrder::YearMonthDay => (field(1)?, field(2)?, field(3)?),
        };
        rolled_over_date(i32::try_from(year).ok()?, month, day)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFormat {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| StrategyError::InvalidDateFormat {
                format: s.to_string(),
            })
    }
}

/// Date `day` days into month `month` of `year`, both counted from 1
///
/// Month or day `0` steps back one period, larger values carry forward.
fn rolled_over_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let month_start = match month {
        0 => start.checked_sub_months(Months::new(1))?,
        m => start.checked_add_months(Months::new(m - 1))?,
    };
    match day {
        0 => month_start.checked_sub_days(Days::new(1)),
        d => month_start.checked_add_days(Days::new(u64::from(d - 1))),
    }
}

/// Returns true if `format` is one of the supported identifiers
pub fn is_valid_date_format(format: &str) -> bool {
    format.parse::<DateFormat>().is_ok()
}
