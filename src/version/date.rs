//! Date-based versions (`2024-01-31`, `31.01.2024`, ...)
//!
//! Tokens are parsed with the configured [`DateFormat`]. Out-of-range months
//! and days roll over (`2024-02-30` is 2024-03-01). A token that does not
//! match the grammar is reported and compared as the earliest representable
//! date.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use regex::Regex;
use tracing::error;

use crate::version::date_format::DateFormat;
use crate::version::error::StrategyError;
use crate::version::strategy::VersionStrategy;

/// Value used for tokens that fail to parse
pub const UNPARSEABLE_DATE: NaiveDate = NaiveDate::MIN;

#[derive(Debug)]
pub struct DateStrategy {
    format: DateFormat,
    pattern: Regex,
    compare_cache: HashMap<(String, String), Ordering>,
    date_cache: HashMap<String, NaiveDate>,
}

impl DateStrategy {
    pub fn new(format: DateFormat) -> Self {
        Self {
            format,
            pattern: format.pattern(),
            compare_cache: HashMap::new(),
            date_cache: HashMap::new(),
        }
    }

    /// Create a strategy from a format identifier such as `yyyy-MM-dd`
    pub fn try_new(format: &str) -> Result<Self, StrategyError> {
        Ok(Self::new(format.parse()?))
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    /// Switch to another layout; memoized results of the old one are dropped
    pub fn set_date_format(&mut self, format: DateFormat) {
        self.format = format;
        self.pattern = format.pattern();
        self.clear_cache();
    }

    /// Number of memoized comparisons
    pub fn cached_comparisons(&self) -> usize {
        self.compare_cache.len()
    }

    /// Number of memoized token parses
    pub fn cached_dates(&self) -> usize {
        self.date_cache.len()
    }

    /// Parse `token`, falling back to [`UNPARSEABLE_DATE`]
    pub fn parse_date(&mut self, token: &str) -> NaiveDate {
        if let Some(&date) = self.date_cache.get(token) {
            return date;
        }

        let date = self
            .pattern
            .captures(token)
            .and_then(|caps| self.format.build_date(&caps))
            .unwrap_or_else(|| {
                error!(
                    "Failed to parse date {:?}: expected format {}",
                    token, self.format
                );
                UNPARSEABLE_DATE
            });

        self.date_cache.insert(token.to_string(), date);
        date
    }
}

impl Default for DateStrategy {
    fn default() -> Self {
        Self::new(DateFormat::default())
    }
}

impl VersionStrategy for DateStrategy {
    fn compare(&mut self, a: &str, b: &str) -> Ordering {
        if let Some(&cached) = self.compare_cache.get(&(a.to_string(), b.to_string())) {
            return cached;
        }

        let date_a = self.parse_date(a);
        let date_b = self.parse_date(b);
        let result = date_a.cmp(&date_b);

        self.compare_cache
            .insert((a.to_string(), b.to_string()), result);
        result
    }

    fn clear_cache(&mut self) {
        self.compare_cache.clear();
        self.date_cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DateFormat::YearMonthDayDash, "2024-01-01", "2024-01-02", Ordering::Less)]
    #[case(DateFormat::YearMonthDayDash, "2024-03-01", "2023-12-31", Ordering::Greater)]
    #[case(DateFormat::YearMonthDayDash, "2024-03-01", "2024-03-01", Ordering::Equal)]
    #[case(DateFormat::DayMonthYearDot, "01.03.2024", "29.02.2024", Ordering::Greater)]
    #[case(DateFormat::MonthDayYearDot, "03.01.2024", "02.29.2024", Ordering::Greater)]
    #[case(DateFormat::YearMonthDayDot, "2023.12.31", "2024.01.01", Ordering::Less)]
    #[case(DateFormat::MonthDayYearDash, "12-31-2023", "01-01-2024", Ordering::Less)]
    #[case(DateFormat::DayMonthYearDash, "31-12-2023", "01-01-2024", Ordering::Less)]
    fn compare_returns_expected(
        #[case] format: DateFormat,
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        let mut strategy = DateStrategy::new(format);
        assert_eq!(strategy.compare(a, b), expected);
    }

    #[rstest]
    #[case("2024/01/01")] // wrong separator
    #[case("24-01-01")] // short year
    #[case("")]
    fn malformed_token_sorts_before_any_valid_date(#[case] malformed: &str) {
        let mut strategy = DateStrategy::new(DateFormat::YearMonthDayDash);

        assert_eq!(strategy.compare(malformed, "0001-01-01"), Ordering::Less);
        assert_eq!(strategy.compare("0001-01-01", malformed), Ordering::Greater);
        assert_eq!(strategy.parse_date(malformed), UNPARSEABLE_DATE);
    }

    #[rstest]
    #[case("2024-02-30", "2024-03-01", Ordering::Equal)]
    #[case("2024-02-30", "2024-02-01", Ordering::Greater)]
    #[case("2024-13-01", "2025-01-01", Ordering::Equal)]
    #[case("2024-12-32", "2024-12-31", Ordering::Greater)]
    fn out_of_range_fields_roll_over(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        let mut strategy = DateStrategy::new(DateFormat::YearMonthDayDash);

        assert_eq!(strategy.compare(a, b), expected);
        assert_ne!(strategy.parse_date(a), UNPARSEABLE_DATE);
    }

    #[test]
    fn malformed_tokens_compare_equal_to_each_other() {
        let mut strategy = DateStrategy::new(DateFormat::YearMonthDayDash);
        assert_eq!(strategy.compare("garbage", "2024/01/01"), Ordering::Equal);
    }

    #[test]
    fn try_new_rejects_unknown_format() {
        let err = DateStrategy::try_new("YYYY-MM-DD").unwrap_err();
        assert_eq!(
            err,
            StrategyError::InvalidDateFormat {
                format: "YYYY-MM-DD".to_string()
            }
        );
    }

    #[test]
    fn parse_results_are_memoized_separately_from_comparisons() {
        let mut strategy = DateStrategy::new(DateFormat::YearMonthDayDash);

        strategy.compare("2024-01-01", "2024-02-01");
        strategy.compare("2024-02-01", "2024-01-01");

        assert_eq!(strategy.cached_comparisons(), 2);
        assert_eq!(strategy.cached_dates(), 2);
    }

    #[test]
    fn clear_cache_empties_both_caches() {
        let mut strategy = DateStrategy::new(DateFormat::YearMonthDayDash);
        strategy.compare("2024-01-01", "bogus");

        strategy.clear_cache();

        assert_eq!(strategy.cached_comparisons(), 0);
        assert_eq!(strategy.cached_dates(), 0);
    }

    #[test]
    fn set_date_format_reinterprets_tokens() {
        let mut strategy = DateStrategy::new(DateFormat::MonthDayYearDot);
        assert_eq!(strategy.compare("01.02.2024", "02.01.2024"), Ordering::Less);

        strategy.set_date_format(DateFormat::DayMonthYearDot);

        assert_eq!(strategy.format(), DateFormat::DayMonthYearDot);
        assert_eq!(strategy.compare("01.02.2024", "02.01.2024"), Ordering::Greater);
    }
}
