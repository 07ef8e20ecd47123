//! Version comparison abstraction shared by the semantic and date strategies

use std::cmp::Ordering;

use crate::version::date::DateStrategy;
use crate::version::error::StrategyError;
use crate::version::semantic::SemanticStrategy;

/// Trait for comparing two version tokens under one interpretation
///
/// Tokens are only ever compared by the strategy that owns them:
/// - Semantic: dot-separated numbers (`1.2.3`)
/// - Date: calendar dates in a fixed layout (`2024-01-31`)
///
/// Implementations memoize their results, so comparison takes `&mut self`.
pub trait VersionStrategy: Send {
    /// Compare `a` to `b`
    ///
    /// Never fails: tokens a strategy cannot interpret degrade to a
    /// well-defined fallback value.
    fn compare(&mut self, a: &str, b: &str) -> Ordering;

    /// `a >= b`
    fn gte(&mut self, a: &str, b: &str) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// `a < b`
    fn lt(&mut self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Drop every memoized result
    fn clear_cache(&mut self);
}

/// Which strategy interprets version tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Semantic,
    Date,
}

/// Build the strategy for `kind`
///
/// `date_format` is only read for [`StrategyKind::Date`]; when absent the
/// default layout is used. An unsupported identifier fails construction.
pub fn build_strategy(
    kind: StrategyKind,
    date_format: Option<&str>,
) -> Result<Box<dyn VersionStrategy>, StrategyError> {
    match kind {
        StrategyKind::Semantic => Ok(Box::new(SemanticStrategy::new())),
        StrategyKind::Date => {
            let strategy = match date_format {
                Some(format) => DateStrategy::try_new(format)?,
                None => DateStrategy::default(),
            };
            Ok(Box::new(strategy))
        }
    }
}
