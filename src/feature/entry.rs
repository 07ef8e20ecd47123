//! Version-gated feature entries

/// One implementation of a feature slot, applicable on `[min_version, max_version)`
///
/// The implementation handle is opaque: it is stored and handed back, never
/// inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureEntry<H> {
    pub key: String,
    pub min_version: Option<String>,
    pub max_version: Option<String>,
    pub implementation: H,
}

impl<H> FeatureEntry<H> {
    /// Entry applicable to every version
    pub fn new(key: impl Into<String>, implementation: H) -> Self {
        Self {
            key: key.into(),
            min_version: None,
            max_version: None,
            implementation,
        }
    }

    /// Inclusive lower bound; an empty string means unbounded
    pub fn min_version(mut self, version: impl Into<String>) -> Self {
        self.min_version = non_empty(version.into());
        self
    }

    /// Exclusive upper bound; an empty string means unbounded
    pub fn max_version(mut self, version: impl Into<String>) -> Self {
        self.max_version = non_empty(version.into());
        self
    }

    /// Lower bound, treating an empty string as absent
    pub fn lower_bound(&self) -> Option<&str> {
        self.min_version.as_deref().filter(|v| !v.is_empty())
    }

    /// Upper bound, treating an empty string as absent
    pub fn upper_bound(&self) -> Option<&str> {
        self.max_version.as_deref().filter(|v| !v.is_empty())
    }
}

fn non_empty(version: String) -> Option<String> {
    (!version.is_empty()).then_some(version)
}
