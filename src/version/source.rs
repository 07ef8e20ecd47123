//! Current-version sources
//!
//! The resolution engine never owns the current version. It polls a
//! [`VersionSource`] each time it resolves, so a pushed update is observed on
//! the next resolution and never before.

use std::sync::{Arc, PoisonError, RwLock};

#[cfg(test)]
use mockall::automock;
use tokio::sync::watch;

/// Trait for reading the live current version
#[cfg_attr(test, automock)]
pub trait VersionSource: Send + Sync {
    /// Latest known version, or None if none has been produced yet
    fn current_version(&self) -> Option<String>;
}

/// A version that never changes
#[derive(Debug, Clone, Default)]
pub struct FixedVersion(Option<String>);

impl FixedVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(Some(version.into()))
    }

    /// A source that never produces a version
    pub fn unset() -> Self {
        Self(None)
    }
}

impl VersionSource for FixedVersion {
    fn current_version(&self) -> Option<String> {
        self.0.clone()
    }
}

/// A settable version shared between its owner and any number of readers
#[derive(Debug, Clone, Default)]
pub struct SharedVersion {
    inner: Arc<RwLock<Option<String>>>,
}

impl SharedVersion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, version: impl Into<String>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(version.into());
    }

    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl VersionSource for SharedVersion {
    fn current_version(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Versions pushed through a watch channel, e.g. by a background task
impl VersionSource for watch::Receiver<Option<String>> {
    fn current_version(&self) -> Option<String> {
        self.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_version_returns_value() {
        assert_eq!(
            FixedVersion::new("1.2.3").current_version(),
            Some("1.2.3".to_string())
        );
        assert_eq!(FixedVersion::unset().current_version(), None);
    }

    #[test]
    fn shared_version_is_observed_by_clones() {
        let writer = SharedVersion::new();
        let reader = writer.clone();
        assert_eq!(reader.current_version(), None);

        writer.set("2.0.0");
        assert_eq!(reader.current_version(), Some("2.0.0".to_string()));

        writer.clear();
        assert_eq!(reader.current_version(), None);
    }

    #[tokio::test]
    async fn watch_receiver_reflects_pushed_values() {
        let (tx, rx) = watch::channel(None);
        assert_eq!(rx.current_version(), None);

        let pusher = tokio::spawn(async move {
            tx.send(Some("3.1.0".to_string())).unwrap();
            tx
        });
        let _tx = pusher.await.unwrap();

        assert_eq!(rx.current_version(), Some("3.1.0".to_string()));
    }
}
