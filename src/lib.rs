//! Version-gated feature resolution
//!
//! Several implementations of one feature slot can coexist, each applicable on
//! a `[min_version, max_version)` window. Given the current version (a
//! semantic version or a formatted date), the registry picks the single best
//! implementation.
//!
//! ```
//! use std::sync::Arc;
//!
//! use version_view::feature::{FeatureEntry, FeatureView};
//! use version_view::version::semantic::SemanticStrategy;
//! use version_view::version::source::SharedVersion;
//!
//! let version = SharedVersion::new();
//! let view = FeatureView::new(Box::new(SemanticStrategy::new()), Arc::new(version.clone()));
//! view.register_many([
//!     FeatureEntry::new("checkout", "CheckoutV1").max_version("2.0.0"),
//!     FeatureEntry::new("checkout", "CheckoutV2").min_version("2.0.0"),
//! ]);
//!
//! assert_eq!(view.resolve("checkout"), None);
//! version.set("2.1.0");
//! assert_eq!(view.resolve("checkout"), Some("CheckoutV2"));
//! ```

pub mod config;
pub mod feature;
pub mod logging;
pub mod version;
