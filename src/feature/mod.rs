//! Feature registration and resolution layer
//!
//! # Modules
//!
//! - [`entry`]: A version-gated implementation of a feature slot
//! - [`registry`]: Registry with best-match resolution and its cache
//! - [`view`]: Façade binding a registry to a live current version
//! - [`route`]: Choosing among version-specific routes

pub mod entry;
pub mod registry;
pub mod route;
pub mod view;

pub use entry::FeatureEntry;
pub use registry::FeatureRegistry;
pub use route::{RouteDecision, RouteVersion};
pub use view::FeatureView;
