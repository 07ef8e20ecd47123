//! Version interpretation layer
//!
//! This module provides the comparison strategies used to decide whether a
//! current version falls inside a feature's applicability window, and the
//! sources the current version is read from.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│  Registry   │────▶│  Strategy   │
//! │ (current v) │     │  (feature)  │     │ (compare)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                     ┌──────────┴──────────┐
//!                                     ▼                     ▼
//!                              ┌─────────────┐       ┌─────────────┐
//!                              │  Semantic   │       │    Date     │
//!                              │  (1.2.3)    │       │(yyyy-MM-dd) │
//!                              └─────────────┘       └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`strategy`]: `VersionStrategy` trait and construction from configuration
//! - [`semantic`]: Dot-separated numeric versions
//! - [`date`]: Date-based versions
//! - [`date_format`]: The supported date layouts
//! - [`source`]: Current-version sources
//! - [`error`]: Error types for strategy construction and configuration

pub mod date;
pub mod date_format;
pub mod error;
pub mod semantic;
pub mod source;
pub mod strategy;
