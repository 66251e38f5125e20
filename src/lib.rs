//! georedirect Library
//!
//! Country-based locale-redirect decision engine for a multi-regional web
//! property. This module exposes the components for use in integration
//! tests and as a library.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use application::{Evaluation, RawRequest, RedirectService};
pub use config::{load_config, Config};
pub use domain::entities::RequestSignals;
pub use domain::ports::{DecisionMetrics, GeoProvider};
pub use domain::services::RedirectResolver;
pub use domain::value_objects::{CountryCode, LocaleBucket, RedirectDecision};
