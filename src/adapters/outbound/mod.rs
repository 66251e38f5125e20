mod dashmap_decision_metrics;
mod upstream_geo_provider;

pub use dashmap_decision_metrics::DashMapDecisionMetrics;
pub use upstream_geo_provider::{FixedGeoProvider, UpstreamGeoProvider};
