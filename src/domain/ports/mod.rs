mod decision_metrics;
mod geo_provider;

pub use decision_metrics::DecisionMetrics;
pub use geo_provider::GeoProvider;
