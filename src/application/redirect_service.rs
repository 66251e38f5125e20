//! Redirect Service - Main application use case
//!
//! Orchestrates one redirect evaluation: building the request signals,
//! resolving the effective country and crawler flag, deciding the redirect,
//! and recording metrics. This is the primary interface for the inbound
//! adapter.

use crate::domain::entities::RequestSignals;
use crate::domain::ports::{DecisionMetrics, GeoProvider};
use crate::domain::services::RedirectResolver;
use crate::domain::value_objects::{CountryCode, RedirectDecision};
use serde::Serialize;
use std::sync::Arc;

/// Raw request attributes as plucked by the inbound adapter.
///
/// Borrowed views into the request; the service copies what it keeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRequest<'a> {
    /// `?country=XX` query parameter value.
    pub query_country: Option<&'a str>,
    /// Test override header value.
    pub header_country: Option<&'a str>,
    /// Raw geolocation value forwarded by the upstream.
    pub upstream_geo: Option<&'a str>,
    /// User-agent header value.
    pub user_agent: Option<&'a str>,
}

/// Full result of one evaluation, including the intermediate signals.
///
/// The decision alone drives the HTTP response; the rest feeds the debug
/// dump.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub signals: RequestSignals,
    pub effective_country: CountryCode,
    pub is_crawler: bool,
    pub decision: RedirectDecision,
}

/// Redirect service - main application use case.
///
/// This service orchestrates the decision flow:
/// 1. Asks the geolocation port for the upstream-resolved country
/// 2. Builds the immutable `RequestSignals` snapshot
/// 3. Runs the pure resolver
/// 4. Records the outcome in the metrics store
pub struct RedirectService {
    geo_provider: Arc<dyn GeoProvider>,
    metrics: Arc<dyn DecisionMetrics>,
}

impl RedirectService {
    /// Create a new redirect service.
    pub fn new(geo_provider: Arc<dyn GeoProvider>, metrics: Arc<dyn DecisionMetrics>) -> Self {
        Self {
            geo_provider,
            metrics,
        }
    }

    /// Evaluate one request.
    ///
    /// This is the main entry point for redirect decisions. It never fails:
    /// absent or malformed attributes coerce to safe defaults and the
    /// resolver is total.
    pub fn evaluate(&self, raw: RawRequest<'_>) -> Evaluation {
        let geo_country = self.geo_provider.resolve(raw.upstream_geo);

        let signals = RequestSignals::new(
            raw.query_country,
            raw.header_country,
            geo_country,
            raw.user_agent,
        );

        let effective_country = signals.effective_country();
        let is_crawler = signals.is_crawler();
        let decision = RedirectResolver::decide(&effective_country, is_crawler);

        self.metrics.record(&decision);

        tracing::debug!(
            country = %effective_country,
            crawler = is_crawler,
            decision = decision.label(),
            "evaluated redirect"
        );

        Evaluation {
            signals,
            effective_country,
            is_crawler,
            decision,
        }
    }

    /// Snapshot of the per-decision counters, for the debug endpoint.
    pub fn metrics_snapshot(&self) -> std::collections::HashMap<String, u64> {
        self.metrics.snapshot()
    }
}
