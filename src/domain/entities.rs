//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the redirect domain.
//! They have no external dependencies and contain only business logic.

use crate::domain::value_objects::CountryCode;
use serde::Serialize;

/// Crawler signature checked against the user-agent.
///
/// This is an explicit, narrow rule: only Googlebot is exempted. It is not a
/// general bot-detection system.
const CRAWLER_SIGNATURE: &str = "googlebot";

/// Snapshot of the request attributes the decision engine cares about.
///
/// Constructed once per request at the HTTP boundary and passed by value
/// into the pure core. Three independent override/resolution channels feed
/// the effective country; the user-agent feeds crawler detection.
#[derive(Debug, Clone, Serialize)]
pub struct RequestSignals {
    /// `?country=XX` query override, if present.
    pub query_country: Option<String>,
    /// Test header override (e.g. `X-Test-Country`), if present.
    pub header_country: Option<String>,
    /// Country pre-resolved by the upstream geolocation provider.
    pub geo_country: CountryCode,
    /// Raw user-agent header value.
    pub user_agent: String,
}

impl RequestSignals {
    /// Build signals from raw request attributes.
    ///
    /// All inputs are optional; absent values coerce to safe defaults.
    /// Extraction never fails.
    pub fn new(
        query_country: Option<&str>,
        header_country: Option<&str>,
        geo_country: CountryCode,
        user_agent: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            query_country: non_empty(query_country),
            header_country: non_empty(header_country),
            geo_country,
            user_agent: user_agent.unwrap_or_default().to_string(),
        }
    }

    /// Resolve the effective country code.
    ///
    /// Precedence, first match wins:
    /// 1. query override
    /// 2. test header override
    /// 3. geolocation result (unless sentinel)
    /// 4. the `NOT_SET` sentinel
    ///
    /// The override channels exist so integration tests can force any
    /// country deterministically; production traffic carries no overrides
    /// and falls through to genuine geolocation.
    pub fn effective_country(&self) -> CountryCode {
        if let Some(q) = &self.query_country {
            return CountryCode::from_raw(Some(q));
        }
        if let Some(h) = &self.header_country {
            return CountryCode::from_raw(Some(h));
        }
        if self.geo_country.is_resolved() {
            return self.geo_country.clone();
        }
        CountryCode::not_set()
    }

    /// Whether the user-agent identifies a search-engine crawler.
    ///
    /// Case-insensitive substring match, true/false only.
    pub fn is_crawler(&self) -> bool {
        self.user_agent.to_lowercase().contains(CRAWLER_SIGNATURE)
    }
}

impl Default for RequestSignals {
    fn default() -> Self {
        Self::new(None, None, CountryCode::not_set(), None)
    }
}
