//! Upstream Geolocation Providers
//!
//! Implements GeoProvider over the value a fronting proxy or web server
//! forwards with each request, plus a fixed provider for local testing.

use crate::domain::ports::GeoProvider;
use crate::domain::value_objects::CountryCode;

/// Geolocation provider backed by the upstream-forwarded value.
///
/// The fronting layer performs the actual IP-to-country lookup and injects
/// the result (header or CGI-style variable); this adapter only normalizes
/// it. An absent or empty value yields the `NOT_SET` sentinel.
pub struct UpstreamGeoProvider;

impl UpstreamGeoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UpstreamGeoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoProvider for UpstreamGeoProvider {
    fn resolve(&self, upstream: Option<&str>) -> CountryCode {
        CountryCode::from_raw(upstream)
    }
}

/// Geolocation provider that always reports one country.
///
/// Used for local runs without a fronting geolocation layer, so every
/// request resolves as if it came from the configured country.
pub struct FixedGeoProvider {
    country: CountryCode,
}

impl FixedGeoProvider {
    pub fn new(country: CountryCode) -> Self {
        Self { country }
    }
}

impl GeoProvider for FixedGeoProvider {
    fn resolve(&self, _upstream: Option<&str>) -> CountryCode {
        self.country.clone()
    }
}
