//! Geolocation Provider Port
//!
//! Defines the interface for obtaining the pre-resolved country of a request.

use crate::domain::value_objects::CountryCode;

/// Source of the geolocation-resolved country for a request.
///
/// This is an outbound port that abstracts the external geolocation
/// collaborator. Actual IP-to-country lookup happens upstream (a fronting
/// proxy or web server); implementations only surface its result, as a raw
/// forwarded value. A failed upstream resolution must surface as the
/// `NOT_SET` sentinel, never as an error.
pub trait GeoProvider: Send + Sync {
    /// Produce the country for a request given the raw value the upstream
    /// forwarded (if any).
    fn resolve(&self, upstream: Option<&str>) -> CountryCode;
}
