//! Redirect Resolver Service
//!
//! Pure domain logic for mapping an effective country and crawler flag to a
//! redirect decision. This service has NO external dependencies - it's pure
//! Rust.

use crate::domain::value_objects::{CountryCode, LocaleBucket, RedirectDecision};

/// Redirect resolver: a single-step total function over
/// (country, crawler-flag) into the locale decision set.
///
/// Rule order:
/// 1. Crawlers never redirect, regardless of country. Search-engine bots
///    must always see the canonical/default-locale content so indexing is
///    not fragmented by geographic redirects.
/// 2. Otherwise the country's locale bucket decides: the home bucket serves
///    in place, every other bucket redirects to its locale path.
///
/// The resolver is stateless, deterministic and idempotent; every possible
/// input yields exactly one decision.
pub struct RedirectResolver;

impl RedirectResolver {
    /// Decide whether the request redirects, and to which locale path.
    ///
    /// # Example
    /// ```
    /// use georedirect::domain::services::RedirectResolver;
    /// use georedirect::domain::value_objects::{CountryCode, RedirectDecision};
    ///
    /// let de = CountryCode::from_raw(Some("DE"));
    /// assert_eq!(
    ///     RedirectResolver::decide(&de, false),
    ///     RedirectDecision::RedirectTo("/de/")
    /// );
    /// // Crawler exemption overrides the country bucket.
    /// assert_eq!(RedirectResolver::decide(&de, true), RedirectDecision::NoRedirect);
    /// ```
    pub fn decide(country: &CountryCode, is_crawler: bool) -> RedirectDecision {
        if is_crawler {
            return RedirectDecision::NoRedirect;
        }

        match LocaleBucket::from_country(country).path() {
            Some(path) => RedirectDecision::RedirectTo(path),
            None => RedirectDecision::NoRedirect,
        }
    }
}
