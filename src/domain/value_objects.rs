//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::Serialize;

/// Marker value meaning "no country could be resolved".
pub const NOT_SET: &str = "NOT_SET";

/// A resolved country code (ISO 3166-1 alpha-2) or the `NOT_SET` sentinel.
///
/// Codes are normalized to uppercase on construction. No validation against
/// an ISO list is performed; codes outside the known locale buckets fall
/// through to the default bucket during decisioning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Build a code from a raw request value.
    ///
    /// Trims and uppercases the input; empty or absent input yields the
    /// sentinel. Never fails.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => Self(s.to_uppercase()),
            _ => Self::not_set(),
        }
    }

    /// The unresolved sentinel.
    pub fn not_set() -> Self {
        Self(NOT_SET.to_string())
    }

    /// Whether this code carries an actual resolution.
    pub fn is_resolved(&self) -> bool {
        self.0 != NOT_SET
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::not_set()
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locale bucket: a group of country codes sharing one redirect target.
///
/// This is the single mapping from country to locale. Adding a market means
/// adding one arm to [`LocaleBucket::from_country`] and, if it is a new
/// bucket, one path in [`LocaleBucket::path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LocaleBucket {
    /// Default/home locale, served in place (US market).
    Home,
    /// UK locale (/uk/) - also the catch-all for unknown or unresolved codes.
    Uk,
    /// German market (/de/).
    De,
    /// French-speaking market (/fr/) - France and Luxembourg.
    Fr,
    /// Australian market (/au/).
    Au,
}

impl LocaleBucket {
    /// Map a country code to its locale bucket.
    ///
    /// Unknown codes and the `NOT_SET` sentinel land in the UK bucket:
    /// unresolved geolocation deliberately degrades to the UK locale rather
    /// than to the US default.
    ///
    /// AT, CH, IT, ES and LI are deliberately not grouped with DE; their
    /// bucket membership is unconfirmed, so they take the catch-all.
    pub fn from_country(country: &CountryCode) -> Self {
        match country.as_str() {
            "US" => Self::Home,
            "DE" => Self::De,
            "FR" | "LU" => Self::Fr,
            "AU" => Self::Au,
            _ => Self::Uk,
        }
    }

    /// Locale path prefix this bucket redirects to, or None for the home
    /// locale which is served in place.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Uk => Some("/uk/"),
            Self::De => Some("/de/"),
            Self::Fr => Some("/fr/"),
            Self::Au => Some("/au/"),
        }
    }
}

/// Outcome of one redirect evaluation.
///
/// Produced fresh per evaluation; never cached. Exactly one variant holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "path", rename_all = "snake_case")]
pub enum RedirectDecision {
    /// Serve content in place.
    NoRedirect,
    /// Issue an HTTP redirect to the given locale path.
    RedirectTo(&'static str),
}

impl RedirectDecision {
    /// Label used for per-decision metrics keys.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoRedirect => "no_redirect",
            Self::RedirectTo(path) => path,
        }
    }
}
