//! Decision Metrics Port
//!
//! Defines the interface for counting redirect decisions.

use crate::domain::value_objects::RedirectDecision;
use std::collections::HashMap;

/// Store for per-decision counters.
///
/// This is an outbound port for tracking how often each locale bucket is
/// chosen. The debug endpoint surfaces these counters; the decision engine
/// itself never reads them.
pub trait DecisionMetrics: Send + Sync {
    /// Count one evaluation outcome.
    fn record(&self, decision: &RedirectDecision);

    /// Get the current count for a decision.
    fn count(&self, decision: &RedirectDecision) -> u64;

    /// Snapshot of all counters, keyed by decision label.
    fn snapshot(&self) -> HashMap<String, u64>;
}
