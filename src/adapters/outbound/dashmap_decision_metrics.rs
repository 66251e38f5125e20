//! DashMap Decision Metrics
//!
//! Implements DecisionMetrics using DashMap for lock-free concurrent access.

use crate::domain::ports::DecisionMetrics;
use crate::domain::value_objects::RedirectDecision;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// DashMap-backed decision counters.
///
/// Each decision label (locale path or `no_redirect`) has its own atomic
/// counter, so recording from concurrent requests needs no locking.
pub struct DashMapDecisionMetrics {
    counters: DashMap<&'static str, AtomicU64>,
}

impl DashMapDecisionMetrics {
    /// Create a new metrics store.
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }
}

impl Default for DashMapDecisionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionMetrics for DashMapDecisionMetrics {
    fn record(&self, decision: &RedirectDecision) {
        self.counters
            .entry(decision.label())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    fn count(&self, decision: &RedirectDecision) -> u64 {
        self.counters
            .get(decision.label())
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn snapshot(&self) -> HashMap<String, u64> {
        self.counters
            .iter()
            .map(|e| (e.key().to_string(), e.value().load(Ordering::Relaxed)))
            .collect()
    }
}
