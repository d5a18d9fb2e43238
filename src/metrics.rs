//! Counter capability handed to the order service
//!
//! The service only knows `MetricsSink::increment`. Which backend sits
//! behind it (in-process registry, exporter, nothing) is decided at
//! startup.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Incremented once per successfully created order
pub const ORDERS_CREATED_TOTAL: &str = "orders_total";

pub trait MetricsSink: Send + Sync {
    fn increment(&self, counter: &'static str);
}

/// In-process counter registry, one atomic per counter name.
#[derive(Default)]
pub struct CounterRegistry {
    counters: DashMap<&'static str, AtomicU64>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value; 0 for a counter never incremented.
    pub fn get(&self, counter: &str) -> u64 {
        self.counters
            .get(counter)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// All counters, sorted by name
    pub fn snapshot(&self) -> Vec<(&'static str, u64)> {
        let mut out: Vec<_> = self
            .counters
            .iter()
            .map(|entry| (*entry.key(), entry.value().load(Ordering::Relaxed)))
            .collect();
        out.sort_unstable_by_key(|(name, _)| *name);
        out
    }
}

impl MetricsSink for CounterRegistry {
    fn increment(&self, counter: &'static str) {
        self.counters
            .entry(counter)
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }
}

/// Discards every increment
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn increment(&self, _counter: &'static str) {}
}
