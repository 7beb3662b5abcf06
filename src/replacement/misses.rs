use serde::Serialize;
use std::collections::BTreeMap;

/// Counts lookups that found no Hindi equivalent, keyed either by a bare
/// column name (column absent from the reference table) or by
/// `"<column> - <value>"` (no row matched the value). Created empty at the
/// start of a run, mutated throughout, serialized once at the end.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct MissTracker {
    counts: BTreeMap<String, u64>,
}

impl MissTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `key`, starting it at 1 if absent.
    pub fn record(&mut self, key: &str) {
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
