// In-flight admission gate - at most one outstanding mutation per setting key
//
// Acquiring returns a guard; the key stays marked until the guard is dropped.
// A second acquire for a held key is refused, never queued.

use parking_lot::Mutex;
use std::collections::HashSet;

/// Tracks which setting keys have a mutation awaiting acknowledgment
#[derive(Debug, Default)]
pub struct InFlightGate {
    keys: Mutex<HashSet<String>>,
}

/// Marks a key as in flight until dropped
#[derive(Debug)]
#[must_use = "the key is released as soon as the guard is dropped"]
pub struct InFlightGuard<'a> {
    gate: &'a InFlightGate,
    key: String,
}

impl InFlightGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as in flight, or return None if it already is
    pub fn try_acquire(&self, key: &str) -> Option<InFlightGuard<'_>> {
        let mut keys = self.keys.lock();
        if !keys.insert(key.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            gate: self,
            key: key.to_string(),
        })
    }

    /// Whether a mutation for `key` is outstanding
    pub fn is_held(&self, key: &str) -> bool {
        self.keys.lock().contains(key)
    }
}

impl InFlightGuard<'_> {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.gate.keys.lock().remove(&self.key);
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
