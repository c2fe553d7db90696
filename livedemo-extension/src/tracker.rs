//! Per-registration record of script URLs already emitted.

use std::collections::HashSet;

/// Remembers which external script URLs were already included.
///
/// The set only grows; there is no expiry and nothing is persisted.
#[derive(Debug, Default)]
pub struct ScriptTracker {
    loaded: HashSet<String>,
}

impl ScriptTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `url` has not been included yet.
    pub fn should_include(&self, url: &str) -> bool {
        !self.loaded.contains(url)
    }

    pub fn mark_included(&mut self, url: &str) {
        self.loaded.insert(url.to_string());
    }

    /// Check-and-set: true exactly once per distinct `url`.
    pub fn claim(&mut self, url: &str) -> bool {
        self.loaded.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}
