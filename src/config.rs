use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::WyrmseekResult;
use crate::keymap::Shortcut;

/// Tuning knobs for the search surface.
///
/// A host application can embed this in its own configuration file; every
/// field has a sensible default so a partial (or absent) section works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchTuning {
    /// Milliseconds to wait after the last keystroke before searching.
    pub debounce_ms: u64,
    /// Upper bound on the merged result list.
    pub max_results: usize,
    /// Score at or below which a record is considered a match (0 = exact).
    pub score_threshold: f64,
    /// Binding that toggles the search surface from anywhere.
    pub open_shortcut: String,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            debounce_ms: 150,
            max_results: 12,
            score_threshold: 0.3,
            open_shortcut: "ctrl+k".to_string(),
        }
    }
}

impl SearchTuning {
    /// Clamp values to acceptable ranges
    pub fn validate(&mut self) {
        self.debounce_ms = self.debounce_ms.min(1000);
        self.max_results = self.max_results.clamp(1, 50);
        self.score_threshold = self.score_threshold.clamp(0.0, 1.0);
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parse the configured toggle binding
    pub fn shortcut(&self) -> WyrmseekResult<Shortcut> {
        self.open_shortcut.parse()
    }
}
