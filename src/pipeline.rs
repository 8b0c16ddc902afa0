//! Debounced query state.
//!
//! The pipeline tracks what the user typed (`raw`) separately from what the
//! search last ran against (`committed`). Every non-empty edit arms a new
//! debounce generation; only a timer that still carries the newest generation
//! may commit. Timing itself lives with the caller, which keeps this state
//! machine synchronous and easy to test.

/// What the caller should do after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Arm a debounce timer for this generation; commit happens later.
    Debounce(u64),
    /// The edit took effect immediately; refresh results now.
    Commit,
}

#[derive(Debug, Clone, Default)]
pub struct QueryPipeline {
    raw: String,
    committed: String,
    generation: u64,
    pending: Option<u64>,
}

impl QueryPipeline {
    /// Record an edit to the query text.
    ///
    /// Clearing the query commits immediately, so results vanish without
    /// waiting out the debounce window. Anything else bumps the generation
    /// and asks the caller to arm a fresh timer.
    pub fn edit(&mut self, text: String) -> EditOutcome {
        self.raw = text;
        if self.raw.trim().is_empty() {
            self.pending = None;
            self.committed.clear();
            EditOutcome::Commit
        } else {
            self.generation = self.generation.wrapping_add(1);
            self.pending = Some(self.generation);
            EditOutcome::Debounce(self.generation)
        }
    }

    /// A debounce timer fired. Returns true if it was the newest one and the
    /// raw text was committed; stale generations are ignored.
    pub fn timer_elapsed(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            self.committed = self.raw.clone();
            true
        } else {
            false
        }
    }

    /// Drop all query state. The generation counter keeps counting so a
    /// timer armed before the reset can never commit afterwards.
    pub fn reset(&mut self) {
        self.raw.clear();
        self.committed.clear();
        self.pending = None;
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }
}
