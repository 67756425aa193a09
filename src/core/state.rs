//! # Application State
//!
//! Core business state for Tally. This module contains domain data only -
//! no terminal-specific types. Presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── counters: Vec<Counter>   // ordered (name, count) pairs
//! ├── selected: usize          // index of the highlighted entry
//! └── mode: Mode               // Counting, or waiting on a reset ack
//! ```
//!
//! State changes only happen through `update(state, key)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

/// One tallied entity: a unique name and its signed count.
///
/// Counts have no floor; decrementing past zero is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub count: i64,
}

impl Counter {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// What the next keystroke means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal operation: keys adjust counts and move the selection.
    Counting,
    /// A reset just happened. The next key of any kind dismisses the
    /// notice without doing anything else.
    ResetNotice,
}

pub struct App {
    pub counters: Vec<Counter>,
    /// Always in `[0, counters.len())` while `counters` is non-empty.
    pub selected: usize,
    pub mode: Mode,
}

impl App {
    pub fn new(counters: Vec<Counter>) -> Self {
        Self {
            counters,
            selected: 0,
            mode: Mode::Counting,
        }
    }

    pub fn selected_counter(&self) -> Option<&Counter> {
        self.counters.get(self.selected)
    }
}
