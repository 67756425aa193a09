//! # Keys and the transition function
//!
//! Everything the user can press becomes a logical [`Key`]. The raw
//! keystroke decoding (escape sequences, control characters) lives in
//! `tui::event`; by the time a `Key` reaches [`update`] it is already
//! platform-independent.
//!
//! ```text
//! State + Key  →  update()  →  mutated State + Effect
//! ```
//!
//! `update` does no I/O, so every transition is testable with plain
//! `assert_eq!` — no terminal required.

use crate::core::state::{App, Mode};

/// A logical keystroke, decoded from raw terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Enter (CR or LF): increment the selected counter.
    Confirm,
    /// `d`: decrement the selected counter.
    Decrement,
    /// `r`: reset every counter to zero.
    Reset,
    /// Up arrow: previous entry, wrapping first → last.
    Up,
    /// Down arrow: next entry, wrapping last → first.
    Down,
    /// `q`: leave the loop.
    Quit,
    /// Ctrl+C, delivered as a key event in raw mode.
    Interrupt,
    /// Anything else: no-op, redraw unchanged.
    Other,
}

/// What the caller should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Leave the event loop; the save-confirmation flow runs next.
    Quit,
}

/// Apply one keystroke to the state.
///
/// While a reset notice is showing, the next key of any kind only
/// dismisses it — even `q`. This mirrors the reset flow's extra
/// acknowledgment keystroke, kept as documented behavior.
pub fn update(app: &mut App, key: Key) -> Effect {
    if app.mode == Mode::ResetNotice {
        app.mode = Mode::Counting;
        return Effect::None;
    }

    match key {
        Key::Confirm => {
            if let Some(counter) = app.counters.get_mut(app.selected) {
                counter.count += 1;
            }
        }
        Key::Decrement => {
            if let Some(counter) = app.counters.get_mut(app.selected) {
                counter.count -= 1;
            }
        }
        Key::Reset => {
            for counter in &mut app.counters {
                counter.count = 0;
            }
            app.mode = Mode::ResetNotice;
        }
        Key::Up => {
            let len = app.counters.len();
            if len > 0 {
                app.selected = (app.selected + len - 1) % len;
            }
        }
        Key::Down => {
            let len = app.counters.len();
            if len > 0 {
                app.selected = (app.selected + 1) % len;
            }
        }
        Key::Quit | Key::Interrupt => return Effect::Quit,
        Key::Other => {}
    }
    Effect::None
}
