//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the counter
//! list, and translates keyboard events into core `Key` values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! event loop is strictly synchronous: draw, block on one keystroke,
//! apply it through `core::action::update`, repeat until it asks to quit.
//! `ratatui::init` puts the terminal in raw mode, so Ctrl+C arrives as an
//! ordinary key event and takes the same exit path as `q`; the terminal
//! is restored before the caller runs the line-buffered save prompt.

mod event;
mod ui;

use log::{debug, info};

use crate::core::action::{Effect, update};
use crate::core::state::App;

/// Run the interactive loop until the user quits. Restores the terminal
/// before returning, whatever happened inside.
pub fn run(app: &mut App) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    info!("Terminal initialized, entering event loop");
    let result = event_loop(&mut terminal, app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, app))?;
        let key = event::read_key()?;
        debug!("Decoded key: {:?}", key);
        if update(app, key) == Effect::Quit {
            info!("Quit requested, leaving event loop");
            return Ok(());
        }
    }
}
