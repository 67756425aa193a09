//! Tally library exports so integration tests can link the crate.

pub mod core;
pub mod store;
pub mod tui;
