//! # Core Application Logic
//!
//! This module contains Tally's business logic.
//! It knows nothing about the terminal or any specific UI technology.
//!
//! ```text
//!            ┌─────────────────────────┐
//!            │         CORE            │
//!            │  (this module)          │
//!            │                         │
//!            │  • State (counters)     │
//!            │  • Key (logical input)  │
//!            │  • update() (reducer)   │
//!            │                         │
//!            │  No I/O. No UI. Pure.   │
//!            └───────────┬─────────────┘
//!                        │
//!            ┌───────────┴───────────┐
//!            ▼                       ▼
//!     ┌────────────┐          ┌────────────┐
//!     │    TUI     │          │   store    │
//!     │  adapter   │          │ (text I/O) │
//!     │ (ratatui)  │          │            │
//!     └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the `App` struct — all session state in one place
//! - [`action`]: the `Key` enum and the `update()` transition function

pub mod action;
pub mod state;
