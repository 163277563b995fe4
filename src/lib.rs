//! Terminal typeahead over a remote name directory
//!
//! The widget state (`autocomplete`) is pure; fetching lives in `source`
//! behind a worker thread, and `app` wires both to crossterm events and the
//! ratatui frame.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod source;
pub mod suggestion;
pub mod theme;
pub mod widgets;
