//! Widgetry: sortable, selectable data tables and text inputs for terminal
//! UIs, plus a catalog that shows each widget in every state.
//!
//! The [`table`] module is the toolkit-independent engine. [`ui`] paints it
//! with ratatui, and [`app`] wires the widgets into the story catalog.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod table;
pub mod terminal;
pub mod ui;
