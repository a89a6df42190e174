//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the widgets the catalog
//! shows, the story list and the shared theme.

mod components;
pub mod theme;
mod views;

pub use components::{
    render_context_help, Footer, InputField, InputKind, InputSize, InputVariant, Spinner,
    TableAction, TableView, ValueSource, EMPTY_MESSAGE,
};
pub use theme::Theme;
pub use views::{StoryListAction, StoryListView};
