//! Event handling for the application.
//!
//! This module handles keyboard input, terminal resizes and animation ticks.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::KeyBindings;

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// The tick interval elapsed without input.
    Tick,
}

/// Where keyboard focus is, for help hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The story list.
    Sidebar,
    /// A data table story.
    Table,
    /// A selectable data table story.
    SelectableTable,
    /// An input field story.
    Input,
}

/// Get the short key hints shown in the help bar.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Sidebar => "[j/k] choose story  [Enter/Tab] focus story  [q] quit",
        KeyContext::Table => "[j/k] row  [h/l] column  [s/Enter] sort  [Esc] back",
        KeyContext::SelectableTable => {
            "[j/k] row  [h/l] column  [s] sort  [Space] select  [a] all  [Esc] back"
        }
        KeyContext::Input => {
            "[Tab] next field  [Ctrl+L] clear  [Ctrl+P] show password  [Esc] back"
        }
    }
}
