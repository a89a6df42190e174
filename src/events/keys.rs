//! Key binding definitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration shared by list-like widgets.
///
/// Arrow keys always work; vim-style `h/j/k/l/g/G` are accepted only when
/// `vim_mode` is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Whether vim-style bindings are enabled.
    pub vim_mode: bool,
}

impl KeyBindings {
    /// Create new key bindings.
    pub fn new(vim_mode: bool) -> Self {
        Self { vim_mode }
    }

    fn vim(&self, key: &KeyEvent, c: char) -> bool {
        self.vim_mode
            && key.code == KeyCode::Char(c)
            && (key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT)
    }

    /// Move up one item.
    pub fn is_up(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Up || self.vim(key, 'k')
    }

    /// Move down one item.
    pub fn is_down(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Down || self.vim(key, 'j')
    }

    /// Move left one item.
    pub fn is_left(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Left || self.vim(key, 'h')
    }

    /// Move right one item.
    pub fn is_right(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Right || self.vim(key, 'l')
    }

    /// Jump to the first item.
    pub fn is_top(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Home || self.vim(key, 'g')
    }

    /// Jump to the last item.
    pub fn is_bottom(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::End || self.vim(key, 'G')
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(true)
    }
}
