//! Story list sidebar.
//!
//! Lists every story grouped under its component. The highlighted story is
//! the one shown in the content pane.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::catalog::{Component, StoryId};
use crate::events::KeyBindings;
use crate::ui::theme::Theme;

/// Action resulting from story list input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryListAction {
    /// The highlighted story changed.
    Highlight(StoryId),
    /// Move focus into the highlighted story.
    Open(StoryId),
}

/// Story list sidebar.
#[derive(Debug)]
pub struct StoryListView {
    /// Highlighted position in [`StoryId::ALL`].
    selected: usize,
    /// Navigation keys.
    keys: KeyBindings,
}

impl StoryListView {
    /// Create a list with `initial` highlighted.
    pub fn new(initial: StoryId, keys: KeyBindings) -> Self {
        Self {
            selected: initial.index(),
            keys,
        }
    }

    /// Get the highlighted story.
    pub fn selected(&self) -> StoryId {
        StoryId::ALL[self.selected.min(StoryId::ALL.len() - 1)]
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<StoryListAction> {
        let last = StoryId::ALL.len() - 1;
        let previous = self.selected;

        if self.keys.is_down(&key) {
            self.selected = (self.selected + 1).min(last);
        } else if self.keys.is_up(&key) {
            self.selected = self.selected.saturating_sub(1);
        } else if self.keys.is_top(&key) {
            self.selected = 0;
        } else if self.keys.is_bottom(&key) {
            self.selected = last;
        } else if matches!(key.code, KeyCode::Enter | KeyCode::Tab) || self.keys.is_right(&key) {
            return Some(StoryListAction::Open(self.selected()));
        }

        (self.selected != previous).then(|| StoryListAction::Highlight(self.selected()))
    }

    /// Render the list.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let mut items = Vec::with_capacity(StoryId::ALL.len() + 2);
        let mut highlighted = 0;
        let mut current: Option<Component> = None;

        for (i, id) in StoryId::ALL.iter().enumerate() {
            if current != Some(id.component()) {
                current = Some(id.component());
                items.push(ListItem::new(id.component().title()).style(theme.header()));
            }
            if i == self.selected {
                highlighted = items.len();
            }
            items.push(
                ListItem::new(format!("  {}", id.name())).style(Style::default().fg(theme.fg)),
            );
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Stories ")
                    .borders(Borders::ALL)
                    .border_style(theme.border(focused)),
            )
            .highlight_style(
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        let mut state = ListState::default();
        state.select(Some(highlighted));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
