//! Data table component.
//!
//! Paints a [`DataTable`] and forwards key presses to its operations. The
//! view only adds a row cursor and a focused column; sort and selection
//! live in the engine.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tracing::debug;

use super::loading::Spinner;
use crate::events::KeyBindings;
use crate::table::{BodyState, DataTable, Record, SortDirection};
use crate::ui::theme::Theme;

/// Message shown when there are no rows.
pub const EMPTY_MESSAGE: &str = "No data to display.";

/// Width of the placeholder bar in a loading cell.
const PLACEHOLDER_WIDTH: usize = 8;

/// Checkbox glyphs.
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Something the user changed through the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// The sort changed.
    SortChanged {
        /// The column that was toggled.
        key: String,
        /// New direction, `None` when back to input order.
        direction: Option<SortDirection>,
    },
    /// The selection changed.
    SelectionChanged {
        /// Number of selected rows.
        selected: usize,
    },
}

/// Terminal view of a [`DataTable`].
pub struct TableView<T: Record> {
    /// The table engine.
    table: DataTable<T>,
    /// Title shown in the border.
    title: String,
    /// Cursor row (display position).
    cursor: usize,
    /// Focused column index.
    column: usize,
    /// Navigation keys.
    keys: KeyBindings,
    /// Animates placeholder rows.
    spinner: Spinner,
    /// Ratatui table state.
    state: TableState,
}

impl<T: Record> TableView<T> {
    /// Create a view over a table.
    pub fn new(table: DataTable<T>) -> Self {
        Self {
            table,
            title: String::new(),
            cursor: 0,
            column: 0,
            keys: KeyBindings::default(),
            spinner: Spinner::new(),
            state: TableState::default(),
        }
    }

    /// Set the border title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the navigation keys.
    pub fn with_key_bindings(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }

    /// Get the table engine.
    pub fn table(&self) -> &DataTable<T> {
        &self.table
    }

    /// Get the table engine mutably.
    pub fn table_mut(&mut self) -> &mut DataTable<T> {
        &mut self.table
    }

    /// Get the cursor row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the focused column index.
    pub fn focused_column(&self) -> usize {
        self.column
    }

    /// Advance placeholder animation.
    pub fn tick(&mut self) {
        if self.table.is_loading() {
            self.spinner.tick();
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns an action when sort or selection changed.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<TableAction> {
        self.clamp_cursor();

        if self.keys.is_down(&key) {
            if self.cursor + 1 < self.table.display_len() {
                self.cursor += 1;
            }
            return None;
        }
        if self.keys.is_up(&key) {
            self.cursor = self.cursor.saturating_sub(1);
            return None;
        }
        if self.keys.is_left(&key) {
            self.column = self.column.saturating_sub(1);
            return None;
        }
        if self.keys.is_right(&key) {
            if self.column + 1 < self.table.columns().len() {
                self.column += 1;
            }
            return None;
        }
        if self.keys.is_top(&key) {
            self.cursor = 0;
            return None;
        }
        if self.keys.is_bottom(&key) {
            self.cursor = self.table.display_len().saturating_sub(1);
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('s'), KeyModifiers::NONE) | (KeyCode::Enter, _) => {
                self.sort_focused_column()
            }
            // Rows are hidden behind placeholders while loading.
            (KeyCode::Char(' ') | KeyCode::Char('a'), KeyModifiers::NONE)
                if self.table.body_state() != BodyState::Rows =>
            {
                None
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) => {
                if self.table.toggle_row(self.cursor) {
                    Some(TableAction::SelectionChanged {
                        selected: self.table.selection_len(),
                    })
                } else {
                    None
                }
            }
            (KeyCode::Char('a'), KeyModifiers::NONE) => {
                if self.table.toggle_all() {
                    Some(TableAction::SelectionChanged {
                        selected: self.table.selection_len(),
                    })
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Toggle sort on the focused column.
    fn sort_focused_column(&mut self) -> Option<TableAction> {
        let key = self.table.columns().get_index(self.column)?.key().to_string();
        if !self.table.toggle_sort(&key) {
            return None;
        }
        let direction = self.table.sort_state().direction();
        debug!(%key, ?direction, "Sort toggled from keyboard");
        Some(TableAction::SortChanged { key, direction })
    }

    fn clamp_cursor(&mut self) {
        let len = self.table.display_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        let columns = self.table.columns().len();
        if self.column >= columns {
            self.column = columns.saturating_sub(1);
        }
    }

    /// Render the table.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        self.clamp_cursor();

        let selectable = self.table.is_selectable();
        let title = if self.table.selection_len() > 0 {
            format!(" {} ({} selected) ", self.title, self.table.selection_len())
        } else {
            format!(" {} ", self.title)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.border(focused));
        let inner = block.inner(area);

        let mut widths = Vec::with_capacity(self.table.columns().len() + 1);
        if selectable {
            widths.push(Constraint::Length(CHECKED.len() as u16));
        }
        widths.extend(self.table.columns().constraints());

        let header = self.header_row(focused, theme);
        let body_state = self.table.body_state();
        let rows = match body_state {
            BodyState::Loading { placeholder_rows } => self.placeholder_rows(placeholder_rows, theme),
            BodyState::Empty => Vec::new(),
            BodyState::Rows => self.data_rows(theme),
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .highlight_style(Style::default().bg(theme.fill).add_modifier(Modifier::BOLD));

        let highlight = body_state == BodyState::Rows && focused;
        self.state.select(highlight.then_some(self.cursor));
        frame.render_stateful_widget(table, area, &mut self.state);

        if body_state == BodyState::Empty && inner.height > 1 {
            let body = Rect {
                y: inner.y + 1,
                height: inner.height - 1,
                ..inner
            };
            let message = Paragraph::new(Span::styled(EMPTY_MESSAGE, theme.muted_text()))
                .alignment(Alignment::Center);
            frame.render_widget(message, body);
        }
    }

    fn header_row(&self, focused: bool, theme: &Theme) -> Row<'static> {
        let mut cells = Vec::with_capacity(self.table.columns().len() + 1);
        if self.table.is_selectable() {
            let all = self.table.is_all_selected();
            cells.push(Cell::from(if all { CHECKED } else { UNCHECKED }));
        }
        for (index, column) in self.table.columns().iter().enumerate() {
            let text = match self.table.sort_indicator(column.key()) {
                Some(indicator) => format!("{} {}", column.header(), indicator),
                None => column.header().to_string(),
            };
            let style = if focused && index == self.column {
                theme
                    .header()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                theme.header()
            };
            cells.push(Cell::from(Span::styled(text, style)));
        }
        Row::new(cells)
    }

    fn placeholder_rows(&self, count: usize, theme: &Theme) -> Vec<Row<'static>> {
        let columns = self.table.columns().len();
        let selectable = self.table.is_selectable();
        (0..count)
            .map(|_| {
                let mut cells = Vec::with_capacity(columns + 1);
                if selectable {
                    cells.push(Cell::from(self.spinner.placeholder(1)));
                }
                cells.extend(
                    (0..columns).map(|_| Cell::from(self.spinner.placeholder(PLACEHOLDER_WIDTH))),
                );
                Row::new(cells).style(theme.muted_text())
            })
            .collect()
    }

    fn data_rows(&self, theme: &Theme) -> Vec<Row<'static>> {
        let columns = self.table.columns().len();
        let selectable = self.table.is_selectable();
        (0..self.table.display_len())
            .map(|position| {
                let selected = self.table.is_selected_at(position);
                let mut cells = Vec::with_capacity(columns + 1);
                if selectable {
                    cells.push(Cell::from(if selected { CHECKED } else { UNCHECKED }));
                }
                cells.extend(
                    (0..columns)
                        .map(|c| Cell::from(self.table.cell_text(position, c).unwrap_or_default())),
                );
                let style = if selected {
                    Style::default().fg(theme.selected)
                } else {
                    Style::default().fg(theme.fg)
                };
                Row::new(cells).style(style)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::catalog::people::{people_columns, sample_people, Person};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view(rows: Vec<Person>) -> TableView<Person> {
        let table = DataTable::new(rows, people_columns().unwrap())
            .unwrap()
            .selectable(true);
        TableView::new(table).with_title("People")
    }

    fn render_lines(view: &mut TableView<Person>, focused: bool) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, focused, &Theme::dark());
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut view = view(sample_people());
        view.handle_input(key(KeyCode::Up));
        assert_eq!(view.cursor(), 0);
        view.handle_input(key(KeyCode::Char('G')));
        assert_eq!(view.cursor(), 4);
        view.handle_input(key(KeyCode::Down));
        assert_eq!(view.cursor(), 4);
        view.handle_input(key(KeyCode::Char('g')));
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn test_column_focus_and_sort() {
        let mut view = view(sample_people());
        view.handle_input(key(KeyCode::Right));
        view.handle_input(key(KeyCode::Right));
        view.handle_input(key(KeyCode::Right));
        assert_eq!(view.focused_column(), 2);

        let action = view.handle_input(key(KeyCode::Char('s')));
        assert_eq!(
            action,
            Some(TableAction::SortChanged {
                key: "age".to_string(),
                direction: Some(SortDirection::Ascending),
            })
        );
        let ages: Vec<u32> = view.table().display_rows().map(|p| p.age).collect();
        assert_eq!(ages, vec![22, 23, 24, 25, 27]);

        view.handle_input(key(KeyCode::Enter));
        let action = view.handle_input(key(KeyCode::Enter));
        assert_eq!(
            action,
            Some(TableAction::SortChanged {
                key: "age".to_string(),
                direction: None,
            })
        );
    }

    #[test]
    fn test_space_and_select_all() {
        let mut view = view(sample_people());
        view.handle_input(key(KeyCode::Down));
        let action = view.handle_input(key(KeyCode::Char(' ')));
        assert_eq!(action, Some(TableAction::SelectionChanged { selected: 1 }));
        assert!(view.table().is_selected_at(1));

        let action = view.handle_input(key(KeyCode::Char('a')));
        assert_eq!(action, Some(TableAction::SelectionChanged { selected: 5 }));
        let action = view.handle_input(key(KeyCode::Char('a')));
        assert_eq!(action, Some(TableAction::SelectionChanged { selected: 0 }));
    }

    #[test]
    fn test_selection_ignored_when_not_selectable() {
        let table = DataTable::new(sample_people(), people_columns().unwrap()).unwrap();
        let mut view = TableView::new(table);
        assert_eq!(view.handle_input(key(KeyCode::Char(' '))), None);
        assert_eq!(view.handle_input(key(KeyCode::Char('a'))), None);
    }

    #[test]
    fn test_render_header_and_rows() {
        let mut view = view(sample_people());
        let lines = render_lines(&mut view, true);
        let header = &lines[1];
        assert!(header.contains("[ ]"));
        assert!(header.contains("Name ↕"));
        assert!(header.contains("Age ↕"));
        assert!(lines.iter().any(|l| l.contains("Aisha") && l.contains("Developer")));
        assert!(lines.iter().any(|l| l.contains("Eshan")));
    }

    #[test]
    fn test_render_sort_indicator_and_checked_rows() {
        let mut view = view(sample_people());
        view.table_mut().toggle_sort("name");
        view.table_mut().toggle_all();
        let lines = render_lines(&mut view, false);
        assert!(lines[0].contains("5 selected"));
        assert!(lines[1].contains("[x]"));
        assert!(lines[1].contains("Name ↑"));
        assert!(lines.iter().any(|l| l.contains("[x]") && l.contains("Chirag")));
    }

    #[test]
    fn test_render_empty_state() {
        let mut view = view(Vec::new());
        let lines = render_lines(&mut view, false);
        assert!(lines.iter().any(|l| l.contains(EMPTY_MESSAGE)));
    }

    #[test]
    fn test_render_loading_beats_empty() {
        let table = DataTable::new(Vec::new(), people_columns().unwrap())
            .unwrap()
            .loading(true);
        let mut view = TableView::new(table);
        let lines = render_lines(&mut view, false);
        assert!(!lines.iter().any(|l| l.contains(EMPTY_MESSAGE)));
        let placeholders = lines.iter().filter(|l| l.contains("░░░░")).count();
        assert_eq!(placeholders, 5);
    }

    #[test]
    fn test_selection_keys_ignored_while_loading() {
        let mut view = view(sample_people());
        view.table_mut().set_loading(true);
        assert_eq!(view.handle_input(key(KeyCode::Char(' '))), None);
        assert_eq!(view.handle_input(key(KeyCode::Char('a'))), None);
        assert_eq!(view.table().selection_len(), 0);

        view.table_mut().set_loading(false);
        assert_eq!(
            view.handle_input(key(KeyCode::Char(' '))),
            Some(TableAction::SelectionChanged { selected: 1 })
        );
    }

    #[test]
    fn test_cursor_clamped_after_rows_shrink() {
        let mut view = view(sample_people());
        view.handle_input(key(KeyCode::End));
        assert_eq!(view.cursor(), 4);
        view.table_mut()
            .set_rows(vec![Person::new(1, "Aisha", "Developer", 22)])
            .unwrap();
        view.handle_input(key(KeyCode::Char('x')));
        assert_eq!(view.cursor(), 0);
    }
}
