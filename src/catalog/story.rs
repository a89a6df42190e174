//! Story construction, input handling and rendering.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::debug;

use super::people::{people_columns, sample_people, Person};
use super::{Component, StoryId};
use crate::config::Settings;
use crate::events::KeyBindings;
use crate::table::{DataTable, Result, SortDirection};
use crate::ui::{InputField, InputKind, InputSize, InputVariant, TableAction, TableView, Theme};

/// Widest an input field is drawn when a story shows a single column.
const MAX_FIELD_WIDTH: u16 = 50;

/// A titled column of input fields.
struct InputGroup {
    heading: Option<&'static str>,
    fields: Vec<InputField>,
}

impl InputGroup {
    fn single(field: InputField) -> Self {
        Self {
            heading: None,
            fields: vec![field],
        }
    }
}

enum Content {
    Table {
        view: TableView<Person>,
        /// Names reported by the selection callback.
        selected: Option<Rc<RefCell<Vec<String>>>>,
    },
    Inputs {
        groups: Vec<InputGroup>,
        /// Focused field, counted across all groups.
        focus: usize,
    },
}

/// A live story: a widget instance in the state its story describes.
pub struct Story {
    id: StoryId,
    content: Content,
}

impl Story {
    /// Build the widgets for a story.
    ///
    /// # Errors
    ///
    /// Returns an error if a table story's columns or rows fail validation.
    pub fn build(id: StoryId, settings: &Settings) -> Result<Self> {
        let keys = KeyBindings::new(settings.vim_mode);
        let content = match id.component() {
            Component::DataTable => table_content(id, settings, keys)?,
            Component::InputField => input_content(id),
        };
        debug!(story = id.slug(), "Story built");
        Ok(Self { id, content })
    }

    /// Get the story id.
    pub fn id(&self) -> StoryId {
        self.id
    }

    /// Get the table view of a table story.
    pub fn table_view(&self) -> Option<&TableView<Person>> {
        match &self.content {
            Content::Table { view, .. } => Some(view),
            Content::Inputs { .. } => None,
        }
    }

    /// Names of the selected people, for stories that observe selection.
    pub fn selected_names(&self) -> Option<Vec<String>> {
        match &self.content {
            Content::Table {
                selected: Some(names),
                ..
            } => Some(names.borrow().clone()),
            _ => None,
        }
    }

    /// Iterate over the input fields of an input story.
    pub fn fields(&self) -> impl Iterator<Item = &InputField> {
        let groups: &[InputGroup] = match &self.content {
            Content::Inputs { groups, .. } => groups,
            Content::Table { .. } => &[],
        };
        groups.iter().flat_map(|g| g.fields.iter())
    }

    /// Index of the focused input field.
    pub fn focused_field(&self) -> Option<usize> {
        match &self.content {
            Content::Inputs { focus, .. } => Some(*focus),
            Content::Table { .. } => None,
        }
    }

    /// Handle a key while the story has focus.
    ///
    /// Returns a status message when something visible changed.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<String> {
        match &mut self.content {
            Content::Table { view, .. } => view.handle_input(key).map(describe_action),
            Content::Inputs { groups, focus } => {
                let total: usize = groups.iter().map(|g| g.fields.len()).sum();
                if total == 0 {
                    return None;
                }
                match key.code {
                    KeyCode::Tab | KeyCode::Down => {
                        *focus = (*focus + 1) % total;
                        None
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        *focus = (*focus + total - 1) % total;
                        None
                    }
                    _ => {
                        let field = groups
                            .iter_mut()
                            .flat_map(|g| g.fields.iter_mut())
                            .nth(*focus)?;
                        if field.handle_input(key) {
                            debug!(field = *focus, "Input value edited");
                        }
                        None
                    }
                }
            }
        }
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        match &mut self.content {
            Content::Table { view, .. } => view.tick(),
            Content::Inputs { groups, .. } => {
                for field in groups.iter_mut().flat_map(|g| g.fields.iter_mut()) {
                    field.tick();
                }
            }
        }
    }

    /// Render the story.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let component = self.id.component();
        let [title_area, description_area, _, content_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let title = Line::from(vec![
            Span::styled(component.title(), theme.muted_text()),
            Span::raw(" › "),
            Span::styled(self.id.name(), theme.header()),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);
        frame.render_widget(
            Paragraph::new(Span::styled(component.description(), theme.muted_text())),
            description_area,
        );

        match &mut self.content {
            Content::Table { view, selected } => {
                let [table_area, selected_area] =
                    Layout::vertical([Constraint::Min(0), Constraint::Length(1)])
                        .areas(content_area);
                view.render(frame, table_area, focused, theme);

                if let Some(names) = selected {
                    let names = names.borrow();
                    let text = if names.is_empty() {
                        "none".to_string()
                    } else {
                        names.join(", ")
                    };
                    let line = Line::from(vec![
                        Span::styled("Selected: ", theme.muted_text()),
                        Span::styled(text, Style::default().fg(theme.fg)),
                    ]);
                    frame.render_widget(Paragraph::new(line), selected_area);
                }
            }
            Content::Inputs { groups, focus } => {
                render_groups(frame, content_area, groups, *focus, focused, theme);
            }
        }
    }
}

fn table_content(id: StoryId, settings: &Settings, keys: KeyBindings) -> Result<Content> {
    let rows = match id {
        StoryId::TableLoading | StoryId::TableEmpty => Vec::new(),
        _ => sample_people(),
    };

    let mut table = DataTable::new(rows, people_columns()?)?
        .loading(id == StoryId::TableLoading)
        .with_descending_order(settings.table.descending_order)
        .with_placeholder_rows(settings.table.placeholder_rows);

    let mut selected = None;
    if id == StoryId::TableSelectable {
        let names = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&names);
        table = table.selectable(true).on_row_select(move |rows| {
            *sink.borrow_mut() = rows.iter().map(|p| p.name.clone()).collect();
        });
        selected = Some(names);
    }

    let view = TableView::new(table)
        .with_title("People")
        .with_key_bindings(keys);
    Ok(Content::Table { view, selected })
}

fn input_content(id: StoryId) -> Content {
    let groups = match id {
        StoryId::InputInvalid => vec![InputGroup::single(
            InputField::new()
                .label("Username")
                .placeholder("your handle")
                .invalid(true)
                .error_message("This username is taken. Try another."),
        )],
        StoryId::InputLoading => vec![InputGroup::single(
            InputField::new()
                .label("Searching")
                .placeholder("Type to search...")
                .loading(true),
        )],
        StoryId::InputDisabled => vec![InputGroup::single(
            InputField::new()
                .label("Disabled field")
                .placeholder("Cannot type here")
                .disabled(true),
        )],
        StoryId::InputWithClear => {
            let value = Rc::new(RefCell::new("Hello".to_string()));
            let reader = Rc::clone(&value);
            let field = InputField::controlled(
                move || reader.borrow().clone(),
                move |next| *value.borrow_mut() = next,
            )
            .label("Clearable")
            .clearable(true);
            vec![InputGroup::single(field)]
        }
        StoryId::InputPassword => vec![InputGroup::single(
            InputField::new()
                .label("Password")
                .placeholder("••••••••")
                .kind(InputKind::Password)
                .password_toggle(true),
        )],
        StoryId::InputVariantsAndSizes => [
            ("Outlined", InputVariant::Outlined),
            ("Filled", InputVariant::Filled),
            ("Ghost", InputVariant::Ghost),
        ]
        .into_iter()
        .map(|(heading, variant)| InputGroup {
            heading: Some(heading),
            fields: [
                ("Small", InputSize::Small),
                ("Medium", InputSize::Medium),
                ("Large", InputSize::Large),
            ]
            .into_iter()
            .map(|(label, size)| InputField::new().label(label).size(size).variant(variant))
            .collect(),
        })
        .collect(),
        // Playground, and anything else routed here.
        _ => vec![InputGroup::single(
            InputField::new()
                .label("Email")
                .placeholder("you@example.com")
                .helper_text("We will never share your email."),
        )],
    };
    Content::Inputs { groups, focus: 0 }
}

fn render_groups(
    frame: &mut Frame,
    area: Rect,
    groups: &[InputGroup],
    focus: usize,
    focused: bool,
    theme: &Theme,
) {
    if groups.is_empty() {
        return;
    }

    let columns = if groups.len() == 1 {
        vec![Rect {
            width: area.width.min(MAX_FIELD_WIDTH),
            ..area
        }]
    } else {
        let ratio = groups.len() as u32;
        Layout::horizontal(groups.iter().map(|_| Constraint::Ratio(1, ratio)))
            .spacing(2)
            .split(area)
            .to_vec()
    };

    let mut index = 0;
    for (group, column) in groups.iter().zip(columns) {
        let mut constraints = Vec::with_capacity(group.fields.len() + 2);
        if group.heading.is_some() {
            constraints.push(Constraint::Length(1));
        }
        constraints.extend(
            group
                .fields
                .iter()
                .map(|f| Constraint::Length(f.required_height())),
        );
        constraints.push(Constraint::Min(0));
        let chunks = Layout::vertical(constraints).split(column);

        let mut chunk = 0;
        if let Some(heading) = group.heading {
            frame.render_widget(
                Paragraph::new(Span::styled(heading, theme.header())),
                chunks[0],
            );
            chunk = 1;
        }
        for field in &group.fields {
            field.render(frame, chunks[chunk], focused && index == focus, theme);
            chunk += 1;
            index += 1;
        }
    }
}

/// Describe a table action for the status line.
fn describe_action(action: TableAction) -> String {
    match action {
        TableAction::SortChanged {
            key,
            direction: Some(SortDirection::Ascending),
        } => format!("Sorted by {} ascending", key),
        TableAction::SortChanged {
            key,
            direction: Some(SortDirection::Descending),
        } => format!("Sorted by {} descending", key),
        TableAction::SortChanged {
            direction: None, ..
        } => "Sort cleared".to_string(),
        TableAction::SelectionChanged { selected: 1 } => "1 row selected".to_string(),
        TableAction::SelectionChanged { selected } => format!("{} rows selected", selected),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::table::BodyState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn build(id: StoryId) -> Story {
        Story::build(id, &Settings::default()).unwrap()
    }

    fn render_text(story: &mut Story, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                story.render(frame, area, true, &Theme::dark());
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_every_story_builds_and_renders() {
        for id in StoryId::ALL {
            let mut story = build(id);
            assert_eq!(story.id(), id);
            let out = render_text(&mut story, 120, 40);
            assert!(out.contains(id.name()), "{} did not render", id.slug());
        }
    }

    #[test]
    fn test_table_story_states() {
        let loading = build(StoryId::TableLoading);
        assert!(matches!(
            loading.table_view().unwrap().table().body_state(),
            BodyState::Loading { .. }
        ));

        let empty = build(StoryId::TableEmpty);
        assert_eq!(
            empty.table_view().unwrap().table().body_state(),
            BodyState::Empty
        );

        let basic = build(StoryId::TableBasic);
        assert_eq!(basic.table_view().unwrap().table().display_len(), 5);
        assert!(!basic.table_view().unwrap().table().is_selectable());
        assert!(basic.selected_names().is_none());
    }

    #[test]
    fn test_selectable_story_tracks_names() {
        let mut story = build(StoryId::TableSelectable);
        assert_eq!(story.selected_names(), Some(Vec::new()));
        let out = render_text(&mut story, 80, 20);
        assert!(out.contains("Selected: none"));

        story.handle_input(key(KeyCode::Char(' ')));
        story.handle_input(key(KeyCode::Down));
        let status = story.handle_input(key(KeyCode::Char(' ')));
        assert_eq!(status.as_deref(), Some("2 rows selected"));
        assert_eq!(
            story.selected_names(),
            Some(vec!["Aisha".to_string(), "Bikash".to_string()])
        );

        let out = render_text(&mut story, 80, 20);
        assert!(out.contains("Selected: Aisha, Bikash"));
    }

    #[test]
    fn test_sortable_story_status() {
        let mut story = build(StoryId::TableSortable);
        let status = story.handle_input(key(KeyCode::Char('s')));
        assert_eq!(status.as_deref(), Some("Sorted by name ascending"));
        story.handle_input(key(KeyCode::Char('s')));
        let status = story.handle_input(key(KeyCode::Char('s')));
        assert_eq!(status.as_deref(), Some("Sort cleared"));
    }

    #[test]
    fn test_with_clear_story_is_controlled() {
        let mut story = build(StoryId::InputWithClear);
        let field = story.fields().next().unwrap();
        assert!(field.is_controlled());
        assert_eq!(field.value(), "Hello");

        story.handle_input(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(story.fields().next().unwrap().value(), "");
    }

    #[test]
    fn test_variants_story_focus_cycles() {
        let mut story = build(StoryId::InputVariantsAndSizes);
        assert_eq!(story.fields().count(), 9);
        assert_eq!(story.focused_field(), Some(0));
        story.handle_input(key(KeyCode::BackTab));
        assert_eq!(story.focused_field(), Some(8));
        story.handle_input(key(KeyCode::Tab));
        assert_eq!(story.focused_field(), Some(0));

        let out = render_text(&mut story, 120, 40);
        assert!(out.contains("Outlined"));
        assert!(out.contains("Filled"));
        assert!(out.contains("Ghost"));
    }

    #[test]
    fn test_disabled_story_ignores_typing() {
        let mut story = build(StoryId::InputDisabled);
        story.handle_input(key(KeyCode::Char('x')));
        assert_eq!(story.fields().next().unwrap().value(), "");
    }

    #[test]
    fn test_playground_typing() {
        let mut story = build(StoryId::InputPlayground);
        for c in "me@example.com".chars() {
            story.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(story.fields().next().unwrap().value(), "me@example.com");
    }

    #[test]
    fn test_describe_action() {
        assert_eq!(
            describe_action(TableAction::SelectionChanged { selected: 1 }),
            "1 row selected"
        );
        assert_eq!(
            describe_action(TableAction::SortChanged {
                key: "age".to_string(),
                direction: Some(SortDirection::Descending),
            }),
            "Sorted by age descending"
        );
    }
}
