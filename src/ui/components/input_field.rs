//! Text input field component.
//!
//! This module provides a labelled text input with support for:
//! - Controlled and uncontrolled value ownership
//! - Helper text and an error message for invalid input
//! - Filled, outlined and ghost variants in three sizes
//! - Loading and disabled states
//! - A clear button and a password visibility toggle
//!
//! ## Value ownership
//!
//! [`ValueSource`] is fixed when the field is built. An uncontrolled field
//! owns its string; a controlled field reads the value through a getter and
//! reports every edit through a setter, never keeping a copy of its own.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use tracing::{debug, trace};

use super::loading::Spinner;
use crate::ui::theme::Theme;

/// Character used to mask hidden passwords.
const MASK_CHAR: char = '•';
/// Glyph of the clear button.
const CLEAR_GLYPH: &str = "✕";
/// Glyph of the password toggle while the password is visible.
const PASSWORD_VISIBLE_GLYPH: &str = "◉";
/// Glyph of the password toggle while the password is hidden.
const PASSWORD_HIDDEN_GLYPH: &str = "◎";

type Getter = Box<dyn Fn() -> String>;
type Setter = Box<dyn FnMut(String)>;

/// Who owns the value of an [`InputField`].
pub enum ValueSource {
    /// The field owns the value (uncontrolled).
    Owned(String),
    /// The caller owns the value (controlled).
    Delegated {
        /// Reads the current value.
        get: Getter,
        /// Receives every edit.
        set: Setter,
    },
}

impl ValueSource {
    /// Read the current value.
    pub fn get(&self) -> String {
        match self {
            ValueSource::Owned(value) => value.clone(),
            ValueSource::Delegated { get, .. } => get(),
        }
    }

    /// Write a new value.
    fn set(&mut self, value: String) {
        match self {
            ValueSource::Owned(current) => *current = value,
            ValueSource::Delegated { set, .. } => set(value),
        }
    }

    /// Check if the caller owns the value.
    pub fn is_delegated(&self) -> bool {
        matches!(self, ValueSource::Delegated { .. })
    }
}

impl fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            ValueSource::Delegated { .. } => f.write_str("Delegated"),
        }
    }
}

/// Visual variant of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// Filled background, border only when focused or invalid.
    Filled,
    /// Visible border.
    #[default]
    Outlined,
    /// No border until focused or invalid.
    Ghost,
}

/// Size of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    /// Single line without a border.
    Small,
    /// Bordered box.
    #[default]
    Medium,
    /// Bordered box with horizontal padding.
    Large,
}

impl InputSize {
    /// Height of the input box in lines.
    pub fn box_height(&self) -> u16 {
        match self {
            InputSize::Small => 1,
            InputSize::Medium | InputSize::Large => 3,
        }
    }
}

/// Kind of value the field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Plain text.
    #[default]
    Text,
    /// A password, masked unless revealed.
    Password,
}

/// Text shown under the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footer<'a> {
    /// Error message of an invalid field.
    Error(&'a str),
    /// Helper text.
    Helper(&'a str),
}

/// A labelled text input field.
pub struct InputField {
    /// Value ownership.
    source: ValueSource,
    /// Change observer.
    on_change: Option<Box<dyn FnMut(&str)>>,
    /// Label shown above the box.
    label: Option<String>,
    /// Placeholder text shown when empty.
    placeholder: String,
    /// Helper text shown below the box.
    helper_text: Option<String>,
    /// Error message shown below the box when invalid.
    error_message: Option<String>,
    /// Whether the value is invalid.
    invalid: bool,
    /// Visual variant.
    variant: InputVariant,
    /// Size.
    size: InputSize,
    /// Value kind.
    kind: InputKind,
    /// Whether a background operation is running.
    loading: bool,
    /// Whether the field is disabled.
    disabled: bool,
    /// Whether the clear button is offered.
    clearable: bool,
    /// Whether the password toggle is offered.
    password_toggle: bool,
    /// Whether a password is currently revealed.
    show_password: bool,
    /// Cursor position in characters.
    cursor: usize,
    /// Spinner shown while loading.
    spinner: Spinner,
}

impl InputField {
    /// Create an empty uncontrolled field.
    pub fn new() -> Self {
        Self::with_source(ValueSource::Owned(String::new()))
    }

    /// Create an uncontrolled field with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self::with_source(ValueSource::Owned(value.into()))
    }

    /// Create a controlled field.
    ///
    /// The field displays whatever `get` returns and passes every edit to
    /// `set`.
    pub fn controlled(
        get: impl Fn() -> String + 'static,
        set: impl FnMut(String) + 'static,
    ) -> Self {
        Self::with_source(ValueSource::Delegated {
            get: Box::new(get),
            set: Box::new(set),
        })
    }

    fn with_source(source: ValueSource) -> Self {
        let cursor = source.get().chars().count();
        Self {
            source,
            on_change: None,
            label: None,
            placeholder: String::new(),
            helper_text: None,
            error_message: None,
            invalid: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            kind: InputKind::default(),
            loading: false,
            disabled: false,
            clearable: false,
            password_toggle: false,
            show_password: false,
            cursor,
            spinner: Spinner::new(),
        }
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the helper text.
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the error message shown while invalid.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Mark the value as invalid.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Set the visual variant.
    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size.
    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Set the value kind.
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the loading state.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Disable the field.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Offer a clear button.
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Offer a password visibility toggle.
    pub fn password_toggle(mut self, password_toggle: bool) -> Self {
        self.password_toggle = password_toggle;
        self
    }

    /// Observe value changes.
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the loading state.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the invalid state.
    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// Get the current value.
    pub fn value(&self) -> String {
        self.source.get()
    }

    /// Check if the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        self.source.is_delegated()
    }

    /// Get the cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the size.
    pub fn input_size(&self) -> InputSize {
        self.size
    }

    /// Get the variant.
    pub fn input_variant(&self) -> InputVariant {
        self.variant
    }

    /// Check if the field holds a password.
    pub fn is_password(&self) -> bool {
        self.kind == InputKind::Password || self.password_toggle
    }

    /// Check if the value is currently masked.
    pub fn is_masked(&self) -> bool {
        self.is_password() && !self.show_password
    }

    /// Check if the value can be edited.
    pub fn is_editable(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Check if the clear button is shown.
    pub fn show_clear_button(&self) -> bool {
        self.clearable && !self.loading && !self.value().is_empty()
    }

    /// Check if the password toggle is shown.
    pub fn show_password_toggle(&self) -> bool {
        self.is_password() && !self.loading
    }

    /// Check if the loading spinner is shown.
    pub fn show_spinner(&self) -> bool {
        self.loading
    }

    /// Get the text shown under the box.
    ///
    /// An invalid field with an error message shows the message; otherwise
    /// the helper text is shown if there is one.
    pub fn footer(&self) -> Option<Footer<'_>> {
        match (&self.error_message, &self.helper_text) {
            (Some(message), _) if self.invalid => Some(Footer::Error(message)),
            (_, Some(helper)) => Some(Footer::Helper(helper)),
            _ => None,
        }
    }

    /// Get the text shown in the box, masked if needed.
    pub fn display_value(&self) -> String {
        let value = self.value();
        if self.is_masked() {
            MASK_CHAR.to_string().repeat(value.chars().count())
        } else {
            value
        }
    }

    /// Height needed to render the field.
    ///
    /// The footer line is always reserved so the layout does not jump when
    /// an error appears.
    pub fn required_height(&self) -> u16 {
        let label = u16::from(self.label.is_some());
        label + self.size.box_height() + 1
    }

    /// Replace the value.
    ///
    /// Returns false without changing anything if the field is not editable.
    pub fn handle_change(&mut self, value: impl Into<String>) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.apply_change(value.into());
        true
    }

    /// Clear the value via the clear button.
    ///
    /// Returns false if the clear button is not shown or the field is
    /// disabled.
    pub fn clear(&mut self) -> bool {
        if !self.show_clear_button() || self.disabled {
            return false;
        }
        debug!(controlled = self.is_controlled(), "Input cleared");
        self.apply_change(String::new());
        self.cursor = 0;
        true
    }

    /// Reveal or hide the password.
    ///
    /// Returns false if the toggle is not shown or the field is disabled.
    pub fn toggle_password_visibility(&mut self) -> bool {
        if !self.show_password_toggle() || self.disabled {
            return false;
        }
        self.show_password = !self.show_password;
        debug!(visible = self.show_password, "Password visibility toggled");
        true
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        if self.loading {
            self.spinner.tick();
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        if !self.is_editable() {
            return false;
        }

        let mut chars: Vec<char> = self.value().chars().collect();
        let cursor = self.cursor.min(chars.len());

        match (key.code, key.modifiers) {
            // Character input
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                chars.insert(cursor, c);
                self.commit(chars, cursor + 1)
            }
            // Backspace - delete character before cursor
            (KeyCode::Backspace, _) => {
                if cursor > 0 {
                    chars.remove(cursor - 1);
                    self.commit(chars, cursor - 1)
                } else {
                    false
                }
            }
            // Delete - delete character at cursor
            (KeyCode::Delete, _) => {
                if cursor < chars.len() {
                    chars.remove(cursor);
                    self.commit(chars, cursor)
                } else {
                    false
                }
            }
            (KeyCode::Left, KeyModifiers::NONE) => {
                self.cursor = cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                self.cursor = (cursor + 1).min(chars.len());
                false
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = chars.len();
                false
            }
            // Ctrl+U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if chars.is_empty() {
                    false
                } else {
                    self.commit(Vec::new(), 0)
                }
            }
            // Ctrl+W - delete word before cursor
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                if cursor == 0 {
                    return false;
                }
                let word_start = chars[..cursor]
                    .iter()
                    .rposition(|c| !c.is_alphanumeric())
                    .map(|i| i + 1)
                    .unwrap_or(0);
                chars.drain(word_start..cursor);
                self.commit(chars, word_start)
            }
            // Ctrl+L - clear button
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => self.clear(),
            // Ctrl+P - password toggle
            (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
                self.toggle_password_visibility();
                false
            }
            _ => false,
        }
    }

    /// Write an edited value and move the cursor.
    fn commit(&mut self, chars: Vec<char>, cursor: usize) -> bool {
        self.apply_change(chars.into_iter().collect());
        self.cursor = cursor.min(self.value().chars().count());
        true
    }

    fn apply_change(&mut self, value: String) {
        trace!(
            controlled = self.is_controlled(),
            len = value.chars().count(),
            "Input value changed"
        );
        let observed = value.clone();
        self.source.set(value);
        if let Some(callback) = self.on_change.as_mut() {
            callback(&observed);
        }
        self.cursor = self.cursor.min(self.source.get().chars().count());
    }

    /// Render the input field.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render to
    /// * `area` - The area to render in
    /// * `focused` - Whether this input is currently focused
    /// * `theme` - Colors to use
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let mut constraints = Vec::with_capacity(3);
        if self.label.is_some() {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(self.size.box_height()));
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut index = 0;
        if let Some(label) = &self.label {
            let style = if focused {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            frame.render_widget(Paragraph::new(Span::styled(label.as_str(), style)), chunks[0]);
            index = 1;
        }

        self.render_box(frame, chunks[index], focused, theme);

        let footer = match self.footer() {
            Some(Footer::Error(message)) => {
                Paragraph::new(Span::styled(message, Style::default().fg(theme.error)))
            }
            Some(Footer::Helper(helper)) => Paragraph::new(Span::styled(helper, theme.muted_text())),
            None => Paragraph::new(""),
        };
        frame.render_widget(footer, chunks[index + 1]);
    }

    /// Render the bordered box, its value and its adornments.
    fn render_box(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let accent = if self.invalid {
            Some(theme.error)
        } else if focused {
            Some(theme.highlight)
        } else {
            None
        };

        let mut block = Block::default();
        let mut text_style = Style::default().fg(theme.fg);

        if self.size != InputSize::Small {
            let pad = u16::from(self.size == InputSize::Large);
            block = match (self.variant, accent) {
                (InputVariant::Outlined, _) => Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent.unwrap_or(theme.muted)))
                    .padding(Padding::horizontal(pad)),
                (InputVariant::Filled, _) => Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent.unwrap_or(theme.fill)))
                    .style(Style::default().bg(theme.fill))
                    .padding(Padding::horizontal(pad)),
                (InputVariant::Ghost, Some(color)) => Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .padding(Padding::horizontal(pad)),
                // Borderless, padded to keep the text where the border would be.
                (InputVariant::Ghost, None) => {
                    Block::default().padding(Padding::new(pad + 1, pad + 1, 1, 1))
                }
            };
        } else {
            match self.variant {
                InputVariant::Filled => text_style = text_style.bg(theme.fill),
                InputVariant::Outlined => text_style = text_style.add_modifier(Modifier::UNDERLINED),
                InputVariant::Ghost => {}
            }
            if let Some(color) = accent {
                text_style = text_style.fg(color);
            }
        }

        if self.disabled {
            text_style = text_style.add_modifier(Modifier::DIM);
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let adornments = self.adornments();
        let adornment_width: u16 = adornments
            .iter()
            .map(|s| s.chars().count() as u16 + 1)
            .sum();
        let [text_area, adornment_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(adornment_width),
        ])
        .areas(inner);

        let value = self.value();
        let (text, style) = if value.is_empty() && !self.placeholder.is_empty() {
            (self.placeholder.clone(), text_style.fg(theme.muted))
        } else {
            (self.display_value(), text_style)
        };

        // Scroll so the cursor stays visible.
        let width = text_area.width as usize;
        let offset = if width > 0 && self.cursor >= width {
            self.cursor + 1 - width
        } else {
            0
        };
        let paragraph = Paragraph::new(text)
            .style(style)
            .scroll((0, offset as u16));
        frame.render_widget(paragraph, text_area);

        if adornment_width > 0 {
            let spans: Vec<Span> = adornments
                .into_iter()
                .map(|s| Span::styled(format!(" {}", s), Style::default().fg(theme.muted)))
                .collect();
            frame.render_widget(Paragraph::new(Line::from(spans)), adornment_area);
        }

        if focused && self.is_editable() && width > 0 {
            let cursor_x = text_area.x + (self.cursor - offset) as u16;
            if cursor_x < text_area.x + text_area.width {
                frame.set_cursor_position(Position::new(cursor_x, text_area.y));
            }
        }
    }

    /// Glyphs shown at the right edge of the box.
    fn adornments(&self) -> Vec<&'static str> {
        let mut glyphs = Vec::new();
        if self.show_clear_button() {
            glyphs.push(CLEAR_GLYPH);
        }
        if self.show_password_toggle() {
            glyphs.push(if self.show_password {
                PASSWORD_VISIBLE_GLYPH
            } else {
                PASSWORD_HIDDEN_GLYPH
            });
        }
        if self.show_spinner() {
            glyphs.push(self.spinner.frame());
        }
        glyphs
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("source", &self.source)
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("kind", &self.kind)
            .field("loading", &self.loading)
            .field("disabled", &self.disabled)
            .field("invalid", &self.invalid)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(field: &mut InputField, text: &str) {
        for c in text.chars() {
            field.handle_input(key(KeyCode::Char(c)));
        }
    }

    fn render_to_string(field: &InputField, width: u16, focused: bool) -> String {
        let height = field.required_height();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                field.render(frame, area, focused, &Theme::dark());
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

    /// A controlled field backed by a shared string.
    fn controlled(initial: &str) -> (InputField, Rc<RefCell<String>>) {
        let state = Rc::new(RefCell::new(initial.to_string()));
        let reader = Rc::clone(&state);
        let writer = Rc::clone(&state);
        let field = InputField::controlled(
            move || reader.borrow().clone(),
            move |value| *writer.borrow_mut() = value,
        );
        (field, state)
    }

    #[test]
    fn test_new_is_uncontrolled_and_empty() {
        let field = InputField::new();
        assert!(!field.is_controlled());
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_with_value_places_cursor_at_end() {
        let field = InputField::with_value("héllo");
        assert_eq!(field.value(), "héllo");
        assert_eq!(field.cursor(), 5);
    }

    #[test]
    fn test_uncontrolled_typing() {
        let mut field = InputField::new();
        type_str(&mut field, "abc");
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_uncontrolled_reports_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut field =
            InputField::new().on_change(move |v| sink.borrow_mut().push(v.to_string()));
        type_str(&mut field, "hi");
        assert_eq!(*seen.borrow(), vec!["h", "hi"]);
    }

    #[test]
    fn test_controlled_writes_through_setter() {
        let (mut field, state) = controlled("Hello");
        assert!(field.is_controlled());
        assert_eq!(field.cursor(), 5);

        field.handle_input(key(KeyCode::Char('!')));
        assert_eq!(*state.borrow(), "Hello!");
        assert_eq!(field.value(), "Hello!");
    }

    #[test]
    fn test_controlled_reflects_external_changes() {
        let (field, state) = controlled("one");
        *state.borrow_mut() = "two".to_string();
        assert_eq!(field.value(), "two");
    }

    #[test]
    fn test_controlled_rejecting_setter_keeps_value() {
        let state = Rc::new(RefCell::new("fixed".to_string()));
        let reader = Rc::clone(&state);
        let mut field = InputField::controlled(move || reader.borrow().clone(), |_| {});
        field.handle_input(key(KeyCode::Char('x')));
        assert_eq!(field.value(), "fixed");
        assert!(field.cursor() <= 5);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = InputField::with_value("abc");
        assert!(field.handle_input(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "ab");

        field.handle_input(key(KeyCode::Home));
        assert!(field.handle_input(key(KeyCode::Delete)));
        assert_eq!(field.value(), "b");
        assert_eq!(field.cursor(), 0);

        assert!(!field.handle_input(key(KeyCode::Backspace)));
    }

    #[test]
    fn test_cursor_movement() {
        let mut field = InputField::with_value("abc");
        field.handle_input(key(KeyCode::Left));
        assert_eq!(field.cursor(), 2);
        field.handle_input(key(KeyCode::Right));
        field.handle_input(key(KeyCode::Right));
        assert_eq!(field.cursor(), 3);
        field.handle_input(ctrl('a'));
        assert_eq!(field.cursor(), 0);
        field.handle_input(ctrl('e'));
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_insert_in_middle_multibyte() {
        let mut field = InputField::with_value("ñc");
        field.handle_input(key(KeyCode::Left));
        field.handle_input(key(KeyCode::Char('b')));
        assert_eq!(field.value(), "ñbc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_ctrl_w_and_ctrl_u() {
        let mut field = InputField::with_value("hello world");
        assert!(field.handle_input(ctrl('w')));
        assert_eq!(field.value(), "hello ");
        assert!(field.handle_input(ctrl('u')));
        assert_eq!(field.value(), "");
        assert!(!field.handle_input(ctrl('u')));
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut field = InputField::with_value("x").disabled(true);
        assert!(!field.is_editable());
        assert!(!field.handle_input(key(KeyCode::Char('y'))));
        assert!(!field.handle_change("z"));
        assert_eq!(field.value(), "x");
    }

    #[test]
    fn test_loading_blocks_editing_and_hides_buttons() {
        let field = InputField::with_value("query")
            .clearable(true)
            .password_toggle(true)
            .loading(true);
        assert!(!field.is_editable());
        assert!(!field.show_clear_button());
        assert!(!field.show_password_toggle());
        assert!(field.show_spinner());
    }

    #[test]
    fn test_clear_button_rules() {
        let mut field = InputField::new().clearable(true);
        assert!(!field.show_clear_button());
        assert!(!field.clear());

        field.handle_change("Hello");
        assert!(field.show_clear_button());
        assert!(field.clear());
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_clear_requires_clearable() {
        let mut field = InputField::with_value("Hello");
        assert!(!field.show_clear_button());
        assert!(!field.handle_input(ctrl('l')));
        assert_eq!(field.value(), "Hello");
    }

    #[test]
    fn test_clear_controlled_reports_empty() {
        let (field, state) = controlled("Hello");
        let mut field = field.clearable(true);
        assert!(field.clear());
        assert_eq!(*state.borrow(), "");
    }

    #[test]
    fn test_password_masking_and_toggle() {
        let mut field = InputField::with_value("secret").kind(InputKind::Password);
        assert!(field.is_password());
        assert_eq!(field.display_value(), "••••••");

        assert!(field.toggle_password_visibility());
        assert!(!field.is_masked());
        assert_eq!(field.display_value(), "secret");

        field.handle_input(ctrl('p'));
        assert!(field.is_masked());
    }

    #[test]
    fn test_password_toggle_implies_password() {
        let field = InputField::with_value("abc").password_toggle(true);
        assert!(field.is_password());
        assert!(field.show_password_toggle());
        assert!(field.is_masked());
    }

    #[test]
    fn test_text_field_has_no_password_toggle() {
        let mut field = InputField::with_value("abc");
        assert!(!field.toggle_password_visibility());
        assert_eq!(field.display_value(), "abc");
    }

    #[test]
    fn test_footer_priority() {
        let field = InputField::new()
            .helper_text("We will never share your email.")
            .error_message("This username is taken.");
        assert_eq!(
            field.footer(),
            Some(Footer::Helper("We will never share your email."))
        );

        let field = field.invalid(true);
        assert_eq!(field.footer(), Some(Footer::Error("This username is taken.")));

        let bare = InputField::new().invalid(true);
        assert_eq!(bare.footer(), None);
    }

    #[test]
    fn test_required_height() {
        assert_eq!(InputField::new().required_height(), 4);
        assert_eq!(InputField::new().label("Email").required_height(), 5);
        assert_eq!(
            InputField::new().size(InputSize::Small).required_height(),
            2
        );
    }

    #[test]
    fn test_render_label_placeholder_and_helper() {
        let field = InputField::new()
            .label("Email")
            .placeholder("you@example.com")
            .helper_text("We will never share your email.");
        let out = render_to_string(&field, 40, false);
        assert!(out.contains("Email"));
        assert!(out.contains("you@example.com"));
        assert!(out.contains("We will never share"));
    }

    #[test]
    fn test_render_masked_password() {
        let field = InputField::with_value("hunter2")
            .label("Password")
            .kind(InputKind::Password);
        let out = render_to_string(&field, 30, true);
        assert!(out.contains("•••••••"));
        assert!(!out.contains("hunter2"));
        assert!(out.contains(PASSWORD_HIDDEN_GLYPH));
    }

    #[test]
    fn test_render_invalid_shows_error() {
        let field = InputField::new()
            .label("Username")
            .invalid(true)
            .error_message("This username is taken. Try another.");
        let out = render_to_string(&field, 50, false);
        assert!(out.contains("This username is taken"));
    }

    #[test]
    fn test_render_clear_button() {
        let field = InputField::with_value("Hello").clearable(true);
        let out = render_to_string(&field, 30, false);
        assert!(out.contains("Hello"));
        assert!(out.contains(CLEAR_GLYPH));
    }
}
