//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: events flow
//! through [`App::update`] and the screen is drawn from state by
//! [`App::view`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use tracing::{debug, info, trace, warn};

use crate::catalog::{Component, Story, StoryId};
use crate::config::Settings;
use crate::error::Result;
use crate::events::{Event, KeyBindings, KeyContext};
use crate::ui::{render_context_help, StoryListAction, StoryListView, Theme};

/// Width of the story list sidebar.
const SIDEBAR_WIDTH: u16 = 30;

/// Where keyboard focus is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// The story list has focus.
    #[default]
    Browsing,
    /// The open story has focus.
    Interacting,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current focus state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// Loaded settings.
    settings: Settings,
    /// Active theme.
    theme: Theme,
    /// Story list sidebar.
    story_list: StoryListView,
    /// The story shown in the content pane.
    story: Story,
    /// Last status message.
    status: Option<String>,
}

impl App {
    /// Create the application showing `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial story cannot be built.
    pub fn new(settings: Settings, initial: StoryId) -> Result<Self> {
        debug!(story = initial.slug(), "Creating application");
        let keys = KeyBindings::new(settings.vim_mode);
        let story = Story::build(initial, &settings)?;

        Ok(Self {
            state: AppState::Browsing,
            should_quit: false,
            theme: settings.theme(),
            story_list: StoryListView::new(initial, keys),
            story,
            status: None,
            settings,
        })
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Get the open story.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Get the last status message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.story.tick(),
        }
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
        self.state = AppState::Exiting;
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.quit();
            return;
        }

        match self.state {
            AppState::Browsing => {
                if key_event.code == KeyCode::Char('q') && key_event.modifiers == KeyModifiers::NONE
                {
                    self.quit();
                    return;
                }
                match self.story_list.handle_input(key_event) {
                    Some(StoryListAction::Highlight(id)) => self.open_story(id),
                    Some(StoryListAction::Open(id)) => {
                        debug!(story = id.slug(), "Focusing story");
                        self.state = AppState::Interacting;
                    }
                    None => {}
                }
            }
            AppState::Interacting => {
                if key_event.code == KeyCode::Esc {
                    debug!("Returning to story list");
                    self.state = AppState::Browsing;
                    return;
                }
                if let Some(status) = self.story.handle_input(key_event) {
                    self.status = Some(status);
                }
            }
            AppState::Exiting => {}
        }
    }

    /// Replace the open story with a fresh instance of `id`.
    fn open_story(&mut self, id: StoryId) {
        match Story::build(id, &self.settings) {
            Ok(story) => {
                debug!(story = id.slug(), "Story opened");
                self.story = story;
                self.status = None;
            }
            Err(e) => {
                warn!(story = id.slug(), error = %e, "Failed to build story");
                self.status = Some(crate::error::AppError::from(e).user_message());
            }
        }
    }

    fn key_context(&self) -> KeyContext {
        match (self.state, self.story.id().component()) {
            (AppState::Browsing | AppState::Exiting, _) => KeyContext::Sidebar,
            (_, Component::InputField) => KeyContext::Input,
            (_, Component::DataTable) if self.story.id() == StoryId::TableSelectable => {
                KeyContext::SelectableTable
            }
            (_, Component::DataTable) => KeyContext::Table,
        }
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().fg(self.theme.fg).bg(self.theme.bg)),
            area,
        );

        let [header, content, status, help] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header);

        let [sidebar, story_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
                .areas(content);
        let browsing = self.state == AppState::Browsing;
        self.story_list.render(frame, sidebar, browsing, &self.theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(!browsing))
            .padding(Padding::new(1, 1, 0, 0));
        let inner = block.inner(story_area);
        frame.render_widget(block, story_area);
        self.story.render(frame, inner, !browsing, &self.theme);

        self.render_status(frame, status);
        render_context_help(frame, help, self.key_context(), &self.theme);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("Widgetry")
            .style(self.theme.header())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(self.theme.muted_text()),
            );
        frame.render_widget(title, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.story.id().slug(), self.theme.muted_text()),
            Span::raw("  "),
            Span::styled(
                self.status.clone().unwrap_or_default(),
                Style::default().fg(self.theme.fg),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
