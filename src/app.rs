use crate::config::Config;
use crate::error::OctoviewError;
use crate::event::AppEvent;
use crate::github::types::UserProfile;
use crate::session::LastQueryStore;
use crate::ui::{
    input::{self, Action},
    profile_card::ProfileCard,
    search_bar::SearchBar,
    status_bar::StatusBar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// What the display surface currently shows. Exactly one state at a time;
/// transitions happen only on submit or lookup completion.
#[derive(Debug)]
pub enum View {
    Empty,
    Loading,
    Profile(UserProfile),
    Error,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Empty => "idle",
            View::Loading => "searching",
            View::Profile(_) => "ready",
            View::Error => "error",
        }
    }
}

pub struct App {
    pub config: Config,
    pub store: Box<dyn LastQueryStore>,
    pub input: String,
    pub view: View,
    pub last_sync: String,
    pub should_quit: bool,

    // Query waiting for the main loop to spawn its fetch task.
    pending_lookup: Option<String>,
}

impl App {
    pub fn new(config: Config, store: Box<dyn LastQueryStore>) -> Self {
        Self {
            config,
            store,
            input: String::new(),
            view: View::Empty,
            last_sync: "never".to_string(),
            should_quit: false,
            pending_lookup: None,
        }
    }

    /// Pre-fills the input from the CLI/config override or the remembered
    /// last query and queues the lookup without waiting for a trigger.
    pub fn restore_session(&mut self) {
        let initial = self.config.user.clone().or_else(|| self.store.get());
        if let Some(user) = initial {
            self.input = user;
            self.submit();
        }
    }

    pub fn take_pending_lookup(&mut self) -> Option<String> {
        self.pending_lookup.take()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_action(input::map_key(key)),
            AppEvent::Resize => {}
            AppEvent::LookupResult { query, result } => self.finish_lookup(query, result),
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::InputChar(c) => self.input.push(c),
            Action::InputBackspace => {
                self.input.pop();
            }
            Action::ClearInput => self.input.clear(),
            Action::Submit | Action::Resubmit => self.submit(),
            Action::None => {}
        }
    }

    // Blank input is a complete no-op: no view change, no lookup.
    fn submit(&mut self) {
        let query = self.input.trim();
        if query.is_empty() {
            return;
        }
        self.view = View::Loading;
        self.pending_lookup = Some(query.to_string());
    }

    fn finish_lookup(
        &mut self,
        query: String,
        result: std::result::Result<UserProfile, OctoviewError>,
    ) {
        match result {
            Ok(profile) => {
                self.view = View::Profile(profile);
                self.store.set(&query);
                self.last_sync = chrono::Local::now().format("%H:%M:%S").to_string();
            }
            // Every failure kind collapses into the same card, and the
            // store keeps the previous successful query.
            Err(_) => self.view = View::Error,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(SearchBar { input: &self.input }, chunks[0]);
        frame.render_widget(ProfileCard { view: &self.view }, chunks[1]);
        frame.render_widget(
            StatusBar {
                state_label: self.view.label(),
                last_sync: &self.last_sync,
            },
            chunks[2],
        );
    }
}
