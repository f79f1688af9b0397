use crate::config::Config;
use crate::contrib::group::{group_by_kind, Grouped};
use crate::contrib::types::Contribution;
use crate::data_source::FetchMode;
use crate::event::{AppEvent, FetchedBatch};
use crate::ui::{
    contrib_list::{self, ContribList, DisplayRow},
    detail_panel::DetailPanel,
    header_bar::HeaderBar,
    help_panel::HelpPanel,
    input::{self, Action, InputMode},
    status_bar::StatusBar,
    toast::{Notification, NotifyLevel, Toast},
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub struct App {
    pub config: Config,
    pub account: String,
    pub mode: FetchMode,
    pub input_mode: InputMode,
    pub input_buffer: String,

    pub loading: bool,
    pub grouped: Grouped,
    rows: Vec<DisplayRow>,

    pub selected: usize,
    pub scroll: usize,
    pub show_detail: bool,
    pub show_help: bool,

    pub notification: Option<Notification>,
    pub last_sync: String,
    pub rate_limit: Option<u32>,

    fetch_requested: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let account = config.account.trim().to_string();
        let mode = config.mode;
        let fetch_requested = !account.is_empty();

        let mut app = Self {
            config,
            account,
            mode,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            loading: false,
            grouped: Grouped::default(),
            rows: Vec::new(),
            selected: 0,
            scroll: 0,
            show_detail: false,
            show_help: false,
            notification: None,
            last_sync: "never".to_string(),
            rate_limit: None,
            fetch_requested,
            should_quit: false,
        };
        app.rebuild_rows();
        app
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.input_mode);
                self.handle_action(action);
            }
            AppEvent::Resize => {}
            AppEvent::Tick => {
                if self.notification.as_ref().is_some_and(Notification::expired) {
                    self.notification = None;
                }
            }
            AppEvent::FetchDone(result) => self.apply_fetch_result(result),
        }
    }

    /// Hands a pending fetch to the caller, flipping the in-flight flag.
    /// Returns `None` while a fetch is in flight; the trigger stays
    /// disabled until the current one completes.
    pub fn take_fetch_request(&mut self) -> Option<(String, FetchMode)> {
        if !self.fetch_requested || self.loading {
            return None;
        }
        self.fetch_requested = false;
        if self.account.is_empty() {
            return None;
        }
        self.loading = true;
        self.rebuild_rows();
        Some((self.account.clone(), self.mode))
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
            }
            Action::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::Select => {
                if self.selected_contribution().is_some() {
                    self.show_detail = !self.show_detail;
                }
            }
            Action::EditAccount => {
                self.input_mode = InputMode::Account;
                self.input_buffer = self.account.clone();
            }
            Action::InputChar(c) => self.input_buffer.push(c),
            Action::InputBackspace => {
                self.input_buffer.pop();
            }
            Action::InputConfirm => {
                self.input_mode = InputMode::Normal;
                let account = self.input_buffer.trim().to_string();
                if account.is_empty() {
                    self.notification =
                        Some(Notification::new(NotifyLevel::Warn, "No account name given"));
                } else {
                    self.account = account;
                    self.request_fetch();
                }
            }
            Action::InputCancel => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            Action::ToggleMode => {
                self.mode = self.mode.toggle();
                self.rebuild_rows();
                self.request_fetch();
            }
            Action::Refresh => self.request_fetch(),
            Action::Help => self.show_help = !self.show_help,
            Action::ClosePopup => {
                self.show_detail = false;
                self.show_help = false;
            }
            Action::None => {}
        }
    }

    fn request_fetch(&mut self) {
        if self.loading || self.account.is_empty() {
            return;
        }
        self.fetch_requested = true;
    }

    fn apply_fetch_result(&mut self, result: Result<FetchedBatch, String>) {
        self.loading = false;
        match result {
            Ok(batch) => {
                self.rate_limit = batch.rate_limit;
                self.grouped = group_by_kind(batch.contributions);
                self.last_sync = "just now".to_string();
                self.rebuild_rows();
            }
            Err(_) => {
                // prior results stay; one generic notification, no detail
                self.notification = Some(Notification::new(
                    NotifyLevel::Error,
                    "Failed to fetch contributions",
                ));
                self.rebuild_rows();
            }
        }
    }

    fn rebuild_rows(&mut self) {
        self.rows = contrib_list::build_rows(&self.grouped, self.mode, self.loading);
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    pub fn selected_contribution(&self) -> Option<&Contribution> {
        match self.rows.get(self.selected) {
            Some(DisplayRow::Item(c)) => Some(c),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        // list block borders take two rows
        self.ensure_scroll_bounds(chunks[1].height.saturating_sub(2) as usize);

        let header = HeaderBar {
            account: &self.account,
            mode: self.mode,
            total: self.grouped.total(),
            loading: self.loading,
        };
        frame.render_widget(header, chunks[0]);

        let list = ContribList {
            rows: &self.rows,
            selected: self.selected,
            scroll: self.scroll,
            loading: self.loading,
        };
        frame.render_widget(list, chunks[1]);

        let tabs = [
            ("events", self.mode == FetchMode::Events),
            ("repos", self.mode == FetchMode::Repos),
        ];
        let status = StatusBar {
            mode_tabs: &tabs,
            account: &self.account,
            last_sync: &self.last_sync,
            rate_limit: self.rate_limit,
            input_mode: self.input_mode,
            input_text: &self.input_buffer,
        };
        frame.render_widget(status, chunks[2]);

        if self.show_detail {
            if let Some(c) = self.selected_contribution() {
                frame.render_widget(DetailPanel { contribution: c }, size);
            }
        }

        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }

        if let Some(ref notification) = self.notification {
            frame.render_widget(Toast { notification }, size);
        }
    }

    fn ensure_scroll_bounds(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected >= self.scroll + visible_height {
            self.scroll = self.selected - visible_height + 1;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        }
    }
}
