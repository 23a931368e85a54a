// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! A ratatui + crossterm shell over the [`Controller`]: one tab per category, the current
//! page on the left and the selection's detail on the right. Fetches run as tasks on the
//! caller's tokio runtime and report back through a channel that the draw loop drains.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::debug;

use crate::browser::{
    run_effect, BrowserEffect, BrowserEvent, CategoryBrowser, LoadStatus, OffPageState,
    RelatedState,
};
use crate::client::ResourceSource;
use crate::config::Config;
use crate::controller::{Controller, NavigationOutcome};
use crate::model::{Category, EntityRef, RelatedItem};

mod theme;

use theme::TuiTheme;

const FOCUS_COLOR: Color = Color::LightGreen;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "HOLOCRON ";
const TOAST_TTL: Duration = Duration::from_secs(3);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive terminal UI until the user quits.
///
/// Must be called off the runtime's worker threads (e.g. from `spawn_blocking`); fetches are
/// spawned onto `runtime`.
pub fn run(
    config: &Config,
    source: Arc<dyn ResourceSource>,
    runtime: Handle,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(config.initial_tab, config.open.clone(), theme);
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();

    while !app.should_quit {
        while let Ok(event) = events_rx.try_recv() {
            app.handle_event(event);
        }
        for effect in app.take_effects() {
            spawn_effect(&runtime, Arc::clone(&source), effect, events_tx.clone());
        }

        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn spawn_effect(
    runtime: &Handle,
    source: Arc<dyn ResourceSource>,
    effect: BrowserEffect,
    events: UnboundedSender<BrowserEvent>,
) {
    runtime.spawn(async move {
        let event = run_effect(source.as_ref(), effect).await;
        if events.send(event).is_err() {
            debug!("ui closed before fetch completed");
        }
    });
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let (header_area, main_area, status_area) = (rows[0], rows[1], rows[2]);

    let compact = stack_panes_vertically(main_area);
    let direction = if compact { Direction::Vertical } else { Direction::Horizontal };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_area);
    let (list_area, detail_area) = (panes[0], panes[1]);

    let tabs = Tabs::new(tab_titles())
        .select(app.controller.active().index())
        .style(app.theme.base_style())
        .highlight_style(app.theme.active_tab_style())
        .divider("|");
    frame.render_widget(tabs, header_area);

    let browser = app.controller.browser();
    let mut list_block = Block::default()
        .borders(Borders::ALL)
        .title(view_title(browser.category().tab_label(), None))
        .border_style(app.theme.panel_border_style(app.focus == Focus::List));
    if let Some(indicator) = page_indicator(browser) {
        list_block = list_block.title_bottom(Line::from(indicator).alignment(Alignment::Right));
    }
    match browser.status() {
        LoadStatus::Loading => {
            let loading =
                Paragraph::new("Loading…").style(app.theme.dim_style()).block(list_block);
            frame.render_widget(loading, list_area);
        }
        LoadStatus::Error(message) => {
            let error = Paragraph::new(format!("Error: {message}"))
                .style(app.theme.error_style())
                .wrap(Wrap { trim: false })
                .block(list_block);
            frame.render_widget(error, list_area);
        }
        LoadStatus::Ready => {
            let cursor_style = if app.focus == Focus::List {
                app.theme.selection_style()
            } else {
                app.theme.dim_style()
            };
            let list = List::new(list_items(browser, &app.theme))
                .block(list_block)
                .highlight_style(cursor_style);
            frame.render_stateful_widget(list, list_area, &mut app.list_state);
        }
    }

    let related_len = app.related_items().len();
    if related_len > 0 {
        app.related_cursor = app.related_cursor.min(related_len - 1);
    }
    let browser = app.controller.browser();
    let cursor = (app.focus == Focus::Detail && related_len > 0).then_some(app.related_cursor);
    let (lines, cursor_line) = detail_lines(browser, &app.theme, cursor);
    let detail_block = Block::default()
        .borders(Borders::ALL)
        .title(detail_title(browser))
        .border_style(app.theme.panel_border_style(app.focus == Focus::Detail));
    let scroll = detail_scroll(cursor_line, detail_block.inner(detail_area).height);
    let detail = Paragraph::new(lines)
        .block(detail_block)
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(detail, detail_area);

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => Some(message),
        Some(_) => {
            app.toast = None;
            None
        }
        None => None,
    };
    let status = Paragraph::new(footer_help_line(app.focus, toast.as_deref(), compact));
    frame.render_widget(status, status_area);
    let brand = Paragraph::new(footer_brand_line()).alignment(Alignment::Right);
    frame.render_widget(brand, status_area);

    if app.show_help {
        render_help(frame, main_area);
    }
}

// Extracted pane/footer/help rendering helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    controller: Controller,
    theme: TuiTheme,
    focus: Focus,
    list_state: ListState,
    /// Browser selection index the list cursor last jumped to.
    synced_selection: Option<usize>,
    related_cursor: usize,
    pending_effects: Vec<BrowserEffect>,
    toast: Option<Toast>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    fn new(initial: Category, open: Option<EntityRef>, theme: TuiTheme) -> Self {
        let (controller, effects) = Controller::new(initial);
        let mut app = Self {
            controller,
            theme,
            focus: Focus::List,
            list_state: ListState::default(),
            synced_selection: None,
            related_cursor: 0,
            pending_effects: Vec::new(),
            toast: None,
            show_help: false,
            should_quit: false,
        };
        app.queue(effects);
        if let Some(reference) = open {
            app.navigate_to(reference);
        }
        app
    }

    fn take_effects(&mut self) -> Vec<BrowserEffect> {
        std::mem::take(&mut self.pending_effects)
    }

    fn queue(&mut self, effects: impl IntoIterator<Item = BrowserEffect>) {
        for effect in effects {
            if matches!(effect, BrowserEffect::ResolveRelated { .. }) {
                self.related_cursor = 0;
            }
            self.pending_effects.push(effect);
        }
    }

    fn handle_event(&mut self, event: BrowserEvent) {
        let effects = self.controller.dispatch(event);
        self.queue(effects);
        self.sync_list_cursor();
    }

    /// Clamps the cursor to the loaded page and moves it onto a selection that just appeared.
    fn sync_list_cursor(&mut self) {
        let browser = self.controller.browser();
        let len = browser.records().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }

        let selected = browser.selected_index();
        if selected.is_some() && selected != self.synced_selection {
            self.synced_selection = selected;
            self.list_state.select(selected);
            return;
        }
        self.synced_selection = selected;
        let cursor = self.list_state.selected().map_or(0, |cursor| cursor.min(len - 1));
        self.list_state.select(Some(cursor));
    }

    fn reset_list_cursor(&mut self) {
        self.list_state.select(None);
        self.synced_selection = None;
    }

    fn related_items(&self) -> Vec<&RelatedItem> {
        match self.controller.browser().related() {
            RelatedState::Ready(groups) => groups.iter().flat_map(|group| &group.items).collect(),
            RelatedState::Idle | RelatedState::Resolving { .. } => Vec::new(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(digit @ '1'..='6') => {
                let tab = digit
                    .to_digit(10)
                    .and_then(|n| Category::ALL.get(n as usize - 1))
                    .copied();
                if let Some(category) = tab {
                    self.activate_tab(category);
                }
            }
            KeyCode::Char('[') => self.activate_tab(self.controller.active().prev()),
            KeyCode::Char(']') => self.activate_tab(self.controller.active().next()),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.cycle(),
            KeyCode::Char('r') => {
                let effect = self.controller.browser_mut().reload();
                self.queue([effect]);
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => {
                let effect = self.controller.browser_mut().prev_page();
                self.change_page(effect);
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
                let effect = self.controller.browser_mut().next_page();
                self.change_page(effect);
            }
            _ => match self.focus {
                Focus::List => self.handle_list_key(code),
                Focus::Detail => self.handle_detail_key(code),
            },
        }

        false
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let len = self.controller.browser().records().len();
        if len == 0 {
            return;
        }
        let cursor = self.list_state.selected().unwrap_or(0);
        match code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_state.select(Some((cursor + 1).min(len - 1)));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_state.select(Some(cursor.saturating_sub(1)));
            }
            KeyCode::Home | KeyCode::Char('g') => self.list_state.select(Some(0)),
            KeyCode::End | KeyCode::Char('G') => self.list_state.select(Some(len - 1)),
            KeyCode::Enter => {
                let effect = self.controller.browser_mut().select_index(cursor);
                self.queue(effect);
                self.synced_selection = Some(cursor);
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        let len = self.related_items().len();
        if len == 0 {
            return;
        }
        match code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.related_cursor = (self.related_cursor + 1) % len;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.related_cursor = (self.related_cursor + len - 1) % len;
            }
            KeyCode::Enter => {
                let target = self
                    .related_items()
                    .get(self.related_cursor)
                    .map(|item| item.reference.clone());
                if let Some(reference) = target {
                    self.navigate_to(reference);
                }
            }
            _ => {}
        }
    }

    fn activate_tab(&mut self, category: Category) {
        let effects = self.controller.activate_tab(category);
        self.queue(effects);
        self.reset_list_cursor();
        self.focus = Focus::List;
    }

    fn change_page(&mut self, effect: Option<BrowserEffect>) {
        if let Some(effect) = effect {
            self.queue([effect]);
            self.reset_list_cursor();
        }
    }

    fn navigate_to(&mut self, reference: EntityRef) {
        let segment = reference.category_segment().unwrap_or_default().to_owned();
        let previous = self.controller.active();
        let (outcome, effects) = self.controller.on_navigate(reference, &segment);
        match outcome {
            NavigationOutcome::Routed(category) => {
                if category != previous {
                    self.reset_list_cursor();
                }
                self.focus = Focus::List;
                self.queue(effects);
                self.sync_list_cursor();
            }
            NavigationOutcome::UnknownCategory(label) => {
                self.set_toast(format!("No tab for category \"{label}\""));
            }
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_TTL });
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error + Send + Sync>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
