// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use faraway_app::{
    AddItemForm, AppCommand, AppEvent, AppMode, AppState, DEFAULT_QUANTITY, Item, MAX_QUANTITY,
    MIN_QUANTITY, PackingStats, SortOrder,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

const APP_TITLE: &str = "🎂 Far Away 👨‍🌾";
const QUANTITY_PAGE: i64 = 10;
const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub default_quantity: u32,
    pub status_timeout: Duration,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            default_quantity: DEFAULT_QUANTITY,
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewData {
    options: UiOptions,
    form: AddItemForm,
    help_visible: bool,
    status_token: u64,
}

impl ViewData {
    fn new(options: UiOptions) -> Self {
        Self {
            options,
            form: AddItemForm::blank(options.default_quantity),
            help_visible: false,
            status_token: 0,
        }
    }

    fn reset_form(&mut self) {
        self.form = AddItemForm::blank(self.options.default_quantity);
    }
}

pub fn run_app(state: &mut AppState, options: UiOptions) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(options);
    let (internal_tx, internal_rx) = mpsc::channel();
    info!(items = state.list.len(), "packing list session started");

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    info!(items = state.list.len(), "packing list session ended");
    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64, after: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(after);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn dispatch(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) -> Vec<AppEvent> {
    debug!(?command, "dispatch");
    let events = state.dispatch(command);
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(
            internal_tx,
            view_data.status_token,
            view_data.options.status_timeout,
        );
    }
    events
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    dispatch(
        state,
        view_data,
        internal_tx,
        AppCommand::SetStatus(message.into()),
    );
}

fn handle_key_event(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    match state.mode {
        AppMode::Form => {
            handle_form_key(state, view_data, internal_tx, key);
            false
        }
        AppMode::Nav => handle_nav_key(state, view_data, internal_tx, key),
    }
}

fn handle_form_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            view_data.reset_form();
            dispatch(state, view_data, internal_tx, AppCommand::CloseForm);
        }
        (KeyCode::Enter, _) => {
            let form = view_data.form.clone();
            let events = dispatch(state, view_data, internal_tx, AppCommand::SubmitAdd(form));
            if events
                .iter()
                .any(|event| matches!(event, AppEvent::ItemAdded(_)))
            {
                view_data.reset_form();
            }
        }
        (KeyCode::Up, _) => view_data.form.step_quantity(1),
        (KeyCode::Down, _) => view_data.form.step_quantity(-1),
        (KeyCode::PageUp, _) => view_data.form.step_quantity(QUANTITY_PAGE),
        (KeyCode::PageDown, _) => view_data.form.step_quantity(-QUANTITY_PAGE),
        (KeyCode::Backspace, _) => {
            view_data.form.description.pop();
        }
        (KeyCode::Char(ch), modifiers) => {
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT {
                view_data.form.description.push(ch);
            }
        }
        _ => {}
    }
}

fn handle_nav_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let command = match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => {
            view_data.help_visible = true;
            return false;
        }
        KeyCode::Char('a') | KeyCode::Char('i') => AppCommand::OpenAddForm,
        KeyCode::Char('j') | KeyCode::Down => AppCommand::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => AppCommand::SelectPrev,
        KeyCode::Char('s') => AppCommand::Reorder(state.sort.next()),
        KeyCode::Char('1') => AppCommand::Reorder(SortOrder::Input),
        KeyCode::Char('2') => AppCommand::Reorder(SortOrder::Description),
        KeyCode::Char('3') => AppCommand::Reorder(SortOrder::Packed),
        KeyCode::Char('C') => AppCommand::Clear,
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            let Some(id) = state.selected_item_id() else {
                emit_status(state, view_data, internal_tx, "nothing to pack");
                return false;
            };
            AppCommand::Toggle(id)
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let Some(id) = state.selected_item_id() else {
                emit_status(state, view_data, internal_tx, "nothing to remove");
                return false;
            };
            AppCommand::Remove(id)
        }
        _ => return false,
    };
    dispatch(state, view_data, internal_tx, command);
    false
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let title = Paragraph::new(APP_TITLE)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout[0]);

    let form_style = if state.mode == AppMode::Form {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let form = Paragraph::new(render_form_text(state, view_data)).block(
        Block::default()
            .title("What do you need for your trip?")
            .borders(Borders::ALL)
            .style(form_style),
    );
    frame.render_widget(form, layout[1]);

    render_list(frame, layout[2], state);

    let stats = Paragraph::new(stats_text(&state.list.stats()))
        .style(Style::default().add_modifier(Modifier::ITALIC))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(stats, layout[3]);

    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, layout[4]);

    if view_data.help_visible {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_list(frame: &mut ratatui::Frame<'_>, area: Rect, state: &AppState) {
    let header = Row::new(["", "item", "qty"].map(|label| {
        Cell::from(label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows = state.list.items().iter().map(|item| {
        let mut style = Style::default();
        if item.packed {
            style = style
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        Row::new([
            Cell::from(checkbox(item)),
            Cell::from(item.description.clone()).style(style),
            Cell::from(item.quantity.to_string()).style(style),
        ])
    });

    let widths = [
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(5),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .block(
            Block::default()
                .title(list_title(state))
                .borders(Borders::ALL),
        );

    let mut table_state = TableState::default();
    if !state.list.is_empty() {
        table_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn checkbox(item: &Item) -> &'static str {
    if item.packed { "[x]" } else { "[ ]" }
}

fn list_title(state: &AppState) -> String {
    format!("packing list | {}", state.sort.label())
}

fn render_form_text(state: &AppState, view_data: &ViewData) -> String {
    let form = &view_data.form;
    let cursor = if state.mode == AppMode::Form { "_" } else { "" };
    let description = if form.description.is_empty() && state.mode != AppMode::Form {
        "press a to write what you need".to_owned()
    } else {
        format!("{}{cursor}", form.description)
    };
    format!(
        "qty {:>3} ({MIN_QUANTITY}-{MAX_QUANTITY}) | {description}",
        form.quantity
    )
}

fn stats_text(stats: &PackingStats) -> String {
    let Some(percent) = stats.percent_packed() else {
        return "Start adding some items to your packing list 📦".to_owned();
    };
    if stats.all_packed {
        return "You are ready to travel ✈".to_owned();
    }
    format!(
        "{} items on your list and you already packed {} ({percent:.2}%)",
        stats.total, stats.packed
    )
}

fn status_text(state: &AppState) -> String {
    let (mode, keys) = match state.mode {
        AppMode::Nav => (
            "NAV",
            "a add | space pack | d remove | s sort | C clear | ? help | q quit",
        ),
        AppMode::Form => (
            "ADD",
            "type description | up/down qty | pgup/pgdn qty±10 | enter add | esc cancel",
        ),
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {keys}"),
        None => format!("{mode} | {keys}"),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q/ctrl+c quit | ? help\n\
nav: j/k or up/down move | space/x/enter pack or unpack | d/delete remove\n\
nav: a/i add item | s cycle sort | 1 input order | 2 description | 3 packed status\n\
nav: C clear list | q quit\n\
add: type description | backspace erase | up/down qty | pgup/pgdn qty by 10\n\
add: enter add item | esc cancel"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
