// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use gridedit_app::{
    AppCommand, AppEvent, AppMode, AppState, COLUMNS, Column, ColumnKind, CommitOutcome,
    CommitTrigger, EditCell, Record, RecordKey, RecordPatch, RowEvent,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const HALF_PAGE_ROWS: isize = 10;
const STATUS_TTL: Duration = Duration::from_secs(4);
const INPUT_CURSOR: &str = "▏";
const DELETE_LABEL: &str = "Delete";
const ADD_BUTTON_LABEL: &str = " Add a row ";

pub trait AppRuntime {
    fn load_rows(&mut self) -> Result<Vec<Record>>;
    fn add_row(&mut self) -> Result<RowEvent>;
    fn delete_row(&mut self, key: &RecordKey) -> Result<RowEvent>;
    fn save_row(&mut self, key: &RecordKey, patch: &RecordPatch) -> Result<RowEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct TableUiState {
    selected_row: usize,
    selected_col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableCommand {
    MoveRow(isize),
    MoveColumn(isize),
    MoveHalfPageDown,
    MoveHalfPageUp,
    JumpFirstRow,
    JumpLastRow,
    JumpFirstColumn,
    JumpLastColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlurMove {
    Stay,
    Row(isize),
    Column(isize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    rows: Vec<Record>,
    table_state: TableUiState,
    active_cell: Option<EditCell>,
    cell_error: Option<String>,
    help_visible: bool,
    status_token: u64,
    pending_row_selection: Option<RecordKey>,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    match refresh_view_data(runtime, &mut view_data) {
        Ok(()) => tracing::info!(rows = view_data.rows.len(), "grid ready"),
        Err(error) => {
            tracing::error!(%error, "initial row load failed");
            state.dispatch(AppCommand::SetStatus(format!("load failed: {error}")));
        }
    }

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
        if !has_event {
            continue;
        }
        match event::read().context("read event") {
            Ok(Event::Key(key)) => {
                if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
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

    tracing::info!("leaving grid");
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

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_TTL);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    match state.mode.clone() {
        AppMode::ConfirmDelete(target) => {
            handle_confirm_key(state, runtime, view_data, internal_tx, key, &target);
            false
        }
        AppMode::Edit => {
            handle_edit_key(state, runtime, view_data, internal_tx, key);
            false
        }
        AppMode::Nav => handle_nav_key(state, runtime, view_data, internal_tx, key),
    }
}

fn handle_nav_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if let Some(command) = table_command_for_key(key) {
        apply_table_command(view_data, command);
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            add_row(state, runtime, view_data, internal_tx);
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            request_delete(state, view_data, internal_tx);
        }
        (KeyCode::Enter, _) | (KeyCode::Char('i'), KeyModifiers::NONE) => {
            activate_selected_cell(state, view_data, internal_tx);
        }
        _ => {}
    }
    false
}

fn table_command_for_key(key: KeyEvent) -> Option<TableCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Some(TableCommand::MoveRow(1)),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Some(TableCommand::MoveRow(-1)),
        (KeyCode::Char('h'), _) | (KeyCode::Left, _) => Some(TableCommand::MoveColumn(-1)),
        (KeyCode::Char('l'), _) | (KeyCode::Right, _) => Some(TableCommand::MoveColumn(1)),
        (KeyCode::Tab, _) => Some(TableCommand::MoveColumn(1)),
        (KeyCode::BackTab, _) => Some(TableCommand::MoveColumn(-1)),
        (KeyCode::Char('d'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(TableCommand::MoveHalfPageDown)
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(TableCommand::MoveHalfPageUp)
        }
        (KeyCode::Char('g'), _) | (KeyCode::Home, _) => Some(TableCommand::JumpFirstRow),
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Some(TableCommand::JumpLastRow),
        (KeyCode::Char('^'), _) => Some(TableCommand::JumpFirstColumn),
        (KeyCode::Char('$'), _) => Some(TableCommand::JumpLastColumn),
        _ => None,
    }
}

fn apply_table_command(view_data: &mut ViewData, command: TableCommand) {
    match command {
        TableCommand::MoveRow(delta) => move_row(view_data, delta),
        TableCommand::MoveColumn(delta) => move_col(view_data, delta),
        TableCommand::MoveHalfPageDown => move_row(view_data, HALF_PAGE_ROWS),
        TableCommand::MoveHalfPageUp => move_row(view_data, -HALF_PAGE_ROWS),
        TableCommand::JumpFirstRow => view_data.table_state.selected_row = 0,
        TableCommand::JumpLastRow => {
            view_data.table_state.selected_row = view_data.rows.len().saturating_sub(1);
        }
        TableCommand::JumpFirstColumn => view_data.table_state.selected_col = 0,
        TableCommand::JumpLastColumn => view_data.table_state.selected_col = COLUMNS.len() - 1,
    }
}

fn move_row(view_data: &mut ViewData, delta: isize) {
    if view_data.rows.is_empty() {
        view_data.table_state.selected_row = 0;
        return;
    }
    let max = view_data.rows.len() as isize - 1;
    let next = (view_data.table_state.selected_row as isize + delta).clamp(0, max);
    view_data.table_state.selected_row = next as usize;
}

fn move_col(view_data: &mut ViewData, delta: isize) {
    let max = COLUMNS.len() as isize - 1;
    let next = (view_data.table_state.selected_col as isize + delta).clamp(0, max);
    view_data.table_state.selected_col = next as usize;
}

fn selected_record(view_data: &ViewData) -> Option<&Record> {
    view_data.rows.get(view_data.table_state.selected_row)
}

fn selected_column(view_data: &ViewData) -> Column {
    COLUMNS[view_data.table_state.selected_col.min(COLUMNS.len() - 1)]
}

fn add_row<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let event = match runtime.add_row() {
        Ok(event) => event,
        Err(error) => {
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("add failed: {error}"),
            );
            return;
        }
    };
    if let RowEvent::Added(record) = &event {
        view_data.pending_row_selection = Some(record.key.clone());
    }
    apply_row_event(state, runtime, view_data, internal_tx, &event);
}

fn request_delete(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(record) = selected_record(view_data) else {
        emit_status(state, view_data, internal_tx, "no row selected");
        return;
    };
    let key = record.key.clone();
    state.dispatch(AppCommand::RequestDelete(key));
}

fn activate_selected_cell(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let column = selected_column(view_data);
    let Some(record) = selected_record(view_data).cloned() else {
        emit_status(state, view_data, internal_tx, "no row selected");
        return;
    };

    match column.kind {
        ColumnKind::Operation => request_delete(state, view_data, internal_tx),
        ColumnKind::Data(field) if field.is_editable() => {
            let mut cell = EditCell::new(record.key.clone(), field);
            if cell.begin_edit(&record) {
                view_data.active_cell = Some(cell);
                view_data.cell_error = None;
                state.dispatch(AppCommand::EnterEditMode);
            }
        }
        ColumnKind::Data(_) => {
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("{} is read-only", column.title),
            );
        }
    }
}

fn handle_edit_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let blur = match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => {
            commit_active_cell(state, runtime, view_data, internal_tx, CommitTrigger::Enter);
            return;
        }
        (KeyCode::Esc, _) => Some(BlurMove::Stay),
        (KeyCode::Tab, _) => Some(BlurMove::Column(1)),
        (KeyCode::BackTab, _) => Some(BlurMove::Column(-1)),
        (KeyCode::Up, _) => Some(BlurMove::Row(-1)),
        (KeyCode::Down, _) => Some(BlurMove::Row(1)),
        _ => None,
    };
    if let Some(movement) = blur {
        if commit_active_cell(state, runtime, view_data, internal_tx, CommitTrigger::Blur) {
            match movement {
                BlurMove::Stay => {}
                BlurMove::Row(delta) => move_row(view_data, delta),
                BlurMove::Column(delta) => move_col(view_data, delta),
            }
        }
        return;
    }

    let Some(cell) = view_data.active_cell.as_mut() else {
        state.dispatch(AppCommand::ExitToNav);
        return;
    };
    match (key.code, key.modifiers) {
        (KeyCode::Backspace, _) => cell.pop_char(),
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            cell.clear_input();
        }
        (KeyCode::Char(ch), modifiers)
            if modifiers.is_empty() || modifiers == KeyModifiers::SHIFT =>
        {
            cell.push_char(ch);
        }
        _ => {}
    }
}

/// Runs the shared Enter/blur commit. Returns true once the cell is back
/// in display mode.
fn commit_active_cell<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    trigger: CommitTrigger,
) -> bool {
    let Some(cell) = view_data.active_cell.as_mut() else {
        state.dispatch(AppCommand::ExitToNav);
        return true;
    };

    match cell.commit(trigger) {
        CommitOutcome::Idle => {
            view_data.active_cell = None;
            state.dispatch(AppCommand::ExitToNav);
            true
        }
        CommitOutcome::Rejected(error) => {
            let message = error.to_string();
            view_data.cell_error = Some(message.clone());
            emit_status(state, view_data, internal_tx, message);
            false
        }
        CommitOutcome::Accepted(patch) => {
            let key = cell.id().key.clone();
            view_data.active_cell = None;
            view_data.cell_error = None;
            state.dispatch(AppCommand::ExitToNav);
            match runtime.save_row(&key, &patch) {
                Ok(event) => apply_row_event(state, runtime, view_data, internal_tx, &event),
                Err(error) => emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("save failed: {error}"),
                ),
            }
            true
        }
    }
}

fn handle_confirm_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
    target: &RecordKey,
) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            state.dispatch(AppCommand::ExitToNav);
            match runtime.delete_row(target) {
                Ok(event) => apply_row_event(state, runtime, view_data, internal_tx, &event),
                Err(error) => emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("delete failed: {error}"),
                ),
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            dispatch_with_status_clear(state, view_data, internal_tx, AppCommand::CancelDelete);
        }
        _ => {}
    }
}

fn dispatch_with_status_clear(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(internal_tx, view_data.status_token);
    }
}

fn apply_row_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    event: &RowEvent,
) {
    if event.changed_rows()
        && let Err(error) = refresh_view_data(runtime, view_data)
    {
        tracing::error!(%error, "row reload failed");
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("reload failed: {error}"),
        );
        return;
    }
    emit_status(state, view_data, internal_tx, event.status_message());
}

fn refresh_view_data<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    view_data.rows = runtime.load_rows()?;
    if let Some(cell) = &view_data.active_cell
        && !view_data.rows.iter().any(|row| row.key == cell.id().key)
    {
        view_data.active_cell = None;
        view_data.cell_error = None;
    }
    clamp_table_cursor(view_data);
    apply_pending_row_selection(view_data);
    Ok(())
}

fn clamp_table_cursor(view_data: &mut ViewData) {
    let max_row = view_data.rows.len().saturating_sub(1);
    view_data.table_state.selected_row = view_data.table_state.selected_row.min(max_row);
    view_data.table_state.selected_col =
        view_data.table_state.selected_col.min(COLUMNS.len() - 1);
}

fn apply_pending_row_selection(view_data: &mut ViewData) {
    let Some(key) = view_data.pending_row_selection.take() else {
        return;
    };
    if let Some(index) = view_data.rows.iter().position(|row| row.key == key) {
        view_data.table_state.selected_row = index;
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let toolbar = Paragraph::new(toolbar_line(view_data))
        .block(Block::default().title("gridedit").borders(Borders::ALL));
    frame.render_widget(toolbar, layout[0]);

    render_table(frame, layout[1], view_data);

    let status_widget = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if let Some(key) = state.pending_delete() {
        let area = centered_rect(44, 30, frame.area());
        frame.render_widget(Clear, area);
        let prompt = Paragraph::new(render_confirm_text(view_data, key)).block(
            Block::default()
                .title("delete")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(prompt, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn toolbar_line(view_data: &ViewData) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            ADD_BUTTON_LABEL,
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" a"),
        Span::styled(
            format!("   {} rows", view_data.rows.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn column_constraint(column: Column) -> Constraint {
    match (column.kind, column.width_percent) {
        (_, Some(percent)) => Constraint::Percentage(percent),
        (ColumnKind::Operation, None) => Constraint::Length(11),
        (ColumnKind::Data(_), None) => Constraint::Fill(1),
    }
}

fn render_table(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let widths = COLUMNS.iter().copied().map(column_constraint);

    let header = Row::new(COLUMNS.iter().map(|column| {
        Cell::from(column.title).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows = view_data.rows.iter().enumerate().map(|(row_index, record)| {
        let selected_row = row_index == view_data.table_state.selected_row;
        let cells = COLUMNS
            .iter()
            .enumerate()
            .map(|(column_index, column)| {
                let selected_cell =
                    selected_row && column_index == view_data.table_state.selected_col;
                let mut style = Style::default();
                if selected_row {
                    style = style.bg(Color::DarkGray);
                }
                if selected_cell {
                    style = Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD);
                }
                Cell::from(cell_line(record, *column, view_data)).style(style)
            })
            .collect::<Vec<_>>();
        Row::new(cells)
    });

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().title("rows").borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn editing_input<'a>(view_data: &'a ViewData, record: &Record, column: Column) -> Option<&'a str> {
    let cell = view_data.active_cell.as_ref()?;
    if cell.id().key != record.key || Some(cell.id().field) != column.field() {
        return None;
    }
    cell.input()
}

fn cell_line(record: &Record, column: Column, view_data: &ViewData) -> Line<'static> {
    let field = match column.kind {
        ColumnKind::Operation => {
            return Line::from(Span::styled(
                DELETE_LABEL,
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ));
        }
        ColumnKind::Data(field) => field,
    };

    let Some(input) = editing_input(view_data, record, column) else {
        return Line::from(record.value(field).to_owned());
    };

    let mut spans = vec![
        Span::styled(
            format!("{input}{INPUT_CURSOR}"),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
    ];
    if let Some(error) = &view_data.cell_error {
        spans.push(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

fn render_confirm_text(view_data: &ViewData, key: &RecordKey) -> String {
    let label = view_data
        .rows
        .iter()
        .find(|row| row.key == *key)
        .map_or_else(|| format!("row {key}"), |row| row.name.clone());
    format!("Sure to delete?\n\n{label}\n\ny/enter delete  n/esc cancel")
}

fn help_overlay_text() -> &'static str {
    "j/k ↑/↓    move row\n\
     h/l ←/→    move column\n\
     g/G        first/last row (also home/end)\n\
     ^/$        first/last column\n\
     ctrl+d/u   move 10 rows down/up\n\
     a          add a row\n\
     enter/i    edit name, or delete on the operation column\n\
     d          delete selected row\n\
     \n\
     while editing:\n\
     enter      save\n\
     esc/tab/↑/↓ leave the cell (saves)\n\
     ctrl+u     clear input\n\
     \n\
     ?          close help\n\
     ctrl+q     quit"
}

fn status_text(state: &AppState) -> String {
    let mode = mode_label(&state.mode);
    let keys = match &state.mode {
        AppMode::Nav => "a add | enter edit | d delete | ? help | q quit",
        AppMode::Edit => "enter save | esc/tab/↑/↓ leave | ctrl+u clear",
        AppMode::ConfirmDelete(_) => "y confirm | n cancel",
    };
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {keys}"),
        None => format!("{mode} | {keys}"),
    }
}

fn mode_label(mode: &AppMode) -> &'static str {
    match mode {
        AppMode::Nav => "NAV",
        AppMode::Edit => "EDIT",
        AppMode::ConfirmDelete(_) => "CONFIRM",
    }
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
