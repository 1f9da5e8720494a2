use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;

use crate::calendar::{
    build_month, day_detail, make_timestamp, today, YearMonth, NO_TASKS, WEEKDAY_LABELS,
};
use crate::database::{Database, TaskStore};
use crate::grouping::group_by_date;
use crate::models::{DayCell, DayDetail, MonthGrid, PopupMode, TasksByDate};

pub struct App {
    db: Database,
    pub today: NaiveDate,
    pub current: YearMonth,
    pub selected: NaiveDate,
    pub tasks_by_date: TasksByDate,
    pub grid: MonthGrid,
    pub detail: Option<DayDetail>,
    pub detail_list_state: ListState,
    pub popup_mode: PopupMode,
    pub input_buffer: String,
    pub status_message: Option<String>,
    pub should_quit: bool,
    // Screen areas of the day cells from the last draw, for mouse clicks
    cell_areas: Vec<(Rect, NaiveDate)>,
}

impl App {
    pub fn new(db: Database, today: NaiveDate) -> Result<Self> {
        let current = YearMonth::of(today);
        let mut app = App {
            db,
            today,
            current,
            selected: today,
            tasks_by_date: TasksByDate::new(),
            grid: build_month(current, today, &TasksByDate::new()),
            detail: None,
            detail_list_state: ListState::default(),
            popup_mode: PopupMode::None,
            input_buffer: String::new(),
            status_message: None,
            should_quit: false,
            cell_areas: Vec::new(),
        };
        app.refresh_data()?;
        Ok(app)
    }

    /// Re-reads every task and rebuilds the grouping and the grid. On failure
    /// the previous grid stays on screen.
    pub fn refresh_data(&mut self) -> Result<()> {
        self.show_month(self.current, self.selected)
    }

    /// Rebuilds for `month` and only then moves the view and cursor there,
    /// so a failed read leaves month, cursor and grid untouched.
    fn show_month(&mut self, month: YearMonth, selected: NaiveDate) -> Result<()> {
        let tasks_by_date = group_by_date(&self.db)?;
        self.grid = build_month(month, self.today, &tasks_by_date);
        self.tasks_by_date = tasks_by_date;
        self.current = month;
        self.selected = selected;
        debug!("rebuilt grid for {}", self.current);
        Ok(())
    }

    pub fn next_month(&mut self) -> Result<()> {
        let month = self.current.next()?;
        self.show_month(month, month.clamp_day(self.selected))
    }

    pub fn previous_month(&mut self) -> Result<()> {
        let month = self.current.prev()?;
        self.show_month(month, month.clamp_day(self.selected))
    }

    pub fn go_to_today(&mut self) -> Result<()> {
        self.show_month(YearMonth::of(self.today), self.today)
    }

    /// Moves the selected day, switching months when it leaves the current one.
    pub fn move_selection(&mut self, days: i64) -> Result<()> {
        let Some(target) = self.selected.checked_add_signed(Duration::days(days)) else {
            return Ok(());
        };
        if !self.current.contains(target) {
            return self.show_month(YearMonth::of(target), target);
        }
        self.selected = target;
        Ok(())
    }

    pub fn open_day_detail(&mut self, date: NaiveDate) {
        self.selected = date;
        let detail = day_detail(date, &self.tasks_by_date);
        self.detail_list_state
            .select(if detail.entries.is_empty() { None } else { Some(0) });
        self.detail = Some(detail);
        self.popup_mode = PopupMode::DayDetail;
    }

    fn reload_detail(&mut self) {
        let keep = self.detail_list_state.selected();
        if let Some(date) = self.detail.as_ref().map(|d| d.date) {
            self.open_day_detail(date);
            let len = self.detail.as_ref().map_or(0, |d| d.entries.len());
            if len > 0 {
                self.detail_list_state.select(keep.map(|i| i.min(len - 1)));
            }
        }
    }

    pub fn next_item(&mut self) {
        let len = self.detail.as_ref().map_or(0, |d| d.entries.len());
        if len == 0 {
            return;
        }
        let i = match self.detail_list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.detail_list_state.select(Some(i));
    }

    pub fn previous_item(&mut self) {
        let len = self.detail.as_ref().map_or(0, |d| d.entries.len());
        if len == 0 {
            return;
        }
        let i = match self.detail_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.detail_list_state.select(Some(i));
    }

    fn selected_task_id(&self) -> Option<i64> {
        let i = self.detail_list_state.selected()?;
        self.detail.as_ref()?.entries.get(i).map(|entry| entry.id)
    }

    pub fn toggle_selected_task(&mut self) -> Result<()> {
        if let Some(id) = self.selected_task_id() {
            let status = self.db.toggle_task_status(id)?;
            self.status_message = Some(format!("Task marked {}", status));
            self.refresh_data()?;
            self.reload_detail();
        }
        Ok(())
    }

    pub fn delete_selected_task(&mut self) -> Result<()> {
        if let Some(id) = self.selected_task_id() {
            self.db.delete_task(id)?;
            self.status_message = Some("Task deleted".to_string());
            self.refresh_data()?;
            self.reload_detail();
        }
        Ok(())
    }

    pub fn show_new_task_popup(&mut self) {
        self.popup_mode = PopupMode::NewTask;
        self.input_buffer.clear();
    }

    pub fn close_popup(&mut self) {
        self.popup_mode = PopupMode::None;
        self.detail = None;
        self.detail_list_state.select(None);
        self.input_buffer.clear();
    }

    pub fn handle_popup_input(&mut self, c: char) -> Result<()> {
        match self.popup_mode {
            PopupMode::NewTask => {
                if c == '\n' || c == '\r' {
                    self.submit_new_task()?;
                } else if !c.is_control() {
                    self.input_buffer.push(c);
                }
            }
            PopupMode::DayDetail => match c {
                ' ' | 'x' => self.toggle_selected_task()?,
                'd' => self.delete_selected_task()?,
                'j' => self.next_item(),
                'k' => self.previous_item(),
                'q' => self.close_popup(),
                _ => {}
            },
            PopupMode::None => {}
        }
        Ok(())
    }

    pub fn handle_backspace(&mut self) {
        if matches!(self.popup_mode, PopupMode::NewTask) {
            self.input_buffer.pop();
        }
    }

    /// Creates a task on the selected day from "[HH:MM] title".
    pub fn submit_new_task(&mut self) -> Result<()> {
        let Some((time, title)) = parse_new_task_input(&self.input_buffer) else {
            self.status_message = Some("Task title is empty".to_string());
            return Ok(());
        };
        let timestamp = make_timestamp(self.selected, time)?;
        let title = title.to_string();

        self.db.create_task(&title, &timestamp)?;
        self.close_popup();
        self.status_message = Some(format!("Added '{}' at {}", title, timestamp));
        self.refresh_data()
    }

    pub fn date_at(&self, column: u16, row: u16) -> Option<NaiveDate> {
        let position = Position::new(column, row);
        self.cell_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, date)| *date)
    }

    fn report(&mut self, result: Result<()>) {
        if let Err(err) = result {
            warn!("action failed: {err:#}");
            self.status_message = Some(format!("Error: {err:#}"));
        }
    }
}

/// Splits popup input into an optional leading time and the title.
fn parse_new_task_input(input: &str) -> Option<(Option<&str>, &str)> {
    let input = input.trim();
    let (time, title) = match input.split_once(' ') {
        Some((first, rest))
            if NaiveTime::parse_from_str(first, "%H:%M").is_ok()
                || NaiveTime::parse_from_str(first, "%H:%M:%S").is_ok() =>
        {
            (Some(first), rest.trim())
        }
        _ => (None, input),
    };

    if title.is_empty() {
        None
    } else {
        Some((time, title))
    }
}

pub fn run_tui(db: Database) -> Result<()> {
    let mut app = App::new(db, today())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.popup_mode != PopupMode::None {
                    match key.code {
                        KeyCode::Esc => {
                            app.close_popup();
                        }
                        KeyCode::Enter => {
                            if app.popup_mode == PopupMode::NewTask {
                                let res = app.submit_new_task();
                                app.report(res);
                            } else {
                                app.close_popup();
                            }
                        }
                        KeyCode::Down => app.next_item(),
                        KeyCode::Up => app.previous_item(),
                        KeyCode::Char(c) => {
                            let res = app.handle_popup_input(c);
                            app.report(res);
                        }
                        KeyCode::Backspace => {
                            app.handle_backspace();
                        }
                        _ => {}
                    }
                } else {
                    app.status_message = None;
                    let res = match key.code {
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                            Ok(())
                        }
                        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
                        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
                        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-7),
                        KeyCode::Down | KeyCode::Char('j') => app.move_selection(7),
                        KeyCode::Char('n') | KeyCode::PageDown => app.next_month(),
                        KeyCode::Char('p') | KeyCode::PageUp => app.previous_month(),
                        KeyCode::Char('t') => app.go_to_today(),
                        KeyCode::Char('r') => app.refresh_data(),
                        KeyCode::Char('a') => {
                            app.show_new_task_popup();
                            Ok(())
                        }
                        KeyCode::Enter => {
                            app.open_day_detail(app.selected);
                            Ok(())
                        }
                        _ => Ok(()),
                    };
                    app.report(res);
                }
            }
            Event::Mouse(mouse) if app.popup_mode == PopupMode::None => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    if let Some(date) = app.date_at(mouse.column, mouse.row) {
                        app.open_day_detail(date);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled("◀ p  ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.current.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  n ▶", Style::default().fg(Color::Cyan)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Schedulr"));
    f.render_widget(header, chunks[0]);

    let label_areas = seven_columns(chunks[1]);
    for (label, area) in WEEKDAY_LABELS.iter().zip(label_areas.iter()) {
        let label = Paragraph::new(*label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(label, *area);
    }

    render_grid(f, app, chunks[2]);

    let footer_text = match &app.status_message {
        Some(message) => message.clone(),
        None => "←/→/↑/↓: Move • Enter: Day tasks • n/p: Month • t: Today • a: Add • r: Refresh • q: Quit"
            .to_string(),
    };
    f.render_widget(
        Paragraph::new(footer_text).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );

    match app.popup_mode {
        PopupMode::DayDetail => render_day_detail(f, app),
        PopupMode::NewTask => render_new_task(f, app),
        PopupMode::None => {}
    }
}

fn seven_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(area)
        .to_vec()
}

fn render_grid(f: &mut Frame, app: &mut App, area: Rect) {
    app.cell_areas.clear();
    let rows = app.grid.weeks.len().max(1) as u32;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows); rows as usize])
        .split(area);

    for (week, row_area) in app.grid.weeks.iter().zip(row_areas.iter()) {
        for (slot, cell_area) in week.iter().zip(seven_columns(*row_area)) {
            match slot {
                None => {
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray));
                    f.render_widget(block, cell_area);
                }
                Some(cell) => {
                    let selected = cell.date == app.selected;
                    f.render_widget(day_widget(cell, selected), cell_area);
                    app.cell_areas.push((cell_area, cell.date));
                }
            }
        }
    }
}

fn day_widget(cell: &DayCell, selected: bool) -> Paragraph<'static> {
    let mut style = Style::default().fg(Color::White);
    if !cell.is_current_month {
        style = style.fg(Color::DarkGray);
    }
    if cell.has_tasks {
        style = style.fg(Color::LightCyan);
    }
    if cell.is_today {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let mut block = Block::default().borders(Borders::ALL);
    block = if selected {
        block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        block.border_style(Style::default().fg(Color::Blue))
    };

    let mut lines = vec![Line::from(Span::styled(
        cell.date.day().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right)];
    lines.extend(cell.preview_lines.iter().map(|preview| Line::from(preview.clone())));
    if cell.overflow_count > 0 {
        lines.push(Line::from(Span::styled(
            format!("+{} more", cell.overflow_count),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }

    Paragraph::new(lines).block(block).style(style)
}

fn render_day_detail(f: &mut Frame, app: &mut App) {
    let Some(detail) = &app.detail else {
        return;
    };

    let popup_area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!("Tasks for {}", detail.date.format("%A, %B %d, %Y")))
        .title_bottom(Line::from("Space: Toggle done • d: Delete • Esc: Close").alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .style(Style::default().bg(Color::Black).fg(Color::White));

    if detail.entries.is_empty() {
        let content = Paragraph::new(NO_TASKS)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(content, popup_area);
        return;
    }

    let items: Vec<ListItem> = detail
        .entries
        .iter()
        .map(|entry| {
            let title_style = if entry.completed {
                Style::default()
                    .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT)
                    .fg(Color::DarkGray)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!("{} {}", entry.glyph, entry.title), title_style)),
                Line::from(Span::styled(
                    format!("   Time: {}", entry.time),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::LightGreen)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, popup_area, &mut app.detail_list_state);
}

fn render_new_task(f: &mut Frame, app: &App) {
    let popup_area = centered_rect(60, 20, f.area());
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!("New task on {}", app.selected.format("%Y-%m-%d")))
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::DarkGray));
    let content = Paragraph::new(format!(
        "[HH:MM] Title\n\n> {}\n\nEnter: Save • Esc: Cancel",
        app.input_buffer
    ))
    .block(block)
    .style(Style::default().fg(Color::White));

    f.render_widget(content, popup_area);
}

// Helper function to create centered rectangles for popups
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn app_with(rows: &[(&str, &str)], today: NaiveDate) -> App {
        let mut db = Database::open_in_memory().unwrap();
        for (title, timestamp) in rows {
            db.create_task(title, timestamp).unwrap();
        }
        App::new(db, today).unwrap()
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn starts_on_todays_month() {
        let app = app_with(&[], d(2024, 6, 5));
        assert_eq!(app.current, YearMonth::new(2024, 6).unwrap());
        assert_eq!(app.selected, d(2024, 6, 5));
        assert_eq!((app.grid.year, app.grid.month), (2024, 6));
    }

    #[test]
    fn month_navigation_wraps_and_rebuilds() {
        let mut app = app_with(&[], d(2024, 1, 31));
        app.previous_month().unwrap();
        assert_eq!(app.current, YearMonth::new(2023, 12).unwrap());
        assert_eq!((app.grid.year, app.grid.month), (2023, 12));
        assert_eq!(app.selected, d(2023, 12, 31));

        app.next_month().unwrap();
        app.next_month().unwrap();
        assert_eq!(app.current, YearMonth::new(2024, 2).unwrap());
        assert_eq!(app.selected, d(2024, 2, 29));
    }

    #[test]
    fn navigation_picks_up_new_tasks() {
        let mut app = app_with(&[], d(2024, 6, 5));
        assert!(app.tasks_by_date.is_empty());

        app.db.create_task("Review", "2024-07-02 14:00:00").unwrap();
        app.next_month().unwrap();
        assert!(app.tasks_by_date.contains_key("2024-07-02"));
        assert!(app.grid.days().any(|cell| cell.date == d(2024, 7, 2) && cell.has_tasks));
    }

    #[test]
    fn failed_rebuild_keeps_previous_month() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedulr.db");
        let mut db = Database::new(&path).unwrap();
        db.create_task("Meeting", "2024-06-05 09:00:00").unwrap();
        let mut app = App::new(db, d(2024, 6, 28)).unwrap();

        let other = rusqlite::Connection::open(&path).unwrap();
        other.execute("DROP TABLE task", []).unwrap();

        assert!(app.next_month().is_err());
        assert!(app.previous_month().is_err());
        assert!(app.move_selection(7).is_err());
        assert!(app.go_to_today().is_err());

        assert_eq!(app.current, YearMonth::new(2024, 6).unwrap());
        assert_eq!((app.grid.year, app.grid.month), (2024, 6));
        assert_eq!(app.selected, d(2024, 6, 28));
        assert!(app.tasks_by_date.contains_key("2024-06-05"));

        // moves inside the month need no rebuild
        app.move_selection(-1).unwrap();
        assert_eq!(app.selected, d(2024, 6, 27));
    }

    #[test]
    fn moving_past_month_end_switches_month() {
        let mut app = app_with(&[], d(2024, 6, 28));
        app.move_selection(7).unwrap();
        assert_eq!(app.selected, d(2024, 7, 5));
        assert_eq!(app.current, YearMonth::new(2024, 7).unwrap());

        app.go_to_today().unwrap();
        assert_eq!(app.current, YearMonth::new(2024, 6).unwrap());
    }

    #[test]
    fn day_detail_lists_tasks_and_toggles() {
        let mut app = app_with(
            &[("Meeting", "2024-06-05 09:00:00"), ("Lunch", "2024-06-05 12:30:00")],
            d(2024, 6, 5),
        );
        app.open_day_detail(d(2024, 6, 5));
        assert_eq!(app.popup_mode, PopupMode::DayDetail);
        assert_eq!(app.detail.as_ref().unwrap().entries.len(), 2);

        app.next_item();
        app.toggle_selected_task().unwrap();
        let detail = app.detail.as_ref().unwrap();
        assert!(!detail.entries[0].completed);
        assert!(detail.entries[1].completed);
        assert_eq!(app.detail_list_state.selected(), Some(1));
    }

    #[test]
    fn deleting_last_task_empties_detail() {
        let mut app = app_with(&[("Meeting", "2024-06-05 09:00:00")], d(2024, 6, 5));
        app.open_day_detail(d(2024, 6, 5));
        app.delete_selected_task().unwrap();
        assert!(app.detail.as_ref().unwrap().entries.is_empty());
        assert!(!app.tasks_by_date.contains_key("2024-06-05"));
    }

    #[test]
    fn new_task_popup_creates_task_on_selected_day() {
        let mut app = app_with(&[], d(2024, 6, 5));
        app.show_new_task_popup();
        for c in "9:30 Standup".chars() {
            app.handle_popup_input(c).unwrap();
        }
        app.handle_popup_input('\r').unwrap();

        assert_eq!(app.popup_mode, PopupMode::None);
        let tasks = &app.tasks_by_date["2024-06-05"];
        assert_eq!(tasks[0].title, "Standup");
        assert_eq!(tasks[0].timestamp, "2024-06-05 09:30:00");
    }

    #[test]
    fn new_task_input_parsing() {
        assert_eq!(parse_new_task_input("10:00 Call"), Some((Some("10:00"), "Call")));
        assert_eq!(parse_new_task_input("Call mom"), Some((None, "Call mom")));
        assert_eq!(parse_new_task_input("10:00   "), Some((None, "10:00")));
        assert_eq!(parse_new_task_input("   "), None);
    }

    #[test]
    fn renders_month_and_detail_popup() {
        let mut app = app_with(&[("Meeting", "2024-06-05 09:00:00")], d(2024, 6, 5));
        let text = screen_text(&mut app);
        assert!(text.contains("June 2024"));
        assert!(text.contains("Mon"));
        assert!(text.contains("Meeting"));
        assert_eq!(app.cell_areas.len(), 30);

        let (area, date) = app.cell_areas[0];
        assert_eq!(date, d(2024, 6, 1));
        assert_eq!(app.date_at(area.x + 1, area.y + 1), Some(d(2024, 6, 1)));

        app.open_day_detail(d(2024, 6, 9));
        let text = screen_text(&mut app);
        assert!(text.contains(NO_TASKS));
    }
}
