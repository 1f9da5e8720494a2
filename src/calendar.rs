//! Month grid construction and day detail lookup.
//!
//! Weeks run Monday to Sunday. Every grid row has seven slots, and the
//! non-empty slots of a grid are exactly the days of its month in order.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use unicode_width::UnicodeWidthStr;

use crate::error::{CalendarError, CalendarResult};
use crate::grouping::display_time;
use crate::models::{DayCell, DayDetail, DetailEntry, MonthGrid, TasksByDate, WeekRow};

pub const PREVIEW_LIMIT: usize = 2;
pub const PREVIEW_TITLE_CHARS: usize = 12;
pub const NO_TASKS: &str = "No tasks for this day";
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A calendar month. Always holds a representable first day, so every
/// derived date is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| YearMonth { first })
            .ok_or(CalendarError::InvalidMonth { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            first: date - Duration::days(i64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Fails with `InvalidMonth` past the earliest representable month.
    pub fn prev(&self) -> CalendarResult<Self> {
        if self.month() == 1 {
            YearMonth::new(self.year() - 1, 12)
        } else {
            YearMonth::new(self.year(), self.month() - 1)
        }
    }

    /// Fails with `InvalidMonth` past the latest representable month.
    pub fn next(&self) -> CalendarResult<Self> {
        if self.month() == 12 {
            YearMonth::new(self.year() + 1, 1)
        } else {
            YearMonth::new(self.year(), self.month() + 1)
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days().last().unwrap_or(self.first)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month();
        self.first.iter_days().take_while(move |date| date.month() == month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Moves `date` into this month, clamping the day to the month's length.
    pub fn clamp_day(&self, date: NaiveDate) -> NaiveDate {
        let last = self.last_day();
        self.first + Duration::days(i64::from(date.day().min(last.day())) - 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key_of(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(text: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(text.to_string()))
}

/// Builds a "YYYY-MM-DD HH:MM:SS" timestamp; `time` may omit seconds.
pub fn make_timestamp(date: NaiveDate, time: Option<&str>) -> CalendarResult<String> {
    let time = match time.map(str::trim) {
        None | Some("") => NaiveTime::MIN,
        Some(text) => NaiveTime::parse_from_str(text, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
            .map_err(|_| CalendarError::InvalidDate(text.to_string()))?,
    };
    Ok(NaiveDateTime::new(date, time).format("%Y-%m-%d %H:%M:%S").to_string())
}

fn truncate_title(title: &str) -> String {
    title.chars().take(PREVIEW_TITLE_CHARS).collect()
}

pub fn day_cell(
    date: NaiveDate,
    current: YearMonth,
    today: NaiveDate,
    tasks_by_date: &TasksByDate,
) -> DayCell {
    let tasks = tasks_by_date
        .get(&date_key_of(date))
        .map(Vec::as_slice)
        .unwrap_or_default();

    let preview_lines = tasks
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|task| format!("{} {}", task.glyph(), truncate_title(&task.title)))
        .collect();

    DayCell {
        date,
        is_today: date == today,
        is_current_month: current.contains(date),
        has_tasks: !tasks.is_empty(),
        preview_lines,
        overflow_count: tasks.len().saturating_sub(PREVIEW_LIMIT),
    }
}

pub fn build_month(current: YearMonth, today: NaiveDate, tasks_by_date: &TasksByDate) -> MonthGrid {
    let leading = current.first_day().weekday().num_days_from_monday() as usize;

    let mut slots: Vec<Option<DayCell>> = vec![None; leading];
    slots.extend(
        current
            .days()
            .map(|date| Some(day_cell(date, current, today, tasks_by_date))),
    );
    while slots.len() % 7 != 0 {
        slots.push(None);
    }

    let weeks = slots
        .chunks(7)
        .map(|chunk| -> WeekRow { std::array::from_fn(|i| chunk[i].clone()) })
        .collect();

    MonthGrid {
        year: current.year(),
        month: current.month(),
        weeks,
    }
}

pub fn day_detail(date: NaiveDate, tasks_by_date: &TasksByDate) -> DayDetail {
    let entries = tasks_by_date
        .get(&date_key_of(date))
        .map(|tasks| {
            tasks
                .iter()
                .map(|task| DetailEntry {
                    id: task.id,
                    title: task.title.clone(),
                    time: display_time(&task.timestamp).to_string(),
                    completed: task.is_completed(),
                    glyph: task.glyph(),
                })
                .collect()
        })
        .unwrap_or_default();

    DayDetail { date, entries }
}

/// Left-aligns `text` in `width` terminal columns. Status glyphs are two
/// columns wide, so padding goes by display width rather than chars.
fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

/// Plain-text rendering of a month grid, one line per preview row.
pub fn render_month_text(grid: &MonthGrid) -> String {
    const WIDTH: usize = 16;
    let mut out = String::new();

    let title = YearMonth::new(grid.year, grid.month)
        .map(|ym| ym.to_string())
        .unwrap_or_default();
    out.push_str(&format!("{:^width$}\n", title, width = WIDTH * 7));
    for label in WEEKDAY_LABELS {
        out.push_str(&format!("{:<width$}", label, width = WIDTH));
    }
    out.push('\n');

    for week in &grid.weeks {
        let height = week
            .iter()
            .flatten()
            .map(|cell| cell.preview_lines.len() + usize::from(cell.overflow_count > 0))
            .max()
            .unwrap_or(0);

        for line in 0..=height {
            for slot in week {
                let text = match slot {
                    None => String::new(),
                    Some(cell) if line == 0 => {
                        let marker = if cell.is_today { "*" } else { "" };
                        format!("{}{}", cell.date.day(), marker)
                    }
                    Some(cell) => match cell.preview_lines.get(line - 1) {
                        Some(preview) => preview.clone(),
                        None if line - 1 == cell.preview_lines.len() && cell.overflow_count > 0 => {
                            format!("+{} more", cell.overflow_count)
                        }
                        None => String::new(),
                    },
                };
                out.push_str(&pad_to_width(&text, WIDTH));
            }
            out.truncate(out.trim_end_matches(' ').len());
            out.push('\n');
        }
    }

    out
}
