use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";

pub const COMPLETED_GLYPH: &str = "✅";
pub const PENDING_GLYPH: &str = "⏳";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub timestamp: String,
    pub status: String,
}

impl Task {
    /// Anything other than a case-insensitive "completed" counts as pending.
    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_COMPLETED)
    }

    pub fn glyph(&self) -> &'static str {
        if self.is_completed() {
            COMPLETED_GLYPH
        } else {
            PENDING_GLYPH
        }
    }
}

/// Date key ("YYYY-MM-DD") to the tasks on that date, in datastore order.
pub type TasksByDate = BTreeMap<String, Vec<Task>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_current_month: bool,
    pub has_tasks: bool,
    pub preview_lines: Vec<String>,
    pub overflow_count: usize,
}

pub type WeekRow = [Option<DayCell>; 7];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<WeekRow>,
}

impl MonthGrid {
    /// Non-empty cells in grid order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter().flatten())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailEntry {
    pub id: i64,
    pub title: String,
    pub time: String,
    pub completed: bool,
    pub glyph: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub entries: Vec<DetailEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupMode {
    None,
    DayDetail,
    NewTask,
}
