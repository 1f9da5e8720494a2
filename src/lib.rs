pub mod calendar;
pub mod cli;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod grouping;
pub mod models;
pub mod ui;

pub use calendar::{build_month, day_cell, day_detail, YearMonth};
pub use database::{Database, TaskStore};
pub use error::{CalendarError, CalendarResult};
pub use grouping::group_by_date;
pub use models::{DayCell, DayDetail, MonthGrid, Task, TasksByDate, WeekRow};
