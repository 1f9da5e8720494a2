use thiserror::Error;

pub type CalendarResult<T> = Result<T, CalendarError>;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("datastore error: {0}")]
    Datastore(#[from] rusqlite::Error),
    #[error("invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid date or time '{0}'")]
    InvalidDate(String),
    #[error("task {0} not found")]
    TaskNotFound(i64),
}
