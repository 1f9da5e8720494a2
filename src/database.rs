use chrono::{Duration, NaiveDate};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::{debug, info};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::error::{CalendarError, CalendarResult};
use crate::models::{Task, STATUS_COMPLETED, STATUS_PENDING};

const SAMPLE_TASKS: [(&str, i64, &str); 5] = [
    ("Morning Meeting", 0, "09:00:00"),
    ("Lunch Break", 0, "12:30:00"),
    ("Project Review", 1, "14:00:00"),
    ("Team Standup", 2, "10:00:00"),
    ("Client Call", 3, "15:30:00"),
];

/// Read/write access the calendar core needs from a task datastore.
pub trait TaskStore {
    fn get_all_tasks(&self) -> CalendarResult<Vec<Task>>;
    fn create_task(&mut self, title: &str, timestamp: &str) -> CalendarResult<()>;
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(path: &Path) -> CalendarResult<Self> {
        info!("opening task database at {}", path.display());
        let conn = Connection::open(path)?;
        Self::bootstrap(conn)
    }

    pub fn open_in_memory() -> CalendarResult<Self> {
        debug!("opening in-memory task database");
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> CalendarResult<Self> {
        // date_time stays nullable: rows without a timestamp are kept but never grouped
        conn.execute(
            "CREATE TABLE IF NOT EXISTS task (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                date_time TEXT,
                status TEXT NOT NULL DEFAULT 'pending'
            )",
            [],
        )?;

        Ok(Database { conn })
    }

    pub fn update_task_status(&self, id: i64, status: &str) -> CalendarResult<()> {
        let rows_affected = self.conn.execute(
            "UPDATE task SET status = ?1 WHERE id = ?2",
            params![status, id],
        )?;

        if rows_affected == 0 {
            return Err(CalendarError::TaskNotFound(id));
        }
        debug!("task {} status set to {}", id, status);
        Ok(())
    }

    /// Flips a task between completed and pending, returning the new status.
    pub fn toggle_task_status(&self, id: i64) -> CalendarResult<&'static str> {
        let current: String = match self.conn.query_row(
            "SELECT status FROM task WHERE id = ?1",
            [id],
            |row| row.get(0),
        ) {
            Ok(status) => status,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Err(CalendarError::TaskNotFound(id)),
            Err(e) => return Err(e.into()),
        };

        let next = if current.eq_ignore_ascii_case(STATUS_COMPLETED) {
            STATUS_PENDING
        } else {
            STATUS_COMPLETED
        };
        self.update_task_status(id, next)?;
        Ok(next)
    }

    pub fn delete_task(&self, id: i64) -> CalendarResult<()> {
        let rows_affected = self.conn.execute("DELETE FROM task WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(CalendarError::TaskNotFound(id));
        }
        info!("task {} deleted", id);
        Ok(())
    }

    pub fn clear_all_tasks(&self) -> CalendarResult<usize> {
        let removed = self.conn.execute("DELETE FROM task", [])?;
        info!("cleared {} tasks", removed);
        Ok(removed)
    }

    /// Replaces every task with a small set of sample tasks around `today`.
    pub fn seed_sample_tasks(&mut self, today: NaiveDate) -> CalendarResult<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM task", [])?;
        for (title, day_offset, time) in SAMPLE_TASKS {
            let date = today + Duration::days(day_offset);
            let timestamp = format!("{} {}", date.format("%Y-%m-%d"), time);
            tx.execute(
                "INSERT INTO task (title, date_time, status) VALUES (?1, ?2, ?3)",
                params![title, timestamp, STATUS_PENDING],
            )?;
        }
        tx.commit()?;

        info!("seeded {} sample tasks", SAMPLE_TASKS.len());
        Ok(SAMPLE_TASKS.len())
    }

    /// Fuzzy title search, best match first.
    pub fn search_tasks(&self, query: &str) -> CalendarResult<Vec<Task>> {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, Task)> = self
            .get_all_tasks()?
            .into_iter()
            .filter_map(|task| {
                matcher
                    .fuzzy_match(&task.title, query)
                    .map(|score| (score, task))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(scored.into_iter().map(|(_, task)| task).collect())
    }
}

impl TaskStore for Database {
    fn get_all_tasks(&self) -> CalendarResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, date_time, status FROM task ORDER BY id"
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                title: row.get(1)?,
                timestamp: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                status: row.get(3)?,
            })
        })?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }

        Ok(tasks)
    }

    fn create_task(&mut self, title: &str, timestamp: &str) -> CalendarResult<()> {
        self.conn.execute(
            "INSERT INTO task (title, date_time, status) VALUES (?1, ?2, ?3)",
            params![title, timestamp, STATUS_PENDING],
        )?;
        debug!("created task '{}' at {}", title, timestamp);
        Ok(())
    }
}
