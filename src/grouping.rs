use log::{debug, trace};

use crate::database::TaskStore;
use crate::error::CalendarResult;
use crate::models::{Task, TasksByDate};

pub const NO_TIME: &str = "No time";

/// Date portion of a timestamp: everything before the first space, or the
/// whole string when there is no space. `None` for an empty timestamp.
pub fn date_key(timestamp: &str) -> Option<&str> {
    if timestamp.is_empty() {
        return None;
    }
    Some(timestamp.split_once(' ').map_or(timestamp, |(date, _)| date))
}

/// Time portion of a timestamp, or "No time" when it has none.
pub fn display_time(timestamp: &str) -> &str {
    timestamp.split_once(' ').map_or(NO_TIME, |(_, time)| time)
}

pub fn group_tasks(tasks: Vec<Task>) -> TasksByDate {
    let mut by_date = TasksByDate::new();
    for task in tasks {
        let key = match date_key(&task.timestamp) {
            Some(key) => key.to_string(),
            None => {
                trace!("task {} has no timestamp, skipping", task.id);
                continue;
            }
        };
        by_date.entry(key).or_default().push(task);
    }
    by_date
}

/// Re-reads every task from `store` and buckets them by date.
pub fn group_by_date<S: TaskStore + ?Sized>(store: &S) -> CalendarResult<TasksByDate> {
    let tasks = store.get_all_tasks()?;
    let total = tasks.len();
    let by_date = group_tasks(tasks);
    debug!("grouped {} tasks into {} dates", total, by_date.len());
    Ok(by_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarError;
    use pretty_assertions::assert_eq;

    struct MemoryStore {
        tasks: Vec<Task>,
    }

    impl MemoryStore {
        fn new(rows: &[(&str, &str, &str)]) -> Self {
            let tasks = rows
                .iter()
                .enumerate()
                .map(|(i, (title, timestamp, status))| Task {
                    id: i as i64 + 1,
                    title: title.to_string(),
                    timestamp: timestamp.to_string(),
                    status: status.to_string(),
                })
                .collect();
            MemoryStore { tasks }
        }
    }

    impl TaskStore for MemoryStore {
        fn get_all_tasks(&self) -> CalendarResult<Vec<Task>> {
            Ok(self.tasks.clone())
        }

        fn create_task(&mut self, title: &str, timestamp: &str) -> CalendarResult<()> {
            let id = self.tasks.len() as i64 + 1;
            self.tasks.push(Task {
                id,
                title: title.to_string(),
                timestamp: timestamp.to_string(),
                status: "pending".to_string(),
            });
            Ok(())
        }
    }

    struct BrokenStore;

    impl TaskStore for BrokenStore {
        fn get_all_tasks(&self) -> CalendarResult<Vec<Task>> {
            Err(CalendarError::Datastore(rusqlite::Error::InvalidQuery))
        }

        fn create_task(&mut self, _title: &str, _timestamp: &str) -> CalendarResult<()> {
            Err(CalendarError::Datastore(rusqlite::Error::InvalidQuery))
        }
    }

    #[test]
    fn date_key_takes_text_before_first_space() {
        assert_eq!(date_key("2024-06-05 09:00:00"), Some("2024-06-05"));
        assert_eq!(date_key("2024-06-05"), Some("2024-06-05"));
        assert_eq!(date_key("2024-06-05 09:00 extra"), Some("2024-06-05"));
        assert_eq!(date_key(""), None);
    }

    #[test]
    fn display_time_falls_back_when_absent() {
        assert_eq!(display_time("2024-06-05 09:00:00"), "09:00:00");
        assert_eq!(display_time("2024-06-05"), NO_TIME);
        assert_eq!(display_time(""), NO_TIME);
    }

    #[test]
    fn same_day_tasks_keep_datastore_order() {
        let store = MemoryStore::new(&[
            ("Meeting", "2024-06-05 09:00:00", "pending"),
            ("Lunch", "2024-06-05 12:30:00", "completed"),
        ]);

        let by_date = group_by_date(&store).unwrap();
        let titles: Vec<&str> = by_date["2024-06-05"].iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Meeting", "Lunch"]);
    }

    #[test]
    fn each_task_lands_in_exactly_one_bucket() {
        let store = MemoryStore::new(&[
            ("A", "2024-06-05 09:00:00", "pending"),
            ("B", "2024-06-06 10:00:00", "pending"),
            ("C", "2024-06-05 23:59:59", "pending"),
            ("D", "2024-07-01 00:00:00", "completed"),
        ]);

        let by_date = group_by_date(&store).unwrap();
        assert_eq!(by_date.len(), 3);
        for task in &store.tasks {
            let key = date_key(&task.timestamp).unwrap();
            let hits = by_date.values().flatten().filter(|t| t.id == task.id).count();
            assert_eq!(hits, 1);
            assert!(by_date[key].iter().any(|t| t.id == task.id));
        }
    }

    #[test]
    fn empty_timestamps_are_dropped() {
        let store = MemoryStore::new(&[
            ("Someday", "", "pending"),
            ("Meeting", "2024-06-05 09:00:00", "pending"),
        ]);

        let by_date = group_by_date(&store).unwrap();
        assert_eq!(by_date.values().flatten().count(), 1);
        assert!(by_date.values().flatten().all(|t| t.title != "Someday"));
    }

    #[test]
    fn created_tasks_show_up_on_next_grouping() {
        let mut store = MemoryStore::new(&[]);
        assert!(group_by_date(&store).unwrap().is_empty());

        store.create_task("Review", "2024-06-07 14:00:00").unwrap();
        let by_date = group_by_date(&store).unwrap();
        assert_eq!(by_date["2024-06-07"].len(), 1);
    }

    #[test]
    fn datastore_errors_propagate() {
        let err = group_by_date(&BrokenStore).unwrap_err();
        assert!(matches!(err, CalendarError::Datastore(_)));
    }
}
