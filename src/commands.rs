use anyhow::{Context, Result};

use crate::calendar::{
    build_month, day_detail, make_timestamp, parse_date, render_month_text, today, YearMonth, NO_TASKS,
};
use crate::database::{Database, TaskStore};
use crate::grouping::group_by_date;
use crate::models::{Task, STATUS_COMPLETED, STATUS_PENDING};

pub fn add_task(db: &mut Database, title: &str, date: &str, time: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;
    let timestamp = make_timestamp(date, time)?;
    db.create_task(title, &timestamp)
        .with_context(|| format!("Failed to add task '{}'", title))?;
    println!("Task '{}' added for {}", title, timestamp);
    Ok(())
}

fn format_task_line(task: &Task) -> String {
    let when = if task.timestamp.is_empty() {
        "(no date)"
    } else {
        task.timestamp.as_str()
    };
    format!("{:>4} | {} {} | {}", task.id, task.glyph(), task.title, when)
}

pub fn list_tasks(db: &Database, json: bool) -> Result<()> {
    let tasks = db.get_all_tasks()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    println!("Tasks:");
    println!("------");
    for task in &tasks {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

pub fn show_day(db: &Database, date: &str, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let by_date = group_by_date(db)?;
    let detail = day_detail(date, &by_date);

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("Tasks for {}", date.format("%A, %B %d, %Y"));
    if detail.entries.is_empty() {
        println!("{}", NO_TASKS);
    }
    for entry in &detail.entries {
        println!("{:>4} | {} {} | Time: {}", entry.id, entry.glyph, entry.title, entry.time);
    }
    Ok(())
}

pub fn show_month(db: &Database, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let today = today();
    let current = match (year, month) {
        (Some(year), Some(month)) => YearMonth::new(year, month)?,
        _ => YearMonth::of(today),
    };

    let by_date = group_by_date(db)?;
    print!("{}", render_month_text(&build_month(current, today, &by_date)));
    Ok(())
}

pub fn set_status(db: &Database, id: i64, completed: bool) -> Result<()> {
    let status = if completed { STATUS_COMPLETED } else { STATUS_PENDING };
    db.update_task_status(id, status)?;
    println!("Task {} marked {}", id, status);
    Ok(())
}

pub fn delete_task(db: &Database, id: i64) -> Result<()> {
    db.delete_task(id)?;
    println!("Task {} deleted", id);
    Ok(())
}

pub fn search_tasks(db: &Database, query: &str) -> Result<()> {
    let found = db.search_tasks(query)?;
    if found.is_empty() {
        println!("No matches found for '{}'", query);
        return Ok(());
    }
    for task in &found {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

pub fn seed(db: &mut Database) -> Result<()> {
    let count = db.seed_sample_tasks(today())?;
    println!("Test data added successfully!");
    println!("Total tasks: {}", count);
    Ok(())
}

pub fn clear(db: &Database) -> Result<()> {
    let removed = db.clear_all_tasks()?;
    println!("Removed {} tasks", removed);
    Ok(())
}
