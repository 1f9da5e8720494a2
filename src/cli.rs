use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the task database (defaults to $SCHEDULR_DB or ~/.schedulr.db)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task on a date
    Add {
        #[arg(value_name = "TITLE")]
        title: String,
        /// Date as YYYY-MM-DD
        #[arg(value_name = "DATE")]
        date: String,
        /// Time as HH:MM or HH:MM:SS
        #[arg(value_name = "TIME")]
        time: Option<String>,
    },
    /// List all tasks
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show every task on a date
    Day {
        #[arg(value_name = "DATE")]
        date: String,
        #[arg(long)]
        json: bool,
    },
    /// Print a month grid (defaults to the current month)
    Month {
        #[arg(value_name = "YEAR", requires = "month")]
        year: Option<i32>,
        #[arg(value_name = "MONTH")]
        month: Option<u32>,
    },
    /// Mark a task completed
    Done {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Mark a task pending again
    Undo {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Delete a task
    Delete {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Fuzzy search task titles
    Search {
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// Replace all tasks with sample data around today
    Seed,
    /// Delete all tasks
    Clear,
    /// Launch TUI interface
    Tui,
    /// Generate shell completions
    Completions {
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["schedulr"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.db.is_none());
    }

    #[test]
    fn add_accepts_optional_time_and_global_db() {
        let cli = Cli::try_parse_from(["schedulr", "add", "Lunch", "2024-06-05", "12:30", "--db", "x.db"])
            .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        match cli.command {
            Some(Commands::Add { title, date, time }) => {
                assert_eq!(title, "Lunch");
                assert_eq!(date, "2024-06-05");
                assert_eq!(time.as_deref(), Some("12:30"));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn month_year_needs_month() {
        assert!(Cli::try_parse_from(["schedulr", "month", "2024"]).is_err());
        assert!(Cli::try_parse_from(["schedulr", "month", "2024", "2"]).is_ok());
        assert!(Cli::try_parse_from(["schedulr", "month"]).is_ok());
    }
}
