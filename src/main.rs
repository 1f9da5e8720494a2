use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use schedulr::cli::{Cli, Commands};
use schedulr::commands;
use schedulr::config::resolve_db_path;
use schedulr::database::Database;
use schedulr::ui::run_tui;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        use clap_complete::{generate, Shell};
        let shell = shell.to_lowercase();
        let shell_enum = match shell.as_str() {
            "bash" => Shell::Bash,
            "zsh" => Shell::Zsh,
            "fish" => Shell::Fish,
            "elvish" => Shell::Elvish,
            "powershell" => Shell::PowerShell,
            _ => {
                println!("Unsupported shell: {}", shell);
                return Ok(());
            }
        };
        let mut cmd = Cli::command();
        generate(shell_enum, &mut cmd, "schedulr", &mut std::io::stdout());
        return Ok(());
    }

    let db_path = resolve_db_path(cli.db);
    let mut db = Database::new(&db_path)
        .with_context(|| format!("Failed to open task database at {}", db_path.display()))?;

    match cli.command {
        Some(Commands::Add { title, date, time }) => {
            commands::add_task(&mut db, &title, &date, time.as_deref())?;
        }
        Some(Commands::List { json }) => {
            commands::list_tasks(&db, json)?;
        }
        Some(Commands::Day { date, json }) => {
            commands::show_day(&db, &date, json)?;
        }
        Some(Commands::Month { year, month }) => {
            commands::show_month(&db, year, month)?;
        }
        Some(Commands::Done { id }) => {
            commands::set_status(&db, id, true)?;
        }
        Some(Commands::Undo { id }) => {
            commands::set_status(&db, id, false)?;
        }
        Some(Commands::Delete { id }) => {
            commands::delete_task(&db, id)?;
        }
        Some(Commands::Search { query }) => {
            commands::search_tasks(&db, &query)?;
        }
        Some(Commands::Seed) => {
            commands::seed(&mut db)?;
        }
        Some(Commands::Clear) => {
            commands::clear(&db)?;
        }
        Some(Commands::Completions { .. }) => {}
        Some(Commands::Tui) | None => {
            // Default behavior: launch TUI
            run_tui(db)?;
        }
    }

    Ok(())
}
