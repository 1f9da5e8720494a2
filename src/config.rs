use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "SCHEDULR_DB";
pub const DB_FILE_NAME: &str = ".schedulr.db";

/// Picks the database file: explicit flag, then `SCHEDULR_DB`, then `~/.schedulr.db`.
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    resolve_with(flag, std::env::var(DB_PATH_ENV).ok(), std::env::var("HOME").ok())
}

fn resolve_with(flag: Option<PathBuf>, env_path: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(path) = env_path.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    let home_dir = home.unwrap_or_else(|| ".".to_string());
    PathBuf::from(home_dir).join(DB_FILE_NAME)
}
