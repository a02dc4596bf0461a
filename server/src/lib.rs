//! Achievements API: user and achievement management over HTTP, plus
//! aggregate statistics served from the award history.

pub mod app;
pub mod config;
pub mod server;

use achievements_db::Database;

use crate::config::AppConfig;

/// Load `.env` from the working directory or its parent.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load config and open the database.
pub fn init_foundation() -> Result<(Database, AppConfig), anyhow::Error> {
    load_dotenv();

    let config = AppConfig::load()?;
    config.log_summary();

    let db = open_database(&config)?;
    Ok((db, config))
}

/// Create the data directory and open the configured database.
pub fn open_database(config: &AppConfig) -> Result<Database, anyhow::Error> {
    if config.is_in_memory() {
        tracing::warn!("Using in-memory database; data is lost on exit");
        return Ok(Database::open_in_memory()?);
    }

    std::fs::create_dir_all(&config.data_dir)?;
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::info!("Opening database at {}", config.database_path.display());
    Ok(Database::open(&config.database_path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_database_creates_data_dir() {
        let data_dir = std::env::temp_dir()
            .join(format!("achievements-api-test-{}", std::process::id()))
            .join("data");
        let config = AppConfig {
            database_path: data_dir.join("achievements.db"),
            data_dir: data_dir.clone(),
            ..AppConfig::default()
        };

        let db = open_database(&config).unwrap();
        db.create_user("alice", achievements_db::Language::En).unwrap();
        assert!(data_dir.is_dir());
        assert!(config.database_path.is_file());

        drop(db);
        let _ = std::fs::remove_dir_all(data_dir.parent().unwrap());
    }

    #[test]
    fn test_open_database_in_memory() {
        let config = AppConfig {
            database_path: ":memory:".into(),
            ..AppConfig::default()
        };
        let db = open_database(&config).unwrap();
        assert!(db.get_users(0, 10).unwrap().is_empty());
    }
}
