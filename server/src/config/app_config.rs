//! Runtime application configuration loaded from the environment.

use std::path::{Path, PathBuf};

use super::ConfigError;
use super::defaults::{
    DATA_DIR, DATABASE_PATH, LIST_LIMIT_MAX, SERVER_HOST, SERVER_PORT, STREAK_MIN_DAYS,
    get_default,
};
use super::validation::validate_setting;

/// Database path that selects a private in-memory database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
    pub streak_min_days: u32,
    pub list_limit_max: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 8000,
            database_path: data_dir.join("achievements.db"),
            data_dir,
            streak_min_days: achievement_stats::DEFAULT_STREAK_MIN_DAYS,
            list_limit_max: 1000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &'static str| -> Result<String, ConfigError> {
            let value = lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| get_default(key).unwrap_or_default().to_string());
            validate_setting(key, &value)
                .map_err(|message| ConfigError::Invalid { key, message })?;
            Ok(value)
        };

        let data_dir = match g(DATA_DIR)? {
            dir if dir.is_empty() => default_data_dir(),
            dir => PathBuf::from(dir),
        };
        let database_path = match g(DATABASE_PATH)? {
            path if path.is_empty() => data_dir.join("achievements.db"),
            path => PathBuf::from(path),
        };

        Ok(Self {
            server_host: g(SERVER_HOST)?,
            server_port: parse_number(SERVER_PORT, &g(SERVER_PORT)?)?,
            data_dir,
            database_path,
            streak_min_days: parse_number(STREAK_MIN_DAYS, &g(STREAK_MIN_DAYS)?)?,
            list_limit_max: parse_number(LIST_LIMIT_MAX, &g(LIST_LIMIT_MAX)?)?,
        })
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_DATABASE)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Log the effective value of every setting.
    pub fn log_summary(&self) {
        tracing::info!(
            address = %self.bind_address(),
            data_dir = %self.data_dir.display(),
            database = %self.database_path.display(),
            streak_min_days = self.streak_min_days,
            list_limit_max = self.list_limit_max,
            "Settings loaded"
        );
    }
}

/// `~/.achievements-api`, or `./.achievements-api` without a home directory.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".achievements-api")
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        key,
        message: "out of range".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.streak_min_days, 7);
        assert_eq!(config.list_limit_max, 1000);
        assert!(config.database_path.ends_with("achievements.db"));
        assert!(config.database_path.starts_with(&config.data_dir));
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SERVER_PORT", "9100"),
            ("ACHIEVEMENTS_DATA_DIR", "/tmp/ach"),
            ("STREAK_MIN_DAYS", "3"),
        ])
        .unwrap();
        assert_eq!(config.server_port, 9100);
        assert_eq!(config.database_path, PathBuf::from("/tmp/ach/achievements.db"));
        assert_eq!(config.streak_min_days, 3);
        assert_eq!(config.bind_address(), "0.0.0.0:9100");
    }

    #[test]
    fn test_in_memory_database() {
        let config = config_from(&[("DATABASE_PATH", ":memory:")]).unwrap();
        assert!(config.is_in_memory());
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = config_from(&[("SERVER_PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid value for SERVER_PORT"));

        assert!(config_from(&[("STREAK_MIN_DAYS", "0")]).is_err());
    }
}
