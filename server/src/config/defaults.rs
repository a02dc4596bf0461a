//! All setting definitions with their default values.

/// A single setting definition.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

pub const SERVER_HOST: &str = "SERVER_HOST";
pub const SERVER_PORT: &str = "SERVER_PORT";
pub const DATA_DIR: &str = "ACHIEVEMENTS_DATA_DIR";
pub const DATABASE_PATH: &str = "DATABASE_PATH";
pub const STREAK_MIN_DAYS: &str = "STREAK_MIN_DAYS";
pub const LIST_LIMIT_MAX: &str = "LIST_LIMIT_MAX";

/// Keys whose default is computed at load time have an empty default here.
pub const DEFAULT_SETTINGS: &[SettingDef] = &[
    SettingDef {
        key: SERVER_HOST,
        default: "0.0.0.0",
        description: "Address the HTTP server binds to",
    },
    SettingDef {
        key: SERVER_PORT,
        default: "8000",
        description: "Port the HTTP server listens on",
    },
    SettingDef {
        key: DATA_DIR,
        default: "",
        description: "Data directory (default ~/.achievements-api)",
    },
    SettingDef {
        key: DATABASE_PATH,
        default: "",
        description: "SQLite file path, or :memory: (default <data dir>/achievements.db)",
    },
    SettingDef {
        key: STREAK_MIN_DAYS,
        default: "7",
        description: "Default min_days of /stats/streak-users",
    },
    SettingDef {
        key: LIST_LIMIT_MAX,
        default: "1000",
        description: "Upper bound for the limit query parameter of list endpoints",
    },
];

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS
        .iter()
        .find(|def| def.key == key)
        .map(|def| def.default)
}
