//! Setting value validation.

use super::defaults::{LIST_LIMIT_MAX, SERVER_HOST, SERVER_PORT, STREAK_MIN_DAYS};

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        SERVER_HOST => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        SERVER_PORT => validate_int_range(value, 1, 65535)?,
        STREAK_MIN_DAYS => validate_int_range(value, 1, 366)?,
        LIST_LIMIT_MAX => validate_int_range(value, 1, 10000)?,
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
