use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{Achievement, Database, NewAchievement};

fn test_db() -> Database {
    Database::open_in_memory().expect("Failed to create test DB")
}

fn new_achievement(name: &str, points: i64) -> NewAchievement {
    NewAchievement {
        name_ru: format!("{name} (ru)"),
        name_en: name.to_string(),
        description_ru: format!("Описание: {name}"),
        description_en: format!("Description: {name}"),
        points,
    }
}

fn add_achievement(db: &Database, name: &str, points: i64) -> Achievement {
    db.create_achievement(&new_achievement(name, points))
        .expect("Failed to create achievement")
}

fn days_ago(base: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    base - Duration::days(days)
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap()
}
