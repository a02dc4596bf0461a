//! Achievement definitions with Russian and English texts.

use rusqlite::{OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::users::Language;
use crate::{Database, DbError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub name_ru: String,
    pub name_en: String,
    pub description_ru: String,
    pub description_en: String,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAchievement {
    pub name_ru: String,
    pub name_en: String,
    pub description_ru: String,
    pub description_en: String,
    pub points: i64,
}

impl Achievement {
    const COLUMNS: &'static str = "id, name_ru, name_en, description_ru, description_en, points";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name_ru: row.get(1)?,
            name_en: row.get(2)?,
            description_ru: row.get(3)?,
            description_en: row.get(4)?,
            points: row.get(5)?,
        })
    }

    /// Name and description in the given language.
    pub fn localized(&self, language: Language) -> (&str, &str) {
        match language {
            Language::Ru => (self.name_ru.as_str(), self.description_ru.as_str()),
            Language::En => (self.name_en.as_str(), self.description_en.as_str()),
        }
    }
}

impl Database {
    /// Create an achievement. Points must be positive.
    pub fn create_achievement(&self, new: &NewAchievement) -> Result<Achievement, DbError> {
        if new.points <= 0 {
            return Err(DbError::InvalidData("Points must be positive".into()));
        }

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO achievements (name_ru, name_en, description_ru, description_en, points)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    new.name_ru,
                    new.name_en,
                    new.description_ru,
                    new.description_en,
                    new.points
                ],
            )?;
            let id = conn.last_insert_rowid();
            tracing::debug!(achievement_id = id, points = new.points, "created achievement");
            Ok(Achievement {
                id,
                name_ru: new.name_ru.clone(),
                name_en: new.name_en.clone(),
                description_ru: new.description_ru.clone(),
                description_en: new.description_en.clone(),
                points: new.points,
            })
        })
    }

    pub fn get_achievement(&self, achievement_id: i64) -> Result<Option<Achievement>, DbError> {
        self.with_conn(|conn| {
            let achievement = conn
                .query_row(
                    &format!("SELECT {} FROM achievements WHERE id = ?1", Achievement::COLUMNS),
                    [achievement_id],
                    Achievement::from_row,
                )
                .optional()?;
            Ok(achievement)
        })
    }

    pub fn get_achievements(&self, skip: u32, limit: u32) -> Result<Vec<Achievement>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM achievements ORDER BY id LIMIT ?1 OFFSET ?2",
                Achievement::COLUMNS
            ))?;
            let rows = stmt.query_map([limit, skip], Achievement::from_row)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }
}
