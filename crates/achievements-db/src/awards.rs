//! Awards: the user-to-achievement relationship, and the statistics snapshot reads.

use achievement_stats::{AwardRecord, AwardSource, KnownUser};
use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension;
use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::users::Language;
use crate::{Database, DbError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAchievement {
    pub id: i64,
    pub user_id: i64,
    pub achievement_id: i64,
    pub awarded_at: DateTime<Utc>,
}

/// An achievement as shown to its holder, in the holder's language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedAchievement {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub points: i64,
    pub awarded_at: DateTime<Utc>,
}

impl Database {
    /// Award an achievement to a user, at `awarded_at` or now.
    ///
    /// Fails with `NotFound` for an unknown user or achievement and with
    /// `Conflict` if the user already holds the achievement.
    pub fn award_achievement(
        &self,
        user_id: i64,
        achievement_id: i64,
        awarded_at: Option<DateTime<Utc>>,
    ) -> Result<UserAchievement, DbError> {
        let awarded_at = awarded_at.unwrap_or_else(Utc::now);

        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let user_exists: bool = tx.query_row(
                "SELECT EXISTS (SELECT 1 FROM users WHERE id = ?1)",
                [user_id],
                |row| row.get(0),
            )?;
            if !user_exists {
                return Err(DbError::NotFound("User not found".into()));
            }

            let achievement_exists: bool = tx.query_row(
                "SELECT EXISTS (SELECT 1 FROM achievements WHERE id = ?1)",
                [achievement_id],
                |row| row.get(0),
            )?;
            if !achievement_exists {
                return Err(DbError::NotFound("Achievement not found".into()));
            }

            let already_awarded: bool = tx.query_row(
                "SELECT EXISTS (SELECT 1 FROM user_achievements WHERE user_id = ?1 AND achievement_id = ?2)",
                [user_id, achievement_id],
                |row| row.get(0),
            )?;
            if already_awarded {
                return Err(DbError::Conflict("User already has this achievement".into()));
            }

            tx.execute(
                "INSERT INTO user_achievements (user_id, achievement_id, awarded_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![user_id, achievement_id, awarded_at],
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;

            tracing::debug!(user_id, achievement_id, "awarded achievement");
            Ok(UserAchievement {
                id,
                user_id,
                achievement_id,
                awarded_at,
            })
        })
    }

    /// A user's achievements localized to the user's language, oldest award first.
    pub fn get_user_achievements(&self, user_id: i64) -> Result<Vec<LocalizedAchievement>, DbError> {
        self.with_conn(|conn| {
            let language: Option<Language> = conn
                .query_row("SELECT language FROM users WHERE id = ?1", [user_id], |row| {
                    row.get(0)
                })
                .optional()?;
            let Some(language) = language else {
                return Err(DbError::NotFound("User not found".into()));
            };

            let mut stmt = conn.prepare(
                "SELECT a.id, a.name_ru, a.name_en, a.description_ru, a.description_en, a.points, ua.awarded_at
                 FROM achievements a
                 INNER JOIN user_achievements ua ON a.id = ua.achievement_id
                 WHERE ua.user_id = ?1
                 ORDER BY ua.awarded_at, ua.id",
            )?;
            let rows = stmt.query_map([user_id], |row| {
                let achievement = Achievement {
                    id: row.get(0)?,
                    name_ru: row.get(1)?,
                    name_en: row.get(2)?,
                    description_ru: row.get(3)?,
                    description_en: row.get(4)?,
                    points: row.get(5)?,
                };
                let (name, description) = achievement.localized(language);
                Ok(LocalizedAchievement {
                    id: achievement.id,
                    name: name.to_string(),
                    description: description.to_string(),
                    points: achievement.points,
                    awarded_at: row.get(6)?,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }
}

impl AwardSource for Database {
    type Error = DbError;

    fn fetch_awards_with_points(&self) -> Result<Vec<AwardRecord>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT ua.user_id, u.username, ua.achievement_id, ua.awarded_at, a.points
                 FROM user_achievements ua
                 INNER JOIN users u ON u.id = ua.user_id
                 INNER JOIN achievements a ON a.id = ua.achievement_id
                 ORDER BY ua.user_id, ua.awarded_at",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(AwardRecord {
                    user_id: row.get(0)?,
                    username: row.get(1)?,
                    achievement_id: row.get(2)?,
                    awarded_at: row.get(3)?,
                    points: row.get(4)?,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }

    fn fetch_all_users(&self) -> Result<Vec<KnownUser>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, username FROM users ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                Ok(KnownUser {
                    user_id: row.get(0)?,
                    username: row.get(1)?,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }
}
