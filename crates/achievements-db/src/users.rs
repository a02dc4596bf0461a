//! Users and their display language.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use crate::{Database, DbError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(DbError::InvalidData(format!("unknown language: {other}"))),
        }
    }
}

impl ToSql for Language {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Language {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: DbError| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub language: Language,
}

impl User {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            username: row.get(1)?,
            language: row.get(2)?,
        })
    }
}

impl Database {
    /// Create a user. Usernames are unique.
    pub fn create_user(&self, username: &str, language: Language) -> Result<User, DbError> {
        if username.trim().is_empty() {
            return Err(DbError::InvalidData("Username must not be empty".into()));
        }

        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let taken: bool = tx.query_row(
                "SELECT EXISTS (SELECT 1 FROM users WHERE username = ?1)",
                [username],
                |row| row.get(0),
            )?;
            if taken {
                return Err(DbError::Conflict("Username already exists".into()));
            }

            tx.execute(
                "INSERT INTO users (username, language) VALUES (?1, ?2)",
                rusqlite::params![username, language],
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;

            tracing::debug!(user_id = id, username, "created user");
            Ok(User {
                id,
                username: username.to_string(),
                language,
            })
        })
    }

    pub fn get_user(&self, user_id: i64) -> Result<Option<User>, DbError> {
        self.with_conn(|conn| {
            let user = conn
                .query_row(
                    "SELECT id, username, language FROM users WHERE id = ?1",
                    [user_id],
                    User::from_row,
                )
                .optional()?;
            Ok(user)
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DbError> {
        self.with_conn(|conn| {
            let user = conn
                .query_row(
                    "SELECT id, username, language FROM users WHERE username = ?1",
                    [username],
                    User::from_row,
                )
                .optional()?;
            Ok(user)
        })
    }

    pub fn get_users(&self, skip: u32, limit: u32) -> Result<Vec<User>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, username, language FROM users ORDER BY id LIMIT ?1 OFFSET ?2",
            )?;
            let rows = stmt.query_map([limit, skip], User::from_row)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }
}
