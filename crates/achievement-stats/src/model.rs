//! Award snapshot records and derived statistics results.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

pub type UserId = i64;
pub type AchievementId = i64;

/// One award joined with the awarding user's name and the achievement's points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardRecord {
    pub user_id: UserId,
    pub username: String,
    pub achievement_id: AchievementId,
    pub awarded_at: DateTime<Utc>,
    pub points: i64,
}

/// A user known to storage, whether or not they hold any award.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownUser {
    pub user_id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTotal {
    pub user_id: UserId,
    pub username: String,
    pub award_count: u64,
    pub total_points: i64,
}

impl UserTotal {
    pub fn empty(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            award_count: 0,
            total_points: 0,
        }
    }

    pub(crate) fn add(&mut self, record: &AwardRecord) {
        self.award_count = self.award_count.saturating_add(1);
        self.total_points = self.total_points.saturating_add(record.points);
    }
}

/// Leaderboard head. Users without awards are never ranked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopUser {
    Ranked(UserTotal),
    NoRankedUsers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointsSpread {
    Spread {
        min: UserTotal,
        max: UserTotal,
        difference: i64,
    },
    InsufficientUsers,
}

/// One qualifying run of consecutive award days for a user.
///
/// Serializes to the streak endpoint's item shape, dates as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakEntry {
    pub user_id: UserId,
    pub username: String,
    #[serde(rename = "consecutive_days")]
    pub length: u32,
    #[serde(rename = "streak_start")]
    pub start_date: NaiveDate,
    #[serde(rename = "streak_end")]
    pub end_date: NaiveDate,
}
