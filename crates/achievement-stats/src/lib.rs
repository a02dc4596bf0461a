//! Aggregate statistics over user achievement awards.
//!
//! Every query works on a snapshot fetched fresh from an [`AwardSource`]:
//! leaderboards by award count and by points, the min/max points spread,
//! and consecutive-day award streaks.

pub mod engine;
pub mod grouping;
pub mod model;
pub mod ranking;
pub mod streaks;

pub use engine::{AwardSource, StatisticsEngine};
pub use model::{
    AchievementId, AwardRecord, KnownUser, PointsSpread, StreakEntry, TopUser, UserId, UserTotal,
};
pub use streaks::DEFAULT_STREAK_MIN_DAYS;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Statistics error type.
///
/// Empty data is never an error; only a failing award source is.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("award source failed: {0}")]
    Source(#[source] BoxError),
}

impl StatsError {
    pub(crate) fn from_source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(err))
    }
}
