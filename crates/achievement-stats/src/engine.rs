//! Query façade over an award source.

use std::sync::Arc;

use crate::model::{AwardRecord, KnownUser, PointsSpread, StreakEntry, TopUser};
use crate::{StatsError, ranking, streaks};

/// Read interface the statistics need from storage.
///
/// Each method is one bulk read; the engine never fetches per user.
pub trait AwardSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every award joined with its achievement's points and the user's name.
    fn fetch_awards_with_points(&self) -> Result<Vec<AwardRecord>, Self::Error>;

    /// Every user, with or without awards.
    fn fetch_all_users(&self) -> Result<Vec<KnownUser>, Self::Error>;
}

impl<S: AwardSource + ?Sized> AwardSource for Arc<S> {
    type Error = S::Error;

    fn fetch_awards_with_points(&self) -> Result<Vec<AwardRecord>, Self::Error> {
        (**self).fetch_awards_with_points()
    }

    fn fetch_all_users(&self) -> Result<Vec<KnownUser>, Self::Error> {
        (**self).fetch_all_users()
    }
}

/// Stateless statistics over fresh snapshots; safe to clone and share.
#[derive(Debug, Clone)]
pub struct StatisticsEngine<S> {
    source: S,
}

impl<S: AwardSource> StatisticsEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn top_by_achievement_count(&self) -> Result<TopUser, StatsError> {
        let records = self.award_snapshot()?;
        let top = ranking::top_by_achievement_count(&records);
        tracing::debug!(
            awards = records.len(),
            ranked = matches!(top, TopUser::Ranked(_)),
            "top by achievement count"
        );
        Ok(top)
    }

    pub fn top_by_points(&self) -> Result<TopUser, StatsError> {
        let records = self.award_snapshot()?;
        let top = ranking::top_by_points(&records);
        tracing::debug!(
            awards = records.len(),
            ranked = matches!(top, TopUser::Ranked(_)),
            "top by points"
        );
        Ok(top)
    }

    pub fn points_spread(&self) -> Result<PointsSpread, StatsError> {
        let users = self.source.fetch_all_users().map_err(StatsError::from_source)?;
        let records = self.award_snapshot()?;
        let spread = ranking::points_spread(&users, &records);
        tracing::debug!(users = users.len(), awards = records.len(), "points spread");
        Ok(spread)
    }

    pub fn consecutive_day_streaks(&self, min_days: u32) -> Result<Vec<StreakEntry>, StatsError> {
        let records = self.award_snapshot()?;
        let entries = streaks::consecutive_day_streaks(&records, min_days);
        tracing::debug!(min_days, streaks = entries.len(), "consecutive day streaks");
        Ok(entries)
    }

    fn award_snapshot(&self) -> Result<Vec<AwardRecord>, StatsError> {
        self.source
            .fetch_awards_with_points()
            .map_err(StatsError::from_source)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
