//! Consecutive-day award streaks.
//!
//! A user's distinct award days are sorted and bucketed by
//! [`day_offset`]: every day of one maximal run of consecutive days lands
//! in the same bucket, so each bucket is one run.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::grouping::{day_offset, distinct_days_by_user};
use crate::model::{AwardRecord, StreakEntry};

/// Run length the public streak endpoint asks for.
pub const DEFAULT_STREAK_MIN_DAYS: u32 = 7;

/// A maximal run of consecutive calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakRun {
    pub length: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Split sorted distinct days into maximal consecutive runs, oldest first.
pub fn split_into_runs(days: &BTreeSet<NaiveDate>) -> Vec<StreakRun> {
    let mut buckets: BTreeMap<i64, Vec<NaiveDate>> = BTreeMap::new();
    for (index, day) in days.iter().enumerate() {
        buckets.entry(day_offset(*day, index)).or_default().push(*day);
    }

    buckets
        .into_values()
        .filter_map(|run| {
            let start_date = *run.first()?;
            let end_date = *run.last()?;
            Some(StreakRun {
                length: u32::try_from(run.len()).unwrap_or(u32::MAX),
                start_date,
                end_date,
            })
        })
        .collect()
}

/// Runs of at least `min_days` consecutive award days, for every user.
///
/// Sorted by length descending, then user id, then start date. A user
/// with several qualifying runs appears once per run. `min_days` of zero
/// behaves like one.
pub fn consecutive_day_streaks(records: &[AwardRecord], min_days: u32) -> Vec<StreakEntry> {
    let threshold = min_days.max(1);
    let mut entries = Vec::new();

    for (user_id, user_days) in distinct_days_by_user(records) {
        for run in split_into_runs(&user_days.days) {
            if run.length < threshold {
                continue;
            }
            entries.push(StreakEntry {
                user_id,
                username: user_days.username.clone(),
                length: run.length,
                start_date: run.start_date,
                end_date: run.end_date,
            });
        }
    }

    entries.sort_by(|a, b| {
        b.length
            .cmp(&a.length)
            .then(a.user_id.cmp(&b.user_id))
            .then(a.start_date.cmp(&b.start_date))
    });
    entries
}

#[cfg(test)]
#[path = "streaks_tests.rs"]
mod tests;
