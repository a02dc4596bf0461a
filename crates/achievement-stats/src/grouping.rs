//! Per-user grouping and calendar-day helpers shared by the queries.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::model::{AwardRecord, KnownUser, UserId, UserTotal};

/// Distinct award days of a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDays {
    pub username: String,
    pub days: BTreeSet<NaiveDate>,
}

/// Calendar day of an award. Days are always UTC dates.
pub fn calendar_day(awarded_at: &DateTime<Utc>) -> NaiveDate {
    awarded_at.date_naive()
}

/// Day number minus position in the sorted day sequence.
///
/// Consecutive days share the same offset; any gap bumps it.
pub fn day_offset(day: NaiveDate, index: usize) -> i64 {
    i64::from(day.num_days_from_ce()) - index as i64
}

/// Totals for every user holding at least one award, keyed by user id.
pub fn group_by_user(records: &[AwardRecord]) -> BTreeMap<UserId, UserTotal> {
    let mut totals: BTreeMap<UserId, UserTotal> = BTreeMap::new();
    for record in records {
        totals
            .entry(record.user_id)
            .or_insert_with(|| UserTotal::empty(record.user_id, record.username.as_str()))
            .add(record);
    }
    totals
}

/// Totals for every known user, zero for users without awards.
///
/// Records of users missing from `users` are dropped.
pub fn totals_for_known_users(
    users: &[KnownUser],
    records: &[AwardRecord],
) -> BTreeMap<UserId, UserTotal> {
    let mut totals: BTreeMap<UserId, UserTotal> = users
        .iter()
        .map(|u| (u.user_id, UserTotal::empty(u.user_id, u.username.as_str())))
        .collect();

    for record in records {
        if let Some(total) = totals.get_mut(&record.user_id) {
            total.add(record);
        }
    }
    totals
}

/// Distinct calendar days per user. Several awards on one day count once.
pub fn distinct_days_by_user(records: &[AwardRecord]) -> BTreeMap<UserId, UserDays> {
    let mut by_user: BTreeMap<UserId, UserDays> = BTreeMap::new();
    for record in records {
        by_user
            .entry(record.user_id)
            .or_insert_with(|| UserDays {
                username: record.username.clone(),
                days: BTreeSet::new(),
            })
            .days
            .insert(calendar_day(&record.awarded_at));
    }
    by_user
}
