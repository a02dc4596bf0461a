//! Leaderboards and the points spread.
//!
//! Ties go to the lowest user id for the leaderboards. The spread orders
//! users by `(total_points, user_id)` ascending and reports both ends.

use std::collections::BTreeMap;

use crate::grouping::{group_by_user, totals_for_known_users};
use crate::model::{AwardRecord, KnownUser, PointsSpread, TopUser, UserId, UserTotal};

/// User holding the most awards.
pub fn top_by_achievement_count(records: &[AwardRecord]) -> TopUser {
    pick_top(group_by_user(records), |total| {
        i64::try_from(total.award_count).unwrap_or(i64::MAX)
    })
}

/// User with the highest summed points.
pub fn top_by_points(records: &[AwardRecord]) -> TopUser {
    pick_top(group_by_user(records), |total| total.total_points)
}

/// Lowest and highest point totals over all known users.
pub fn points_spread(users: &[KnownUser], records: &[AwardRecord]) -> PointsSpread {
    let mut totals: Vec<UserTotal> = totals_for_known_users(users, records)
        .into_values()
        .collect();
    totals.sort_by(|a, b| {
        a.total_points
            .cmp(&b.total_points)
            .then(a.user_id.cmp(&b.user_id))
    });

    let [min, .., max] = totals.as_slice() else {
        return PointsSpread::InsufficientUsers;
    };

    PointsSpread::Spread {
        difference: max.total_points.saturating_sub(min.total_points),
        min: min.clone(),
        max: max.clone(),
    }
}

fn pick_top<F>(totals: BTreeMap<UserId, UserTotal>, metric: F) -> TopUser
where
    F: Fn(&UserTotal) -> i64,
{
    // Iteration is ascending by user id; only a strictly greater metric replaces.
    let mut best: Option<UserTotal> = None;
    for total in totals.into_values() {
        match &best {
            Some(current) if metric(current) >= metric(&total) => {}
            _ => best = Some(total),
        }
    }
    best.map_or(TopUser::NoRankedUsers, TopUser::Ranked)
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod tests;
