use super::*;
use chrono::{Duration, TimeZone, Utc};
use std::cell::Cell;

#[derive(Debug, thiserror::Error)]
#[error("connection lost")]
struct ConnectionLost;

#[derive(Default)]
struct MemorySource {
    users: Vec<KnownUser>,
    awards: Vec<AwardRecord>,
    award_reads: Cell<u32>,
    fail: bool,
}

impl AwardSource for MemorySource {
    type Error = ConnectionLost;

    fn fetch_awards_with_points(&self) -> Result<Vec<AwardRecord>, Self::Error> {
        self.award_reads.set(self.award_reads.get() + 1);
        if self.fail {
            return Err(ConnectionLost);
        }
        Ok(self.awards.clone())
    }

    fn fetch_all_users(&self) -> Result<Vec<KnownUser>, Self::Error> {
        if self.fail {
            return Err(ConnectionLost);
        }
        Ok(self.users.clone())
    }
}

fn streak_source() -> MemorySource {
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    let awards = (0..7)
        .map(|i| AwardRecord {
            user_id: 1,
            username: "streak_user".into(),
            achievement_id: i,
            awarded_at: base + Duration::days(i),
            points: 1,
        })
        .collect();
    MemorySource {
        users: vec![
            KnownUser { user_id: 1, username: "streak_user".into() },
            KnownUser { user_id: 2, username: "idle".into() },
        ],
        awards,
        ..Default::default()
    }
}

#[test]
fn queries_read_one_snapshot_each() {
    let engine = StatisticsEngine::new(streak_source());

    let streaks = engine.consecutive_day_streaks(7).unwrap();
    assert_eq!(streaks.len(), 1);
    assert_eq!(engine.source().award_reads.get(), 1);

    engine.top_by_points().unwrap();
    assert_eq!(engine.source().award_reads.get(), 2);
}

#[test]
fn engine_answers_every_query() {
    let engine = StatisticsEngine::new(streak_source());

    let TopUser::Ranked(top) = engine.top_by_achievement_count().unwrap() else {
        panic!("expected a ranked user");
    };
    assert_eq!(top.award_count, 7);

    let PointsSpread::Spread { min, max, difference } = engine.points_spread().unwrap() else {
        panic!("expected a spread");
    };
    assert_eq!(min.username, "idle");
    assert_eq!(max.username, "streak_user");
    assert_eq!(difference, 7);
}

#[test]
fn empty_source_returns_sentinels() {
    let engine = StatisticsEngine::new(MemorySource::default());

    assert_eq!(engine.top_by_achievement_count().unwrap(), TopUser::NoRankedUsers);
    assert_eq!(engine.top_by_points().unwrap(), TopUser::NoRankedUsers);
    assert_eq!(engine.points_spread().unwrap(), PointsSpread::InsufficientUsers);
    assert!(engine.consecutive_day_streaks(7).unwrap().is_empty());
}

#[test]
fn source_failures_propagate() {
    let engine = StatisticsEngine::new(MemorySource {
        fail: true,
        ..Default::default()
    });

    let err = engine.top_by_points().unwrap_err();
    assert!(matches!(err, StatsError::Source(_)));
    assert!(err.to_string().contains("connection lost"));
    assert!(engine.points_spread().is_err());
    assert!(engine.consecutive_day_streaks(7).is_err());
}

#[test]
fn shared_sources_work_through_arc() {
    let engine = StatisticsEngine::new(Arc::new(streak_source()));
    assert_eq!(engine.consecutive_day_streaks(7).unwrap()[0].length, 7);
}
