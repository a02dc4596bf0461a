use super::*;
use chrono::{Duration, TimeZone, Utc};

fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(n)
}

fn award_on(user_id: i64, username: &str, day_index: i64, hour: u32) -> AwardRecord {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, hour, 30, 0).unwrap();
    AwardRecord {
        user_id,
        username: username.to_string(),
        achievement_id: day_index,
        awarded_at: base + Duration::days(day_index),
        points: 1,
    }
}

fn daily_awards(user_id: i64, username: &str, days: impl IntoIterator<Item = i64>) -> Vec<AwardRecord> {
    days.into_iter()
        .map(|d| award_on(user_id, username, d, 10))
        .collect()
}

#[test]
fn split_into_runs_groups_consecutive_days() {
    let days: BTreeSet<NaiveDate> = [0, 1, 2, 5, 6, 9].into_iter().map(day).collect();
    let runs = split_into_runs(&days);

    assert_eq!(
        runs,
        vec![
            StreakRun { length: 3, start_date: day(0), end_date: day(2) },
            StreakRun { length: 2, start_date: day(5), end_date: day(6) },
            StreakRun { length: 1, start_date: day(9), end_date: day(9) },
        ]
    );
}

#[test]
fn split_into_runs_crosses_month_and_year_boundaries() {
    let days: BTreeSet<NaiveDate> = (-3..3).map(day).collect();
    let runs = split_into_runs(&days);
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].length, 6);
    assert_eq!(runs[0].start_date, NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
}

#[test]
fn seven_consecutive_days_make_one_streak() {
    let records = daily_awards(1, "streak_user", 0..7);
    let streaks = consecutive_day_streaks(&records, 7);

    assert_eq!(streaks.len(), 1);
    assert_eq!(streaks[0].user_id, 1);
    assert_eq!(streaks[0].username, "streak_user");
    assert_eq!(streaks[0].length, 7);
}

#[test]
fn six_consecutive_days_are_not_enough() {
    let records = daily_awards(1, "almost", 0..6);
    assert!(consecutive_day_streaks(&records, 7).is_empty());
}

#[test]
fn eight_consecutive_days_make_one_longer_streak() {
    let records = daily_awards(1, "keen", 0..8);
    let streaks = consecutive_day_streaks(&records, 7);
    assert_eq!(streaks.len(), 1);
    assert_eq!(streaks[0].length, 8);
}

#[test]
fn separated_runs_are_reported_separately() {
    let records = daily_awards(1, "twice", (0..7).chain(10..17));
    let streaks = consecutive_day_streaks(&records, 7);

    assert_eq!(streaks.len(), 2);
    assert_eq!(streaks[0].start_date, day(0));
    assert_eq!(streaks[0].end_date, day(6));
    assert_eq!(streaks[1].start_date, day(10));
    assert_eq!(streaks[1].end_date, day(16));
}

#[test]
fn same_day_awards_do_not_extend_streaks() {
    let mut records = daily_awards(1, "busy", 0..6);
    records.push(award_on(1, "busy", 5, 1));
    records.push(award_on(1, "busy", 5, 23));

    assert!(consecutive_day_streaks(&records, 7).is_empty());
    assert_eq!(consecutive_day_streaks(&records, 6)[0].length, 6);
}

#[test]
fn streak_within_ten_day_window_reports_bounds() {
    let records = daily_awards(3, "window", 0..7);
    let streaks = consecutive_day_streaks(&records, 7);

    assert_eq!(streaks.len(), 1);
    assert_eq!(streaks[0].length, 7);
    assert_eq!(streaks[0].start_date, day(0));
    assert_eq!(streaks[0].end_date, day(6));
}

#[test]
fn unsorted_input_is_handled() {
    let mut records = daily_awards(1, "shuffled", 0..7);
    records.reverse();
    records.swap(1, 4);

    let streaks = consecutive_day_streaks(&records, 7);
    assert_eq!(streaks.len(), 1);
    assert_eq!(streaks[0].start_date, day(0));
}

#[test]
fn streaks_sort_by_length_then_user_id() {
    let mut records = daily_awards(5, "five", 0..7);
    records.extend(daily_awards(2, "two", 0..7));
    records.extend(daily_awards(9, "nine", 0..9));

    let streaks = consecutive_day_streaks(&records, 7);
    let order: Vec<(i64, u32)> = streaks.iter().map(|s| (s.user_id, s.length)).collect();
    assert_eq!(order, vec![(9, 9), (2, 7), (5, 7)]);
}

#[test]
fn no_awards_means_no_streaks() {
    assert!(consecutive_day_streaks(&[], DEFAULT_STREAK_MIN_DAYS).is_empty());
}

#[test]
fn zero_threshold_reports_every_run() {
    let records = daily_awards(1, "sparse", [0, 2, 4]);
    assert_eq!(consecutive_day_streaks(&records, 0).len(), 3);
}

#[test]
fn streak_entry_serializes_with_iso_dates() {
    let records = daily_awards(4, "steady", 0..7);
    let streaks = consecutive_day_streaks(&records, 7);

    let value = serde_json::to_value(&streaks[0]).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "user_id": 4,
            "username": "steady",
            "consecutive_days": 7,
            "streak_start": "2025-01-01",
            "streak_end": "2025-01-07",
        })
    );
}
