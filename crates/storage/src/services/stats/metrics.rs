use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use super::{Window, minutes_to_hours, round_dp, totals_by_user};
use crate::dto::stats::MetricsResponse;
use crate::models::{UserSummary, WindowedRecord};

/// Consecutive days with at least one record, counted backwards from `today`.
///
/// `activity_dates` is the user's full history, not only the window, so a
/// streak may run past the window start.
pub fn current_streak(activity_dates: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;

    while activity_dates.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    streak
}

/// Position of `value` among `totals`, scaled to 0..=100.
///
/// Ties take the lowest index of the tied value in ascending order, so equal
/// totals share the lower percentile. A population of one (or none) is 100.
pub fn percentile(totals: &[i64], value: i64) -> u32 {
    let n = totals.len();
    if n <= 1 {
        return 100;
    }

    let mut sorted = totals.to_vec();
    sorted.sort_unstable();

    let index = sorted.partition_point(|&total| total < value);
    ((index * 100) / (n - 1)).min(100) as u32
}

pub fn metrics_summary(
    user_id: Uuid,
    window: &Window,
    activity_dates: &HashSet<NaiveDate>,
    records: &[WindowedRecord],
    roster: &[UserSummary],
) -> MetricsResponse {
    let mut total_calories = 0.0;
    let mut total_minutes = 0i64;

    for record in records
        .iter()
        .filter(|r| r.user_id == user_id && window.contains(r.date))
    {
        total_calories += record.calories_burn.unwrap_or(0.0);
        total_minutes += i64::from(record.duration_min);
    }

    let by_user = totals_by_user(window, records);
    let totals: Vec<i64> = roster
        .iter()
        .map(|user| by_user.get(&user.user_id).map_or(0, |t| t.minutes))
        .collect();

    // Users missing from the roster rank as if they had no activity.
    let your_minutes = roster
        .iter()
        .position(|user| user.user_id == user_id)
        .map(|index| totals[index])
        .unwrap_or(0);

    MetricsResponse {
        current_streak: current_streak(activity_dates, window.today),
        total_calories: round_dp(total_calories, 1),
        total_hours: round_dp(minutes_to_hours(total_minutes), 1),
        percentile: percentile(&totals, your_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::stats::StatsRange;
    use crate::services::stats::fixtures::{days_ago, record, today, user};

    fn dates(offsets: &[i64]) -> HashSet<NaiveDate> {
        offsets.iter().map(|&d| days_ago(d)).collect()
    }

    #[test]
    fn test_streak_zero_without_record_today() {
        assert_eq!(current_streak(&dates(&[1, 2, 3]), today()), 0);
        assert_eq!(current_streak(&HashSet::new(), today()), 0);
    }

    #[test]
    fn test_streak_broken_by_gap() {
        assert_eq!(current_streak(&dates(&[0, 2]), today()), 1);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        assert_eq!(current_streak(&dates(&[0, 1, 2, 3, 5]), today()), 4);
    }

    #[test]
    fn test_streak_runs_past_window() {
        let offsets: Vec<i64> = (0..40).collect();
        assert_eq!(current_streak(&dates(&offsets), today()), 40);
    }

    #[test]
    fn test_percentile_single_user() {
        assert_eq!(percentile(&[120], 120), 100);
        assert_eq!(percentile(&[], 0), 100);
    }

    #[test]
    fn test_percentile_positions() {
        let totals = [0, 60, 120, 240, 480];
        assert_eq!(percentile(&totals, 0), 0);
        assert_eq!(percentile(&totals, 120), 50);
        assert_eq!(percentile(&totals, 480), 100);
    }

    #[test]
    fn test_percentile_ties_take_first_position() {
        let totals = [60, 60, 60, 300];
        assert_eq!(percentile(&totals, 60), 0);
        assert_eq!(percentile(&totals, 300), 100);
    }

    #[test]
    fn test_percentile_floors() {
        assert_eq!(percentile(&[10, 20, 30, 40], 20), 33);
        assert_eq!(percentile(&[10, 20, 30, 40], 30), 66);
    }

    #[test]
    fn test_percentile_monotonic_in_own_total() {
        let others = [30, 90, 90, 200];
        let mut previous = 0;
        for mine in [0, 30, 60, 90, 150, 200, 500] {
            let mut totals = others.to_vec();
            totals.push(mine);
            let current = percentile(&totals, mine);
            assert!(current >= previous, "{mine}: {current} < {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_summary_totals_and_rounding() {
        let alice = user(1, "alice");
        let bob = user(2, "bob");
        let window = Window::ending(today(), StatsRange::Week);

        let mut first = record(&alice, today(), 50);
        first.calories_burn = Some(300.25);
        let mut second = record(&alice, days_ago(3), 40);
        second.calories_burn = None;
        let mut outside = record(&alice, days_ago(9), 600);
        outside.calories_burn = Some(5000.0);
        let records = vec![first, second, outside, record(&bob, today(), 20)];

        let summary = metrics_summary(
            alice.user_id,
            &window,
            &dates(&[0, 1, 3]),
            &records,
            &[alice.clone(), bob],
        );

        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.total_calories, 300.2);
        assert_eq!(summary.total_hours, 1.5);
        assert_eq!(summary.percentile, 100);
    }

    #[test]
    fn test_summary_without_records() {
        let alice = user(1, "alice");
        let bob = user(2, "bob");
        let carol = user(3, "carol");
        let window = Window::ending(today(), StatsRange::Month);
        let records = vec![record(&bob, today(), 30), record(&carol, today(), 30)];

        let summary = metrics_summary(
            alice.user_id,
            &window,
            &HashSet::new(),
            &records,
            &[alice.clone(), bob, carol],
        );

        assert_eq!(
            summary,
            MetricsResponse {
                current_streak: 0,
                total_calories: 0.0,
                total_hours: 0.0,
                percentile: 0,
            }
        );
    }

    #[test]
    fn test_summary_alone_in_roster() {
        let alice = user(1, "alice");
        let window = Window::ending(today(), StatsRange::Week);
        let summary = metrics_summary(
            alice.user_id,
            &window,
            &dates(&[0]),
            &[record(&alice, today(), 30)],
            &[alice.clone()],
        );
        assert_eq!(summary.percentile, 100);
        assert_eq!(summary.total_hours, 0.5);
    }
}
