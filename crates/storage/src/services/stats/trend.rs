use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use uuid::Uuid;

use super::{MINUTES_PER_HOUR, Window, round_dp};
use crate::dto::stats::TrendResponse;
use crate::models::{UserSummary, WindowedRecord};

pub const TREND_LABEL_FORMAT: &str = "%m-%d";

/// Hours trained per day by the user next to the roster's per-user mean.
///
/// Each point is that day's sum alone; the series is not cumulative.
pub fn trend_series(
    user_id: Uuid,
    window: &Window,
    records: &[WindowedRecord],
    roster: &[UserSummary],
) -> TrendResponse {
    let mut yours: HashMap<NaiveDate, i64> = HashMap::new();
    let mut everyone: HashMap<NaiveDate, i64> = HashMap::new();

    let members: HashSet<Uuid> = roster.iter().map(|u| u.user_id).collect();

    for record in records.iter().filter(|r| window.contains(r.date)) {
        let minutes = i64::from(record.duration_min);
        if record.user_id == user_id {
            *yours.entry(record.date).or_insert(0) += minutes;
        }
        if members.contains(&record.user_id) {
            *everyone.entry(record.date).or_insert(0) += minutes;
        }
    }

    let roster_size = roster.len();
    let mut labels = Vec::with_capacity(window.day_count());
    let mut you = Vec::with_capacity(window.day_count());
    let mut average = Vec::with_capacity(window.day_count());

    for day in window.days() {
        labels.push(day.format(TREND_LABEL_FORMAT).to_string());

        let own = yours.get(&day).copied().unwrap_or(0) as f64;
        you.push(round_dp(own / MINUTES_PER_HOUR, 2));

        let mean = if roster_size == 0 {
            0.0
        } else {
            let total = everyone.get(&day).copied().unwrap_or(0) as f64;
            total / MINUTES_PER_HOUR / roster_size as f64
        };
        average.push(round_dp(mean, 2));
    }

    TrendResponse {
        labels,
        you,
        average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::stats::StatsRange;
    use crate::services::stats::fixtures::{days_ago, record, today, user};

    #[test]
    fn test_series_lengths_match_window() {
        for range in [StatsRange::Week, StatsRange::Month] {
            let window = Window::ending(today(), range);
            let trend = trend_series(Uuid::from_u128(1), &window, &[], &[]);
            assert_eq!(trend.labels.len(), window.day_count());
            assert_eq!(trend.you.len(), trend.labels.len());
            assert_eq!(trend.average.len(), trend.labels.len());
        }
    }

    #[test]
    fn test_labels_are_month_day() {
        let window = Window::ending(today(), StatsRange::Week);
        let trend = trend_series(Uuid::from_u128(1), &window, &[], &[]);
        assert_eq!(trend.labels.first().map(String::as_str), Some("05-13"));
        assert_eq!(trend.labels.last().map(String::as_str), Some("05-20"));
    }

    #[test]
    fn test_empty_roster_averages_zero() {
        let window = Window::ending(today(), StatsRange::Week);
        let trend = trend_series(Uuid::from_u128(1), &window, &[], &[]);
        assert!(trend.average.iter().all(|&v| v == 0.0));
        assert!(trend.you.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_daily_points_are_independent() {
        let alice = user(1, "alice");
        let bob = user(2, "bob");
        let carol = user(3, "carol");
        let window = Window::ending(today(), StatsRange::Week);

        let records = vec![
            record(&alice, today(), 30),
            record(&alice, today(), 15),
            record(&alice, days_ago(2), 60),
            record(&bob, today(), 45),
            record(&bob, days_ago(1), 90),
        ];

        let trend = trend_series(
            alice.user_id,
            &window,
            &records,
            &[alice.clone(), bob, carol],
        );

        let last = trend.labels.len() - 1;
        assert_eq!(trend.you[last], 0.75);
        assert_eq!(trend.you[last - 1], 0.0);
        assert_eq!(trend.you[last - 2], 1.0);

        // (45 + 45) minutes over three users
        assert_eq!(trend.average[last], 0.5);
        assert_eq!(trend.average[last - 1], 0.5);
        assert_eq!(trend.average[last - 2], 0.33);
        assert_eq!(trend.average[0], 0.0);
    }

    #[test]
    fn test_records_outside_window_ignored() {
        let alice = user(1, "alice");
        let window = Window::ending(today(), StatsRange::Week);
        let records = vec![record(&alice, days_ago(8), 600)];

        let trend = trend_series(alice.user_id, &window, &records, &[alice.clone()]);
        assert!(trend.you.iter().all(|&v| v == 0.0));
    }
}
