use chrono::{Duration, Local, NaiveDate};

use crate::dto::stats::StatsRange;

/// The server's current calendar day.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Inclusive date range `[start, today]` shared by every statistic of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub today: NaiveDate,
}

impl Window {
    pub fn ending(today: NaiveDate, range: StatsRange) -> Self {
        Self {
            start: today - Duration::days(range.lookback_days()),
            today,
        }
    }

    /// Resolves the window against the local calendar day. Call once per request.
    pub fn current(range: StatsRange) -> Self {
        Self::ending(local_today(), range)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.today
    }

    /// Number of calendar days in the window, both ends included.
    pub fn day_count(&self) -> usize {
        ((self.today - self.start).num_days() + 1).max(0) as usize
    }

    /// Days from `start` to `today`, oldest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.day_count() as i64).map(move |offset| start + Duration::days(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stats::fixtures::{days_ago, today};

    #[test]
    fn test_week_window() {
        let window = Window::ending(today(), StatsRange::Week);
        assert_eq!(window.start, days_ago(7));
        assert_eq!(window.day_count(), 8);
    }

    #[test]
    fn test_month_window() {
        let window = Window::ending(today(), StatsRange::Month);
        assert_eq!(window.start, days_ago(30));
        assert_eq!(window.day_count(), 31);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let window = Window::ending(today(), StatsRange::Week);
        assert!(window.contains(days_ago(7)));
        assert!(window.contains(today()));
        assert!(!window.contains(days_ago(8)));
        assert!(!window.contains(today() + Duration::days(1)));
    }

    #[test]
    fn test_days_are_chronological() {
        let window = Window::ending(today(), StatsRange::Week);
        let days: Vec<_> = window.days().collect();
        assert_eq!(days.len(), window.day_count());
        assert_eq!(days.first(), Some(&days_ago(7)));
        assert_eq!(days.last(), Some(&today()));
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
