//! Read-side workout statistics.
//!
//! Every function here is pure: callers load the window's records, the roster
//! and the category catalog once per request (see `repository::stats`) and the
//! engine derives all figures from those slices.

mod comparison;
mod leaderboard;
mod metrics;
mod split;
mod trend;
mod window;

pub use comparison::category_comparison;
pub use leaderboard::{LEADERBOARD_SIZE, leaderboard};
pub use metrics::{current_streak, metrics_summary, percentile};
pub use split::aerobic_split;
pub use trend::{TREND_LABEL_FORMAT, trend_series};
pub use window::{Window, local_today};

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

use crate::models::WindowedRecord;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Rounds half to even on the exact binary value, so `0.125` becomes `0.12`.
///
/// Values outside `Decimal`'s range are returned as is.
pub(crate) fn round_dp(value: f64, dp: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(dp))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

pub(crate) fn minutes_to_hours(minutes: i64) -> f64 {
    minutes as f64 / MINUTES_PER_HOUR
}

/// Calories (null counted as 0) and minutes a user logged inside a window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct UserTotals {
    pub calories: f64,
    pub minutes: i64,
}

pub(crate) fn totals_by_user(
    window: &Window,
    records: &[WindowedRecord],
) -> HashMap<Uuid, UserTotals> {
    let mut totals: HashMap<Uuid, UserTotals> = HashMap::new();
    for record in records.iter().filter(|r| window.contains(r.date)) {
        let entry = totals.entry(record.user_id).or_default();
        entry.calories += record.calories_burn.unwrap_or(0.0);
        entry.minutes += i64::from(record.duration_min);
    }
    totals
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use crate::models::{SportsCategory, UserSummary, WindowedRecord};

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    pub fn days_ago(days: i64) -> NaiveDate {
        today() - chrono::Duration::days(days)
    }

    pub fn user(n: u128, username: &str) -> UserSummary {
        UserSummary {
            user_id: Uuid::from_u128(n),
            username: username.to_string(),
        }
    }

    pub fn category(id: i32, name: &str, met_value: Option<f64>) -> SportsCategory {
        SportsCategory {
            category_id: id,
            name: name.to_string(),
            met_value,
        }
    }

    pub fn record(user: &UserSummary, date: NaiveDate, duration_min: i32) -> WindowedRecord {
        WindowedRecord {
            user_id: user.user_id,
            category_id: 1,
            date,
            duration_min,
            difficulty: 1,
            calories_burn: None,
            met_value: Some(9.8),
        }
    }
}
