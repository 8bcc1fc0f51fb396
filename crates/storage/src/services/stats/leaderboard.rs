use super::{Window, minutes_to_hours, round_dp, totals_by_user};
use crate::dto::stats::LeaderboardEntry;
use crate::models::{UserSummary, WindowedRecord};

pub const LEADERBOARD_SIZE: usize = 10;

/// Top users by calories burned inside the window.
///
/// The sort is stable with no secondary key, so users with equal calories keep
/// their roster order.
pub fn leaderboard(
    window: &Window,
    records: &[WindowedRecord],
    roster: &[UserSummary],
) -> Vec<LeaderboardEntry> {
    let by_user = totals_by_user(window, records);

    let mut standings: Vec<(&UserSummary, f64, i64)> = roster
        .iter()
        .map(|user| {
            let totals = by_user.get(&user.user_id).copied().unwrap_or_default();
            (user, totals.calories, totals.minutes)
        })
        .collect();

    standings.sort_by(|a, b| b.1.total_cmp(&a.1));

    standings
        .into_iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(index, (user, calories, minutes))| LeaderboardEntry {
            rank: index as u32 + 1,
            username: user.username.clone(),
            total_calories: round_dp(calories, 1),
            total_hours: round_dp(minutes_to_hours(minutes), 2),
        })
        .collect()
}
