use uuid::Uuid;

use super::{Window, minutes_to_hours, round_dp};
use crate::dto::stats::AeroAnaerobicResponse;
use crate::models::{Intensity, WindowedRecord};

/// Splits the user's windowed minutes by the MET class of each record's category.
///
/// Records whose category has no MET value count toward neither bucket.
pub fn aerobic_split(
    user_id: Uuid,
    window: &Window,
    records: &[WindowedRecord],
) -> AeroAnaerobicResponse {
    let mut aerobic = 0i64;
    let mut anaerobic = 0i64;

    for record in records
        .iter()
        .filter(|r| r.user_id == user_id && window.contains(r.date))
    {
        match Intensity::from_met(record.met_value) {
            Some(Intensity::Aerobic) => aerobic += i64::from(record.duration_min),
            Some(Intensity::Anaerobic) => anaerobic += i64::from(record.duration_min),
            None => {}
        }
    }

    AeroAnaerobicResponse {
        aerobic: round_dp(minutes_to_hours(aerobic), 2),
        anaerobic: round_dp(minutes_to_hours(anaerobic), 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::stats::StatsRange;
    use crate::services::stats::fixtures::{days_ago, record, today, user};

    #[test]
    fn test_running_hour_is_aerobic() {
        let alice = user(1, "alice");
        let window = Window::ending(today(), StatsRange::Week);
        let records = vec![record(&alice, today(), 60)];

        let split = aerobic_split(alice.user_id, &window, &records);
        assert_eq!(
            split,
            AeroAnaerobicResponse {
                aerobic: 1.0,
                anaerobic: 0.0,
            }
        );
    }

    #[test]
    fn test_mixed_and_unclassified() {
        let alice = user(1, "alice");
        let bob = user(2, "bob");
        let window = Window::ending(today(), StatsRange::Week);

        let mut yoga = record(&alice, days_ago(1), 50);
        yoga.met_value = Some(2.5);
        let mut unknown = record(&alice, today(), 120);
        unknown.met_value = None;
        let mut threshold = record(&alice, days_ago(2), 10);
        threshold.met_value = Some(6.0);

        let records = vec![yoga, unknown, threshold, record(&bob, today(), 300)];

        let split = aerobic_split(alice.user_id, &window, &records);
        assert_eq!(split.aerobic, 0.17);
        assert_eq!(split.anaerobic, 0.83);
    }

    #[test]
    fn test_no_records() {
        let window = Window::ending(today(), StatsRange::Month);
        let split = aerobic_split(Uuid::from_u128(9), &window, &[]);
        assert_eq!(split.aerobic, 0.0);
        assert_eq!(split.anaerobic, 0.0);
    }
}
