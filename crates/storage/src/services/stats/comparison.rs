use std::collections::HashMap;

use uuid::Uuid;

use super::{Window, round_dp};
use crate::dto::stats::CategoryComparisonResponse;
use crate::models::{SportsCategory, WindowedRecord};

#[derive(Debug, Default, Clone, Copy)]
struct DifficultySum {
    total: i64,
    count: i64,
}

impl DifficultySum {
    fn add(&mut self, difficulty: i32) {
        self.total += i64::from(difficulty);
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total as f64 / self.count as f64
        }
    }
}

/// Mean difficulty per catalog category, for the user and for everyone.
///
/// Every category appears in catalog order; a category without records
/// reports 0 rather than being skipped.
pub fn category_comparison(
    user_id: Uuid,
    window: &Window,
    records: &[WindowedRecord],
    catalog: &[SportsCategory],
) -> CategoryComparisonResponse {
    let mut yours: HashMap<i32, DifficultySum> = HashMap::new();
    let mut everyone: HashMap<i32, DifficultySum> = HashMap::new();

    for record in records.iter().filter(|r| window.contains(r.date)) {
        everyone
            .entry(record.category_id)
            .or_default()
            .add(record.difficulty);
        if record.user_id == user_id {
            yours
                .entry(record.category_id)
                .or_default()
                .add(record.difficulty);
        }
    }

    let mean_for = |sums: &HashMap<i32, DifficultySum>, category_id: i32| {
        round_dp(
            sums.get(&category_id).map_or(0.0, DifficultySum::mean),
            2,
        )
    };

    CategoryComparisonResponse {
        categories: catalog.iter().map(|c| c.name.clone()).collect(),
        you: catalog
            .iter()
            .map(|c| mean_for(&yours, c.category_id))
            .collect(),
        average: catalog
            .iter()
            .map(|c| mean_for(&everyone, c.category_id))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::stats::StatsRange;
    use crate::models::UserSummary;
    use crate::services::stats::fixtures::{category, days_ago, record, today, user};

    fn catalog() -> Vec<SportsCategory> {
        vec![
            category(1, "Running", Some(9.8)),
            category(2, "Weightlifting", Some(3.5)),
            category(3, "Yoga", Some(2.5)),
        ]
    }

    #[test]
    fn test_every_category_listed() {
        let window = Window::ending(today(), StatsRange::Week);
        let comparison = category_comparison(Uuid::from_u128(1), &window, &[], &catalog());

        assert_eq!(comparison.categories, vec!["Running", "Weightlifting", "Yoga"]);
        assert_eq!(comparison.you, vec![0.0, 0.0, 0.0]);
        assert_eq!(comparison.average, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_user_and_global_means() {
        let alice = user(1, "alice");
        let bob = user(2, "bob");
        let window = Window::ending(today(), StatsRange::Week);

        let lift = |u: &UserSummary, difficulty: i32, days: i64| {
            let mut r = record(u, days_ago(days), 30);
            r.category_id = 2;
            r.difficulty = difficulty;
            r
        };

        let records = vec![
            lift(&alice, 4, 0),
            lift(&alice, 5, 1),
            lift(&bob, 2, 0),
            lift(&bob, 1, 30),
            record(&bob, today(), 20),
        ];

        let comparison = category_comparison(alice.user_id, &window, &records, &catalog());

        assert_eq!(comparison.you, vec![0.0, 4.5, 0.0]);
        assert_eq!(comparison.average, vec![1.0, 3.67, 0.0]);
    }
}
