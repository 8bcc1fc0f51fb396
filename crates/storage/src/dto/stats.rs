use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Length of the statistics window. Any token other than `month` means `week`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatsRange {
    #[default]
    Week,
    Month,
}

impl StatsRange {
    pub fn from_token(token: &str) -> Self {
        match token {
            "month" => Self::Month,
            _ => Self::Week,
        }
    }

    /// Days between the window start and today.
    pub fn lookback_days(&self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RangeQuery {
    /// `week` (default) or `month`
    pub range: Option<String>,
}

impl RangeQuery {
    pub fn resolve(&self) -> StatsRange {
        self.range
            .as_deref()
            .map(StatsRange::from_token)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricsResponse {
    pub current_streak: u32,
    pub total_calories: f64,
    pub total_hours: f64,
    pub percentile: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendResponse {
    /// One `MM-DD` label per day of the window, oldest first
    pub labels: Vec<String>,
    pub you: Vec<f64>,
    pub average: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AeroAnaerobicResponse {
    pub aerobic: f64,
    pub anaerobic: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryComparisonResponse {
    pub categories: Vec<String>,
    pub you: Vec<f64>,
    pub average: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub total_calories: f64,
    pub total_hours: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_token() {
        assert_eq!(StatsRange::from_token("month"), StatsRange::Month);
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_week() {
        for token in ["week", "", "year", "Month", "MONTH", " month"] {
            assert_eq!(StatsRange::from_token(token), StatsRange::Week, "{token:?}");
        }
    }

    #[test]
    fn test_missing_query_is_week() {
        assert_eq!(RangeQuery::default().resolve(), StatsRange::Week);
        let query = RangeQuery {
            range: Some("month".to_string()),
        };
        assert_eq!(query.resolve(), StatsRange::Month);
    }
}
