use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::WorkoutPlan;

pub const PLAN_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const PLAN_TIME_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePlanRequest {
    pub activity: Option<String>,
    /// `YYYY-MM-DDTHH:MM`, seconds optional
    pub start_time: Option<String>,
    /// `YYYY-MM-DDTHH:MM`, seconds optional
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutPlan {
    pub activity: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl CreatePlanRequest {
    pub fn parse(self) -> Result<NewWorkoutPlan, String> {
        let (Some(activity), Some(start), Some(end)) = (
            self.activity.filter(|v| !v.trim().is_empty()),
            self.start_time.filter(|v| !v.is_empty()),
            self.end_time.filter(|v| !v.is_empty()),
        ) else {
            return Err("Missing fields".to_string());
        };

        let start_time = parse_plan_time(&start)?;
        let end_time = parse_plan_time(&end)?;

        if end_time < start_time {
            return Err("end_time must not be before start_time".to_string());
        }

        Ok(NewWorkoutPlan {
            activity,
            start_time,
            end_time,
        })
    }
}

fn parse_plan_time(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, PLAN_TIME_FORMAT_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(&format!("{raw}:00"), PLAN_TIME_FORMAT_SECONDS))
        .map_err(|_| "Invalid time format".to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanResponse {
    pub id: Uuid,
    pub activity: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<WorkoutPlan> for PlanResponse {
    fn from(plan: WorkoutPlan) -> Self {
        Self {
            id: plan.plan_id,
            activity: plan.activity,
            start_time: plan.start_time.format(PLAN_TIME_FORMAT).to_string(),
            end_time: plan.end_time.format(PLAN_TIME_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: &str, end: &str) -> CreatePlanRequest {
        CreatePlanRequest {
            activity: Some("Swimming".to_string()),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
        }
    }

    #[test]
    fn test_minutes_only_format() {
        let plan = request("2025-05-01T07:30", "2025-05-01T08:15").parse().unwrap();
        assert_eq!(plan.start_time.format("%H:%M:%S").to_string(), "07:30:00");
        assert_eq!(plan.end_time.format("%H:%M:%S").to_string(), "08:15:00");
    }

    #[test]
    fn test_seconds_format() {
        let plan = request("2025-05-01T07:30:15", "2025-05-01T08:00:00").parse().unwrap();
        assert_eq!(plan.start_time.format("%S").to_string(), "15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(
            request("tomorrow", "2025-05-01T08:00").parse().unwrap_err(),
            "Invalid time format"
        );
    }

    #[test]
    fn test_missing_fields() {
        let err = CreatePlanRequest {
            activity: Some("Swimming".to_string()),
            ..Default::default()
        }
        .parse()
        .unwrap_err();
        assert_eq!(err, "Missing fields");
    }

    #[test]
    fn test_end_before_start() {
        assert!(request("2025-05-01T09:00", "2025-05-01T08:00").parse().is_err());
    }

    #[test]
    fn test_response_format() {
        let plan = request("2025-05-01T07:30:45", "2025-05-01T08:00").parse().unwrap();
        let response = PlanResponse::from(WorkoutPlan {
            plan_id: Uuid::nil(),
            user_id: Uuid::nil(),
            activity: plan.activity,
            start_time: plan.start_time,
            end_time: plan.end_time,
        });
        assert_eq!(response.start_time, "2025-05-01T07:30");
        assert_eq!(response.end_time, "2025-05-01T08:00");
    }
}
