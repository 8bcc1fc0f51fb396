use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{NewWorkoutRecord, SportsCategory};

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    /// Difficulty is always 1
    Cardio,
    /// Difficulty is taken from the form, 1 when absent
    Strength,
}

/// Form-encoded body of `log_cardio` and `log_strength`.
///
/// Every field arrives as text so that malformed numbers are reported as
/// a 400 with a readable message instead of a generic deserialization error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LogWorkoutForm {
    pub activity: Option<String>,
    pub duration: Option<String>,
    pub calories: Option<String>,
    pub difficulty: Option<String>,
}

/// A logging request that passed parsing. The category name is still unresolved.
#[derive(Debug, Clone, PartialEq)]
pub struct LogWorkoutCommand {
    pub activity: String,
    pub duration_min: i32,
    pub difficulty: i32,
    pub calories_burn: f64,
}

impl LogWorkoutCommand {
    /// Binds the command to the category its activity name resolved to.
    ///
    /// `None` means the name is not in the catalog; nothing may be stored then.
    pub fn into_record(
        self,
        user_id: Uuid,
        category: Option<&SportsCategory>,
        date: NaiveDate,
    ) -> Result<NewWorkoutRecord, StorageError> {
        let category = category
            .ok_or_else(|| StorageError::InvalidInput("Invalid activity type".to_string()))?;

        Ok(NewWorkoutRecord {
            user_id,
            category_id: category.category_id,
            date,
            duration_min: self.duration_min,
            difficulty: self.difficulty,
            calories_burn: Some(self.calories_burn),
        })
    }
}

impl LogWorkoutForm {
    pub fn parse(self, kind: WorkoutKind) -> Result<LogWorkoutCommand, String> {
        let (Some(activity), Some(duration), Some(calories)) = (
            non_empty(self.activity),
            non_empty(self.duration),
            non_empty(self.calories),
        ) else {
            return Err("Missing required fields".to_string());
        };

        let duration_min = parse_duration(&duration)?;
        let calories_burn = parse_non_negative("calories", &calories)?;

        let difficulty = match kind {
            WorkoutKind::Cardio => MIN_DIFFICULTY,
            WorkoutKind::Strength => match non_empty(self.difficulty) {
                Some(raw) => parse_difficulty(&raw)?,
                None => MIN_DIFFICULTY,
            },
        };

        Ok(LogWorkoutCommand {
            activity,
            duration_min,
            difficulty,
            calories_burn,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_non_negative(field: &str, raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{field} must be a number"))?;

    if !value.is_finite() {
        return Err(format!("{field} must be a number"));
    }
    if value < 0.0 {
        return Err(format!("{field} must not be negative"));
    }

    Ok(value)
}

/// Minutes may be sent with a fractional part; they are truncated to whole minutes.
fn parse_duration(raw: &str) -> Result<i32, String> {
    let minutes = parse_non_negative("duration", raw)?.trunc();

    if minutes > f64::from(i32::MAX) {
        return Err("duration is too large".to_string());
    }

    Ok(minutes as i32)
}

fn parse_difficulty(raw: &str) -> Result<i32, String> {
    let difficulty: i32 = raw
        .trim()
        .parse()
        .map_err(|_| "difficulty must be an integer".to_string())?;

    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(format!(
            "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}"
        ));
    }

    Ok(difficulty)
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
