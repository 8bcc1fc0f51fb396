use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// MET threshold at or above which an activity counts as aerobic.
pub const AEROBIC_MET_THRESHOLD: f64 = 6.0;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SportsCategory {
    pub category_id: i32,
    pub name: String,
    pub met_value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Aerobic,
    Anaerobic,
}

impl Intensity {
    /// Classifies a MET coefficient. A category without one is unclassified.
    pub fn from_met(met_value: Option<f64>) -> Option<Self> {
        match met_value {
            Some(met) if met >= AEROBIC_MET_THRESHOLD => Some(Self::Aerobic),
            Some(met) if met < AEROBIC_MET_THRESHOLD => Some(Self::Anaerobic),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_aerobic() {
        assert_eq!(Intensity::from_met(Some(6.0)), Some(Intensity::Aerobic));
        assert_eq!(Intensity::from_met(Some(9.8)), Some(Intensity::Aerobic));
    }

    #[test]
    fn test_below_threshold_is_anaerobic() {
        assert_eq!(Intensity::from_met(Some(5.99)), Some(Intensity::Anaerobic));
        assert_eq!(Intensity::from_met(Some(3.5)), Some(Intensity::Anaerobic));
    }

    #[test]
    fn test_missing_met_is_unclassified() {
        assert_eq!(Intensity::from_met(None), None);
        assert_eq!(Intensity::from_met(Some(f64::NAN)), None);
    }
}
