mod post;
mod sports_category;
mod user;
mod workout_plan;
mod workout_record;

pub use post::{Comment, Post};
pub use sports_category::{AEROBIC_MET_THRESHOLD, Intensity, SportsCategory};
pub use user::{User, UserSummary};
pub use workout_plan::WorkoutPlan;
pub use workout_record::{NewWorkoutRecord, WindowedRecord, WorkoutRecord};
