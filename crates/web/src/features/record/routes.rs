use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    get_aero_anaerobic, get_category_comparison, get_leaderboard, get_metrics, get_trend,
    log_cardio, log_strength,
};

/// Statistics, mounted under `/record`
pub fn stats_routes() -> Router<Database> {
    Router::new()
        .route("/metrics", get(get_metrics))
        .route("/trend", get(get_trend))
        .route("/aeroAnaerobic", get(get_aero_anaerobic))
        .route("/categoryComparison", get(get_category_comparison))
        .route("/leaderboard", get(get_leaderboard))
}

pub fn logging_routes() -> Router<Database> {
    Router::new()
        .route("/log_cardio", post(log_cardio))
        .route("/log_strength", post(log_strength))
}
