use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_plan, list_plans};

pub fn routes() -> Router<Database> {
    Router::new().route("/my_plan", get(list_plans).post(create_plan))
}
