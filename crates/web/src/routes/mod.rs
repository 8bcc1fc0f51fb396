use axum::Router;
use storage::Database;

use crate::features::{account, categories, plans, record, social};
use crate::middleware::auth::ApiKeys;

/// Everything served under `/api`
pub fn api_router(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .nest("/record", record::routes::stats_routes())
        .merge(record::routes::logging_routes())
        .merge(categories::routes::routes(api_keys.clone()))
        .merge(account::routes::routes(api_keys))
        .merge(plans::routes::routes())
        .merge(social::routes::routes())
}

pub fn router(db: Database, api_keys: ApiKeys) -> Router {
    Router::new()
        .nest("/api", api_router(api_keys))
        .with_state(db)
}
