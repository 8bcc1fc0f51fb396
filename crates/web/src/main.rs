use std::time::Duration;

use anyhow::Context;
use storage::Database;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod routes;

use config::Config;
use features::{account, categories, plans, record, social};
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        record::handlers::get_metrics,
        record::handlers::get_trend,
        record::handlers::get_aero_anaerobic,
        record::handlers::get_category_comparison,
        record::handlers::get_leaderboard,
        record::handlers::log_cardio,
        record::handlers::log_strength,
        categories::handlers::list_categories,
        categories::handlers::create_category,
        account::handlers::get_account_info,
        account::handlers::edit_account,
        account::handlers::create_user,
        plans::handlers::list_plans,
        plans::handlers::create_plan,
        social::handlers::list_posts,
        social::handlers::list_bookmarked,
        social::handlers::create_post,
        social::handlers::add_comment,
        social::handlers::toggle_like,
        social::handlers::toggle_bookmark,
    ),
    components(
        schemas(
            storage::dto::stats::MetricsResponse,
            storage::dto::stats::TrendResponse,
            storage::dto::stats::AeroAnaerobicResponse,
            storage::dto::stats::CategoryComparisonResponse,
            storage::dto::stats::LeaderboardEntry,
            storage::dto::record::LogWorkoutForm,
            storage::dto::record::SuccessResponse,
            storage::dto::category::CategoryResponse,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UserResponse,
            storage::dto::user::AccountInfoResponse,
            storage::dto::user::UpdateAccountRequest,
            storage::dto::plan::CreatePlanRequest,
            storage::dto::plan::PlanResponse,
            storage::dto::social::CreatePostRequest,
            storage::dto::social::CreateCommentRequest,
            storage::dto::social::PostResponse,
            storage::dto::social::CommentInfo,
            storage::dto::social::ToggleResponse,
        )
    ),
    tags(
        (name = "record", description = "Workout logging and statistics"),
        (name = "categories", description = "Activity catalog"),
        (name = "account", description = "Profile of the acting user"),
        (name = "plans", description = "Scheduled workouts"),
        (name = "social", description = "Posts, comments, likes and bookmarks"),
        (name = "admin", description = "Roster and catalog management, API key required"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting workout statistics API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::with_max_connections(&config.database_url, config.max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database connection established"
    );

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API keys configured, admin routes will reject every request");
    } else {
        tracing::info!(count = api_keys.len(), "API keys loaded");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = routes::router(db, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
