use sqlx::PgPool;
use storage::{
    dto::category::CreateCategoryRequest, error::Result, models::SportsCategory,
    repository::category::CategoryRepository,
};

/// List the activity catalog
pub async fn list_categories(pool: &PgPool) -> Result<Vec<SportsCategory>> {
    let repo = CategoryRepository::new(pool);
    repo.list().await
}

/// Add an activity to the catalog
pub async fn create_category(
    pool: &PgPool,
    request: &CreateCategoryRequest,
) -> Result<SportsCategory> {
    let repo = CategoryRepository::new(pool);
    repo.create(request).await
}
