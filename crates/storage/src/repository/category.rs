use sqlx::PgPool;

use crate::dto::category::CreateCategoryRequest;
use crate::error::{Result, StorageError};
use crate::models::SportsCategory;

pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<SportsCategory>> {
        let categories = sqlx::query_as::<_, SportsCategory>(
            "SELECT category_id, name, met_value FROM sports_categories ORDER BY category_id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Exact, case-sensitive name match
    pub async fn find_by_name(&self, name: &str) -> Result<Option<SportsCategory>> {
        let category = sqlx::query_as::<_, SportsCategory>(
            "SELECT category_id, name, met_value FROM sports_categories WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    pub async fn create(&self, request: &CreateCategoryRequest) -> Result<SportsCategory> {
        sqlx::query_as::<_, SportsCategory>(
            r#"
            INSERT INTO sports_categories (name, met_value)
            VALUES ($1, $2)
            RETURNING category_id, name, met_value
            "#,
        )
        .bind(&request.name)
        .bind(request.met_value)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_unique_violation() {
                StorageError::ConstraintViolation(format!(
                    "Category '{}' already exists",
                    request.name
                ))
            } else {
                error
            }
        })
    }
}
