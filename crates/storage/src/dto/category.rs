use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::SportsCategory;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 80, message = "Name must be between 1 and 80 characters"))]
    pub name: String,

    /// Metabolic equivalent; 6.0 and above counts as aerobic
    #[validate(range(min = 0.0, max = 30.0))]
    pub met_value: Option<f64>,
}

impl From<SportsCategory> for CategoryResponse {
    fn from(category: SportsCategory) -> Self {
        Self {
            id: category.category_id,
            name: category.name,
        }
    }
}
