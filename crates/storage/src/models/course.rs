use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub course_id: Uuid,
    pub name: String,
    /// Standardized difficulty, baseline 113.
    pub slope_rating: Decimal,
    /// Expected score for a scratch golfer, typically close to par.
    pub course_rating: Decimal,
    pub par: i32,
    pub map_link: Option<String>,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
