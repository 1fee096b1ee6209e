use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Golfer {
    pub user_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeeOff {
    pub tee_off_id: Uuid,
    pub course_id: Uuid,
    pub course_name: String,
    pub tee_date: NaiveDate,
    pub tee_time: String,
    pub golfers: sqlx::types::Json<Vec<Golfer>>,
    pub created_by: Uuid,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
