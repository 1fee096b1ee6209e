use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A logged round. Created atomically with its computed net score and never
/// mutated afterwards except by deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    /// Denormalized course name taken at entry time, kept for display even if
    /// the course is later renamed or deleted.
    pub course_name: String,
    pub played_on: NaiveDate,
    pub gross_score: i32,
    /// The player's handicap index at time of entry, stored verbatim.
    pub handicap_at_entry: i32,
    pub net_score: i32,
    pub holes: i32,
    pub created_at: chrono::NaiveDateTime,
}
