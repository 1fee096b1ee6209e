use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// One member's standing: handicap first, best 18-hole round as tiebreaker.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct LeaderboardEntry {
    pub name: String,
    pub total_rounds: i64,
    pub best_score: Option<i32>,
    pub best_course_name: Option<String>,
    pub handicap: i32,
}
