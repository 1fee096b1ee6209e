use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Score;

/// Request payload for logging a round.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateScoreRequest {
    pub user_id: Uuid,

    pub course_id: Uuid,

    pub date: NaiveDate,

    #[validate(range(min = 1, message = "Gross score must be at least 1"))]
    pub gross_score: i32,

    /// 9 or 18; anything else is rejected by the differential calculator
    /// before any write happens.
    pub holes: i32,
}

/// Request payload for deleting a round. The requester identity travels in
/// the typed body; admins may delete on another member's behalf.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteScoreRequest {
    pub requesting_user_id: Uuid,
    #[serde(default)]
    pub requesting_user_is_admin: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreResponse {
    pub score_id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub course_name: String,
    pub played_on: NaiveDate,
    pub gross_score: i32,
    pub handicap_at_entry: i32,
    pub net_score: i32,
    pub holes: i32,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            score_id: score.score_id,
            user_id: score.user_id,
            course_id: score.course_id,
            course_name: score.course_name,
            played_on: score.played_on,
            gross_score: score.gross_score,
            handicap_at_entry: score.handicap_at_entry,
            net_score: score.net_score,
            holes: score.holes,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateScoreResponse {
    pub score: ScoreResponse,
    /// Owner's handicap index after recomputation.
    pub handicap: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteScoreResponse {
    /// Owner's handicap index after recomputation (retained value when no
    /// scores remain).
    pub handicap: i32,
    /// Renewed credential, present when the stored handicap changed and the
    /// requester is the owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecomputeHandicapResponse {
    pub handicap: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// A recent round with player and course details joined in for display.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct RecentScoreEntry {
    pub score_id: Uuid,
    pub user_id: Uuid,
    pub player_name: String,
    pub course_name: String,
    pub played_on: NaiveDate,
    pub gross_score: i32,
    pub net_score: i32,
    pub holes: i32,
    /// Par of the course as currently configured; absent when the course has
    /// been deleted since.
    pub par: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RecentScoresParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentScoresResponse {
    pub scores: Vec<RecentScoreEntry>,
    pub total_scores: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_zero_gross_score() {
        let req = CreateScoreRequest {
            user_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            gross_score: 0,
            holes: 18,
        };
        assert!(req.validate().is_err());
    }
}
