use sqlx::PgPool;
use storage::{
    dto::score::{CreateScoreRequest, RecentScoreEntry},
    error::Result,
    models::{Score, User},
    repository::{score::ScoreRepository, user::UserRepository},
    services::{handicap::RecomputeOutcome, score_lifecycle},
};
use uuid::Uuid;

/// Log a round and recompute the owner's handicap.
pub async fn create_score(
    pool: &PgPool,
    req: &CreateScoreRequest,
) -> Result<(Score, RecomputeOutcome)> {
    score_lifecycle::create_score(pool, req).await
}

/// Delete a round on behalf of its owner or an administrator.
pub async fn delete_score(
    pool: &PgPool,
    score_id: Uuid,
    requester_id: Uuid,
    requester_is_admin: bool,
) -> Result<(Uuid, RecomputeOutcome)> {
    score_lifecycle::delete_score(pool, score_id, requester_id, requester_is_admin).await
}

pub async fn get_score_detailed(pool: &PgPool, score_id: Uuid) -> Result<RecentScoreEntry> {
    let repo = ScoreRepository::new(pool);
    repo.find_by_id_detailed(score_id).await
}

pub async fn list_recent(pool: &PgPool, limit: u32) -> Result<(Vec<RecentScoreEntry>, i64)> {
    let repo = ScoreRepository::new(pool);
    repo.list_recent(limit).await
}

pub async fn find_user(pool: &PgPool, user_id: Uuid) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.find_by_id(user_id).await
}
