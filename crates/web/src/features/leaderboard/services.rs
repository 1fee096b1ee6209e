use sqlx::PgPool;
use storage::{
    dto::leaderboard::LeaderboardEntry, error::Result,
    repository::leaderboard::LeaderboardRepository,
};

/// Club standings, handicap first.
pub async fn get_leaderboard(pool: &PgPool) -> Result<Vec<LeaderboardEntry>> {
    let repo = LeaderboardRepository::new(pool);
    repo.global().await
}
