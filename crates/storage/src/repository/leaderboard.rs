use sqlx::PgPool;

use crate::dto::leaderboard::LeaderboardEntry;
use crate::error::Result;

pub struct LeaderboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Standings for every member with at least one logged round: round
    /// count, best 18-hole gross score with the course it was shot on, and
    /// the current handicap. Sorted by handicap, then best score.
    pub async fn global(&self) -> Result<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT u.first_name || ' ' || u.last_name AS name,
                   COUNT(s.score_id) AS total_rounds,
                   MIN(s.gross_score) FILTER (WHERE s.holes = 18) AS best_score,
                   (
                       SELECT s2.course_name
                       FROM scores s2
                       WHERE s2.user_id = u.user_id AND s2.holes = 18
                       ORDER BY s2.gross_score, s2.played_on
                       LIMIT 1
                   ) AS best_course_name,
                   u.handicap
            FROM users u
            JOIN scores s ON s.user_id = u.user_id
            GROUP BY u.user_id, u.first_name, u.last_name, u.handicap
            ORDER BY u.handicap, best_score NULLS LAST
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}
