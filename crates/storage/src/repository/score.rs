use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::score::RecentScoreEntry;
use crate::error::{Result, StorageError};
use crate::models::Score;

const SCORE_COLUMNS: &str = "score_id, user_id, course_id, course_name, played_on, \
                             gross_score, handicap_at_entry, net_score, holes, created_at";

pub struct ScoreRepository<'a> {
    pool: &'a PgPool,
}

/// Fully computed score record ready for persistence: net score derived and
/// course name / handicap snapshotted by the score lifecycle service.
pub struct NewScore<'a> {
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub course_name: &'a str,
    pub played_on: NaiveDate,
    pub gross_score: i32,
    pub handicap_at_entry: i32,
    pub net_score: i32,
    pub holes: i32,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_score: &NewScore<'_>) -> Result<Score> {
        let score = sqlx::query_as::<_, Score>(&format!(
            r#"
            INSERT INTO scores (user_id, course_id, course_name, played_on,
                                gross_score, handicap_at_entry, net_score, holes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {SCORE_COLUMNS}
            "#
        ))
        .bind(new_score.user_id)
        .bind(new_score.course_id)
        .bind(new_score.course_name)
        .bind(new_score.played_on)
        .bind(new_score.gross_score)
        .bind(new_score.handicap_at_entry)
        .bind(new_score.net_score)
        .bind(new_score.holes)
        .fetch_one(self.pool)
        .await?;

        Ok(score)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Score> {
        let score = sqlx::query_as::<_, Score>(&format!(
            "SELECT {SCORE_COLUMNS} FROM scores WHERE score_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(score)
    }

    /// Single score with player name and current course par joined in.
    pub async fn find_by_id_detailed(&self, id: Uuid) -> Result<RecentScoreEntry> {
        let entry = sqlx::query_as::<_, RecentScoreEntry>(
            r#"
            SELECT s.score_id, s.user_id,
                   u.first_name || ' ' || u.last_name AS player_name,
                   s.course_name, s.played_on, s.gross_score, s.net_score, s.holes,
                   c.par
            FROM scores s
            JOIN users u ON u.user_id = s.user_id
            LEFT JOIN courses c ON c.course_id = s.course_id
            WHERE s.score_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(entry)
    }

    /// Most recent rounds across the whole club.
    pub async fn list_recent(&self, limit: u32) -> Result<(Vec<RecentScoreEntry>, i64)> {
        let entries = sqlx::query_as::<_, RecentScoreEntry>(
            r#"
            SELECT s.score_id, s.user_id,
                   u.first_name || ' ' || u.last_name AS player_name,
                   s.course_name, s.played_on, s.gross_score, s.net_score, s.holes,
                   c.par
            FROM scores s
            JOIN users u ON u.user_id = s.user_id
            LEFT JOIN courses c ON c.course_id = s.course_id
            ORDER BY s.played_on DESC, s.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scores")
            .fetch_one(self.pool)
            .await?;

        Ok((entries, total))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM scores WHERE score_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
