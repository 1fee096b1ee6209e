use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Golfer, TEE_OFF_STATUS_ACTIVE, TeeOff};

const TEE_OFF_COLUMNS: &str = "tee_off_id, course_id, course_name, tee_date, tee_time, \
                               golfers, created_by, status, created_at";

pub struct TeeOffRepository<'a> {
    pool: &'a PgPool,
}

pub struct NewTeeOff<'a> {
    pub course_id: Uuid,
    pub course_name: &'a str,
    pub tee_date: NaiveDate,
    pub tee_time: &'a str,
    pub golfers: Vec<Golfer>,
    pub created_by: Uuid,
}

impl<'a> TeeOffRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_tee_off: NewTeeOff<'_>) -> Result<TeeOff> {
        let tee_off = sqlx::query_as::<_, TeeOff>(&format!(
            r#"
            INSERT INTO tee_offs (course_id, course_name, tee_date, tee_time, golfers, created_by, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {TEE_OFF_COLUMNS}
            "#
        ))
        .bind(new_tee_off.course_id)
        .bind(new_tee_off.course_name)
        .bind(new_tee_off.tee_date)
        .bind(new_tee_off.tee_time)
        .bind(Json(new_tee_off.golfers))
        .bind(new_tee_off.created_by)
        .bind(TEE_OFF_STATUS_ACTIVE)
        .fetch_one(self.pool)
        .await?;

        Ok(tee_off)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<TeeOff> {
        let tee_off = sqlx::query_as::<_, TeeOff>(&format!(
            "SELECT {TEE_OFF_COLUMNS} FROM tee_offs WHERE tee_off_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tee_off)
    }

    /// Active slots from `from_date` on, soonest first.
    pub async fn list_upcoming(
        &self,
        from_date: NaiveDate,
        limit: u32,
        offset: u32,
    ) -> Result<(Vec<TeeOff>, i64)> {
        let tee_offs = sqlx::query_as::<_, TeeOff>(&format!(
            r#"
            SELECT {TEE_OFF_COLUMNS} FROM tee_offs
            WHERE status = $1 AND tee_date >= $2
            ORDER BY tee_date, tee_time
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(TEE_OFF_STATUS_ACTIVE)
        .bind(from_date)
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tee_offs WHERE status = $1 AND tee_date >= $2",
        )
        .bind(TEE_OFF_STATUS_ACTIVE)
        .bind(from_date)
        .fetch_one(self.pool)
        .await?;

        Ok((tee_offs, total))
    }

    /// Drop slots whose date has passed.
    pub async fn delete_before(&self, date: NaiveDate) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tee_offs WHERE tee_date < $1")
            .bind(date)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn update_golfers(
        &self,
        id: Uuid,
        golfers: &[Golfer],
        status: &str,
    ) -> Result<TeeOff> {
        let tee_off = sqlx::query_as::<_, TeeOff>(&format!(
            r#"
            UPDATE tee_offs SET golfers = $2, status = $3
            WHERE tee_off_id = $1
            RETURNING {TEE_OFF_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(Json(golfers))
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tee_off)
    }
}
