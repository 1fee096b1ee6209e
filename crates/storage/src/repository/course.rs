use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::course::{CreateCourseRequest, UpdateCourseRequest};
use crate::error::{Result, StorageError};
use crate::models::{COURSE_STATUS_ACTIVE, Course};

const COURSE_COLUMNS: &str =
    "course_id, name, slope_rating, course_rating, par, map_link, status, created_at";

pub struct CourseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CourseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a course for differential math or score entry.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Course> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE course_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(course)
    }

    pub async fn list_active(&self) -> Result<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE status = $1 ORDER BY lower(name)"
        ))
        .bind(COURSE_STATUS_ACTIVE)
        .fetch_all(self.pool)
        .await?;

        Ok(courses)
    }

    pub async fn create(&self, req: &CreateCourseRequest) -> Result<Course> {
        let course = sqlx::query_as::<_, Course>(&format!(
            r#"
            INSERT INTO courses (name, slope_rating, course_rating, par, map_link, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COURSE_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(req.slope_rating)
        .bind(req.course_rating)
        .bind(req.par)
        .bind(&req.map_link)
        .bind(COURSE_STATUS_ACTIVE)
        .fetch_one(self.pool)
        .await?;

        Ok(course)
    }

    pub async fn update(
        &self,
        id: Uuid,
        existing: &Course,
        req: &UpdateCourseRequest,
    ) -> Result<Course> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let slope_rating = req.slope_rating.unwrap_or(existing.slope_rating);
        let course_rating = req.course_rating.unwrap_or(existing.course_rating);
        let par = req.par.unwrap_or(existing.par);
        let map_link = match &req.map_link {
            Some(value) => value.as_ref(),
            None => existing.map_link.as_ref(),
        };
        let status = req.status.as_ref().unwrap_or(&existing.status);

        let course = sqlx::query_as::<_, Course>(&format!(
            r#"
            UPDATE courses
            SET name = $2, slope_rating = $3, course_rating = $4, par = $5,
                map_link = $6, status = $7
            WHERE course_id = $1
            RETURNING {COURSE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(slope_rating)
        .bind(course_rating)
        .bind(par)
        .bind(map_link)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(course)
    }

    /// Deletes the course row only. Scores referencing it survive with their
    /// name snapshot and simply stop contributing differentials.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM courses WHERE course_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
