use sqlx::PgPool;
use storage::{
    dto::course::{CreateCourseRequest, UpdateCourseRequest},
    error::Result,
    models::Course,
    repository::course::CourseRepository,
};
use uuid::Uuid;

pub async fn list_active(pool: &PgPool) -> Result<Vec<Course>> {
    let repo = CourseRepository::new(pool);
    repo.list_active().await
}

pub async fn create_course(pool: &PgPool, req: &CreateCourseRequest) -> Result<Course> {
    let repo = CourseRepository::new(pool);
    repo.create(req).await
}

pub async fn update_course(
    pool: &PgPool,
    course_id: Uuid,
    req: &UpdateCourseRequest,
) -> Result<Course> {
    let repo = CourseRepository::new(pool);

    let existing = repo.find_by_id(course_id).await?;
    repo.update(course_id, &existing, req).await
}

pub async fn delete_course(pool: &PgPool, course_id: Uuid) -> Result<()> {
    let repo = CourseRepository::new(pool);
    repo.delete(course_id).await
}
