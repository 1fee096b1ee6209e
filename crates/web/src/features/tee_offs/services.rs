use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::tee_off::CreateTeeOffRequest,
    error::{Result, StorageError},
    models::{Golfer, TEE_OFF_STATUS_ACTIVE, TEE_OFF_STATUS_CANCELLED, TeeOff},
    repository::{
        course::CourseRepository,
        tee_off::{NewTeeOff, TeeOffRepository},
        user::UserRepository,
    },
};
use uuid::Uuid;

/// Create a tee-off slot. The course, the creator and every golfer must
/// resolve; golfer names are snapshotted from the user records.
pub async fn create_tee_off(pool: &PgPool, req: &CreateTeeOffRequest) -> Result<TeeOff> {
    let course = CourseRepository::new(pool).find_by_id(req.course_id).await?;

    let users = UserRepository::new(pool);
    users.find_by_id(req.created_by).await?;

    let mut golfers = Vec::with_capacity(req.golfers.len());
    for user_id in &req.golfers {
        let user = users.find_by_id(*user_id).await?;
        golfers.push(Golfer {
            user_id: user.user_id,
            name: user.full_name(),
        });
    }

    TeeOffRepository::new(pool)
        .create(NewTeeOff {
            course_id: course.course_id,
            course_name: &course.name,
            tee_date: req.date,
            tee_time: &req.time,
            golfers,
            created_by: req.created_by,
        })
        .await
}

/// Upcoming slots, pruning anything already in the past first.
pub async fn list_upcoming(
    pool: &PgPool,
    today: NaiveDate,
    limit: u32,
    offset: u32,
) -> Result<(Vec<TeeOff>, i64)> {
    let repo = TeeOffRepository::new(pool);

    let pruned = repo.delete_before(today).await?;
    if pruned > 0 {
        tracing::debug!(pruned, "removed past tee-off slots");
    }

    repo.list_upcoming(today, limit, offset).await
}

pub async fn add_golfer(pool: &PgPool, tee_off_id: Uuid, user_id: Uuid) -> Result<TeeOff> {
    let repo = TeeOffRepository::new(pool);
    let tee_off = repo.find_by_id(tee_off_id).await?;

    if tee_off.golfers.0.iter().any(|g| g.user_id == user_id) {
        return Err(StorageError::ConstraintViolation(
            "Golfer already added to this tee-off".to_string(),
        ));
    }

    let user = UserRepository::new(pool).find_by_id(user_id).await?;

    let mut golfers = tee_off.golfers.0.clone();
    golfers.push(Golfer {
        user_id: user.user_id,
        name: user.full_name(),
    });

    repo.update_golfers(tee_off_id, &golfers, &tee_off.status)
        .await
}

/// Remove a golfer; a slot left with no golfers is cancelled.
pub async fn remove_golfer(pool: &PgPool, tee_off_id: Uuid, user_id: Uuid) -> Result<TeeOff> {
    let repo = TeeOffRepository::new(pool);
    let tee_off = repo.find_by_id(tee_off_id).await?;

    let mut golfers = tee_off.golfers.0.clone();
    let before = golfers.len();
    golfers.retain(|g| g.user_id != user_id);

    if golfers.len() == before {
        return Err(StorageError::ConstraintViolation(
            "Golfer not found in this tee-off".to_string(),
        ));
    }

    let status = if golfers.is_empty() {
        TEE_OFF_STATUS_CANCELLED
    } else {
        TEE_OFF_STATUS_ACTIVE
    };

    repo.update_golfers(tee_off_id, &golfers, status).await
}
