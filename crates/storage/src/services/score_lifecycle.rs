//! Score record lifecycle: validated creation with a computed net score,
//! and owner-or-admin deletion. Every mutation ends by re-deriving the
//! owner's handicap from their full remaining history.

use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::score::CreateScoreRequest;
use crate::error::{Result, StorageError};
use crate::models::{Course, Score};
use crate::repository::course::CourseRepository;
use crate::repository::score::{NewScore, ScoreRepository};
use crate::repository::user::UserRepository;
use crate::services::handicap::{self, HandicapError, RecomputeOutcome};

fn course_ratings(course: &Course) -> Result<(f64, f64)> {
    let course_rating = course
        .course_rating
        .to_f64()
        .ok_or(HandicapError::InvalidSlopeRating)?;
    let slope_rating = course
        .slope_rating
        .to_f64()
        .ok_or(HandicapError::InvalidSlopeRating)?;

    Ok((course_rating, slope_rating))
}

/// Log a round: resolve the course, compute the net score against the
/// handicap the player holds right now, persist with course-name and
/// handicap snapshots, then recompute the player's index.
///
/// The persisted score and the recomputation are separate steps on purpose.
/// If the write succeeds and the recomputation fails, re-invoking
/// recomputation repairs the index; it is idempotent and side-effect-free
/// to repeat.
pub async fn create_score(
    pool: &PgPool,
    req: &CreateScoreRequest,
) -> Result<(Score, RecomputeOutcome)> {
    let course = CourseRepository::new(pool).find_by_id(req.course_id).await?;
    let user = UserRepository::new(pool).find_by_id(req.user_id).await?;

    let (course_rating, slope_rating) = course_ratings(&course)?;
    let net_score = handicap::net_score(
        req.gross_score,
        course_rating,
        slope_rating,
        req.holes,
        user.handicap,
    )?;

    let score = ScoreRepository::new(pool)
        .create(&NewScore {
            user_id: req.user_id,
            course_id: req.course_id,
            course_name: &course.name,
            played_on: req.date,
            gross_score: req.gross_score,
            handicap_at_entry: user.handicap,
            net_score,
            holes: req.holes,
        })
        .await?;

    let outcome = handicap::recompute_for_user(pool, req.user_id).await?;

    Ok((score, outcome))
}

/// A score may be deleted by its owner or by an administrator acting on the
/// owner's behalf.
pub fn can_delete(owner_id: Uuid, requester_id: Uuid, requester_is_admin: bool) -> bool {
    requester_is_admin || owner_id == requester_id
}

/// Delete a round and recompute the handicap of the *owning* player, who is
/// not necessarily the requester. Returns the owner id with the outcome so
/// the caller can decide about credential reissuance.
pub async fn delete_score(
    pool: &PgPool,
    score_id: Uuid,
    requester_id: Uuid,
    requester_is_admin: bool,
) -> Result<(Uuid, RecomputeOutcome)> {
    let score = ScoreRepository::new(pool).find_by_id(score_id).await?;

    if !can_delete(score.user_id, requester_id, requester_is_admin) {
        return Err(StorageError::Unauthorized(
            "Unauthorized to delete this score".to_string(),
        ));
    }

    ScoreRepository::new(pool).delete(score_id).await?;

    let outcome = handicap::recompute_for_user(pool, score.user_id).await?;

    Ok((score.user_id, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn owner_may_delete_own_score() {
        let owner = Uuid::new_v4();
        assert!(can_delete(owner, owner, false));
    }

    #[test]
    fn admin_may_delete_any_score() {
        let owner = Uuid::new_v4();
        let admin = Uuid::new_v4();
        assert!(can_delete(owner, admin, true));
    }

    #[test]
    fn non_admin_may_not_delete_anothers_score() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        assert!(!can_delete(owner, stranger, false));
    }

    #[test]
    fn ratings_bridge_preserves_decimal_values() {
        let course = Course {
            course_id: Uuid::new_v4(),
            name: "Highlands".to_string(),
            slope_rating: Decimal::new(113, 0),
            course_rating: Decimal::new(720, 1),
            par: 72,
            map_link: None,
            status: "active".to_string(),
            created_at: chrono::NaiveDateTime::default(),
        };

        let (course_rating, slope_rating) = course_ratings(&course).unwrap();
        assert_eq!(course_rating, 72.0);
        assert_eq!(slope_rating, 113.0);
    }
}
