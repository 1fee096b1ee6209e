//! Handicap math and the recomputation service.
//!
//! A round's performance is normalized into a *differential* against a
//! standard slope of 113, and a member's handicap index is re-derived from
//! the best differentials of their full score history on every score
//! mutation. Recomputation is always a full re-derivation, never an
//! incremental update, so the stored index is correct regardless of the
//! order in which creates and deletes land.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::{FromRow, PgPool};
use thiserror::Error;
use uuid::Uuid;

use crate::error::{Result, StorageError};

/// Baseline slope rating a differential is normalized to.
pub const STANDARD_SLOPE: f64 = 113.0;

/// How many of the lowest differentials feed the index.
pub const BEST_DIFFERENTIAL_COUNT: usize = 8;

/// Dampening multiplier: the index should sit slightly below average
/// demonstrated ability.
pub const INDEX_MULTIPLIER: f64 = 0.96;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandicapError {
    #[error("holes must be 9 or 18, got {0}")]
    InvalidHoles(i32),

    #[error("gross score must be at least 1, got {0}")]
    InvalidGrossScore(i32),

    #[error("slope rating must be greater than zero")]
    InvalidSlopeRating,

    #[error("no valid differentials available")]
    InsufficientData,
}

/// 9-hole rounds are compared against half the 18-hole course rating; the
/// slope rating is used unadjusted.
fn adjusted_course_rating(course_rating: f64, holes: i32) -> std::result::Result<f64, HandicapError> {
    match holes {
        18 => Ok(course_rating),
        9 => Ok(course_rating / 2.0),
        other => Err(HandicapError::InvalidHoles(other)),
    }
}

/// Round half-up: exactly .5 goes toward positive infinity, so -0.5
/// becomes 0 rather than -1. `f64::round` would round it away from zero.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

fn check_round(gross_score: i32, slope_rating: f64) -> std::result::Result<(), HandicapError> {
    if gross_score < 1 {
        return Err(HandicapError::InvalidGrossScore(gross_score));
    }
    if slope_rating <= 0.0 {
        return Err(HandicapError::InvalidSlopeRating);
    }
    Ok(())
}

/// Single-round handicap differential, full precision.
pub fn differential(
    gross_score: i32,
    course_rating: f64,
    slope_rating: f64,
    holes: i32,
) -> std::result::Result<f64, HandicapError> {
    check_round(gross_score, slope_rating)?;
    let rating = adjusted_course_rating(course_rating, holes)?;

    Ok((f64::from(gross_score) - rating) * STANDARD_SLOPE / slope_rating)
}

/// Net score stored on a round at entry time: gross score adjusted for the
/// course and for the handicap the player held when the round was logged.
pub fn net_score(
    gross_score: i32,
    course_rating: f64,
    slope_rating: f64,
    holes: i32,
    handicap_at_entry: i32,
) -> std::result::Result<i32, HandicapError> {
    check_round(gross_score, slope_rating)?;
    let rating = adjusted_course_rating(course_rating, holes)?;
    let handicap_strokes = f64::from(handicap_at_entry) * slope_rating / STANDARD_SLOPE;

    Ok(round_half_up(f64::from(gross_score) - rating - handicap_strokes))
}

/// Aggregate a set of differentials into an integer handicap index: best
/// eight (or all, if fewer), averaged, dampened, floored at zero, rounded.
///
/// Runs identically whether triggered by a score creation or a deletion.
pub fn aggregate_index(differentials: &[f64]) -> std::result::Result<i32, HandicapError> {
    if differentials.is_empty() {
        return Err(HandicapError::InsufficientData);
    }

    let mut sorted = differentials.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.truncate(BEST_DIFFERENTIAL_COUNT);

    let average = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let index = (average * INDEX_MULTIPLIER).max(0.0);

    Ok(round_half_up(index))
}

/// Result of recomputing a member's handicap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeOutcome {
    Updated { previous: i32, handicap: i32 },
    /// No valid differentials remained; the prior index was retained.
    InsufficientData { retained: i32 },
}

impl RecomputeOutcome {
    pub fn handicap(&self) -> i32 {
        match *self {
            RecomputeOutcome::Updated { handicap, .. } => handicap,
            RecomputeOutcome::InsufficientData { retained } => retained,
        }
    }

    /// Whether the stored value changed, which is what gates credential
    /// reissuance.
    pub fn changed(&self) -> bool {
        matches!(
            *self,
            RecomputeOutcome::Updated { previous, handicap } if previous != handicap
        )
    }
}

#[derive(Debug, FromRow)]
struct RoundRatings {
    gross_score: i32,
    holes: i32,
    course_rating: Option<Decimal>,
    slope_rating: Option<Decimal>,
}

impl RoundRatings {
    /// None when the course no longer resolves or its rating data is
    /// unusable; such rounds are excluded from the differential set rather
    /// than failing the whole recomputation.
    fn differential(&self) -> Option<f64> {
        let course_rating = self.course_rating.as_ref()?.to_f64()?;
        let slope_rating = self.slope_rating.as_ref()?.to_f64()?;

        differential(self.gross_score, course_rating, slope_rating, self.holes).ok()
    }
}

/// Re-derive and persist the handicap index for one member from their
/// complete current score history.
///
/// The whole read-compute-write cycle runs in a transaction holding a
/// per-user advisory lock, so two concurrent score mutations for the same
/// member cannot leave a transient intermediate index behind. Idempotent:
/// repeating it without an intervening score mutation writes the same value.
pub async fn recompute_for_user(pool: &PgPool, user_id: Uuid) -> Result<RecomputeOutcome> {
    let mut tx = pool.begin().await?;

    let (lock_key, _) = user_id.as_u64_pair();
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(lock_key as i64)
        .execute(&mut *tx)
        .await?;

    let current: i32 = sqlx::query_scalar("SELECT handicap FROM users WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

    let rounds: Vec<RoundRatings> = sqlx::query_as(
        r#"
        SELECT s.gross_score, s.holes, c.course_rating, c.slope_rating
        FROM scores s
        LEFT JOIN courses c ON c.course_id = s.course_id
        WHERE s.user_id = $1
        ORDER BY s.played_on DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *tx)
    .await?;

    let differentials: Vec<f64> = rounds.iter().filter_map(RoundRatings::differential).collect();

    match aggregate_index(&differentials) {
        Ok(handicap) => {
            sqlx::query("UPDATE users SET handicap = $1 WHERE user_id = $2")
                .bind(handicap)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            Ok(RecomputeOutcome::Updated {
                previous: current,
                handicap,
            })
        }
        Err(HandicapError::InsufficientData) => {
            tx.commit().await?;
            Ok(RecomputeOutcome::InsufficientData { retained: current })
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differential_on_standard_slope_is_strokes_over_rating() {
        let d = differential(90, 72.0, 113.0, 18).unwrap();
        assert_eq!(d, 18.0);
    }

    #[test]
    fn differential_halves_course_rating_for_nine_holes() {
        // 50 over a 72.0-rated course for nine holes: (50 - 36) * 113 / 113
        let d = differential(50, 72.0, 113.0, 9).unwrap();
        assert_eq!(d, 14.0);
    }

    #[test]
    fn differential_scales_by_slope() {
        let d = differential(90, 72.0, 140.0, 18).unwrap();
        assert!((d - 18.0 * 113.0 / 140.0).abs() < 1e-12);
    }

    #[test]
    fn differential_rejects_bad_holes() {
        assert_eq!(
            differential(90, 72.0, 113.0, 12),
            Err(HandicapError::InvalidHoles(12))
        );
    }

    #[test]
    fn differential_rejects_nonpositive_slope() {
        assert_eq!(
            differential(90, 72.0, 0.0, 18),
            Err(HandicapError::InvalidSlopeRating)
        );
        assert_eq!(
            differential(90, 72.0, -113.0, 18),
            Err(HandicapError::InvalidSlopeRating)
        );
    }

    #[test]
    fn differential_rejects_gross_below_one() {
        assert_eq!(
            differential(0, 72.0, 113.0, 18),
            Err(HandicapError::InvalidGrossScore(0))
        );
    }

    #[test]
    fn net_score_accounts_for_handicap_at_entry() {
        // round(90 - 72.0 - 18 * 113 / 113) = 0
        let net = net_score(90, 72.0, 113.0, 18, 18).unwrap();
        assert_eq!(net, 0);
    }

    #[test]
    fn net_score_rounds_half_toward_positive_infinity() {
        // 72 - 72.5 - 0 = -0.5, which rounds up to 0
        assert_eq!(net_score(72, 72.5, 113.0, 18, 0).unwrap(), 0);
        // 71 - 72.5 - 0 = -1.5, which rounds up to -1
        assert_eq!(net_score(71, 72.5, 113.0, 18, 0).unwrap(), -1);
        // 73 - 72.5 - 0 = 0.5, which rounds up to 1
        assert_eq!(net_score(73, 72.5, 113.0, 18, 0).unwrap(), 1);
    }

    #[test]
    fn net_score_uses_halved_rating_for_nine_holes() {
        // round(50 - 36.0 - 9 * 113 / 113) = 5
        let net = net_score(50, 72.0, 113.0, 9, 9).unwrap();
        assert_eq!(net, 5);
    }

    #[test]
    fn aggregate_averages_small_sets_without_minimum() {
        // A single valid round yields an index from that one round.
        assert_eq!(aggregate_index(&[14.0]).unwrap(), 13); // 14 * 0.96 = 13.44
        assert_eq!(aggregate_index(&[10.0, 20.0]).unwrap(), 14); // 15 * 0.96 = 14.4
    }

    #[test]
    fn aggregate_takes_best_eight_of_larger_sets() {
        let diffs = [14.0, 9.5, 20.1, 12.0, 8.0, 30.0, 11.0, 7.5, 25.0];
        // Best eight exclude 30.0; average 107.1 / 8 = 13.3875; * 0.96 = 12.852
        assert_eq!(aggregate_index(&diffs).unwrap(), 13);
    }

    #[test]
    fn adding_a_worse_round_to_eight_does_not_move_the_index() {
        let eight = [7.5, 8.0, 9.5, 11.0, 12.0, 14.0, 20.1, 25.0];
        let with_blowup = [7.5, 8.0, 9.5, 11.0, 12.0, 14.0, 20.1, 25.0, 60.0];
        assert_eq!(
            aggregate_index(&eight).unwrap(),
            aggregate_index(&with_blowup).unwrap()
        );
    }

    #[test]
    fn aggregate_floors_plus_handicaps_at_zero() {
        assert_eq!(aggregate_index(&[-4.0, -2.0]).unwrap(), 0);
    }

    #[test]
    fn aggregate_is_deterministic_for_repeat_invocations() {
        let diffs = [14.0, 9.5, 20.1, 12.0];
        assert_eq!(
            aggregate_index(&diffs).unwrap(),
            aggregate_index(&diffs).unwrap()
        );
    }

    #[test]
    fn aggregate_reports_insufficient_data_on_empty_set() {
        assert_eq!(aggregate_index(&[]), Err(HandicapError::InsufficientData));
    }

    #[test]
    fn insufficient_data_outcome_retains_prior_index() {
        let outcome = RecomputeOutcome::InsufficientData { retained: 18 };
        assert_eq!(outcome.handicap(), 18);
        assert!(!outcome.changed());
    }

    #[test]
    fn unchanged_recompute_does_not_trigger_reissue() {
        let outcome = RecomputeOutcome::Updated {
            previous: 13,
            handicap: 13,
        };
        assert!(!outcome.changed());

        let outcome = RecomputeOutcome::Updated {
            previous: 18,
            handicap: 13,
        };
        assert!(outcome.changed());
    }

    #[test]
    fn rounds_without_course_data_yield_no_differential() {
        let orphaned = RoundRatings {
            gross_score: 90,
            holes: 18,
            course_rating: None,
            slope_rating: None,
        };
        assert_eq!(orphaned.differential(), None);

        let zero_slope = RoundRatings {
            gross_score: 90,
            holes: 18,
            course_rating: Some(Decimal::new(720, 1)),
            slope_rating: Some(Decimal::ZERO),
        };
        assert_eq!(zero_slope.differential(), None);
    }
}
