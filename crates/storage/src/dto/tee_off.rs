use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Golfer, TeeOff};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeeOffRequest {
    pub course_id: Uuid,

    pub date: NaiveDate,

    #[validate(length(min = 1, max = 16, message = "Tee-off time is required"))]
    pub time: String,

    pub created_by: Uuid,

    /// Members joining the slot at creation time; each must resolve to an
    /// existing user.
    #[serde(default)]
    pub golfers: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddGolferRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemoveGolferRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeeOffResponse {
    pub tee_off_id: Uuid,
    pub course_id: Uuid,
    pub course_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub golfers: Vec<Golfer>,
    pub created_by: Uuid,
    pub status: String,
}

impl From<TeeOff> for TeeOffResponse {
    fn from(tee_off: TeeOff) -> Self {
        Self {
            tee_off_id: tee_off.tee_off_id,
            course_id: tee_off.course_id,
            course_name: tee_off.course_name,
            date: tee_off.tee_date,
            time: tee_off.tee_time,
            golfers: tee_off.golfers.0,
            created_by: tee_off.created_by,
            status: tee_off.status,
        }
    }
}
