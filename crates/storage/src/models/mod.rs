mod course;
mod score;
mod tee_off;
mod user;

pub use course::Course;
pub use score::Score;
pub use tee_off::{Golfer, TeeOff};
pub use user::User;

/// Member awaiting admin approval.
pub const USER_STATUS_PENDING: &str = "pending";
/// Approved member.
pub const USER_STATUS_ACTIVE: &str = "active";

pub const ROLE_MEMBER: &str = "member";
pub const ROLE_ADMINISTRATOR: &str = "administrator";

pub const COURSE_STATUS_ACTIVE: &str = "active";

pub const TEE_OFF_STATUS_ACTIVE: &str = "active";
pub const TEE_OFF_STATUS_CANCELLED: &str = "cancelled";
