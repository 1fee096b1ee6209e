use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Course;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 255, message = "Course name is required"))]
    pub name: String,

    pub slope_rating: Decimal,

    pub course_rating: Decimal,

    #[validate(range(min = 1, message = "Par must be at least 1"))]
    pub par: i32,

    #[validate(url)]
    pub map_link: Option<String>,
}

impl CreateCourseRequest {
    /// Rating checks the `validator` derive cannot express on Decimal.
    pub fn validate_ratings(&self) -> Result<(), String> {
        if self.slope_rating <= Decimal::ZERO {
            return Err("slope_rating must be greater than zero".to_string());
        }
        if self.course_rating <= Decimal::ZERO {
            return Err("course_rating must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub slope_rating: Option<Decimal>,

    pub course_rating: Option<Decimal>,

    #[validate(range(min = 1))]
    pub par: Option<i32>,

    /// Absent leaves the stored link untouched; an explicit `null` clears it.
    #[validate(url)]
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub map_link: Option<Option<String>>,

    pub status: Option<String>,
}

/// Keeps "field omitted" (outer `None`) distinguishable from
/// "field set to null" (`Some(None)`).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateCourseRequest {
    pub fn validate_ratings(&self) -> Result<(), String> {
        if matches!(self.slope_rating, Some(s) if s <= Decimal::ZERO) {
            return Err("slope_rating must be greater than zero".to_string());
        }
        if matches!(self.course_rating, Some(c) if c <= Decimal::ZERO) {
            return Err("course_rating must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub course_id: Uuid,
    pub name: String,
    pub slope_rating: Decimal,
    pub course_rating: Decimal,
    pub par: i32,
    pub map_link: Option<String>,
    pub status: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            course_id: course.course_id,
            name: course.name,
            slope_rating: course.slope_rating,
            course_rating: course.course_rating,
            par: course.par,
            map_link: course.map_link,
            status: course.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_must_be_positive() {
        let req = CreateCourseRequest {
            name: "Highlands".to_string(),
            slope_rating: Decimal::ZERO,
            course_rating: Decimal::new(720, 1),
            par: 72,
            map_link: None,
        };
        assert!(req.validate_ratings().is_err());

        let req = CreateCourseRequest {
            slope_rating: Decimal::new(113, 0),
            ..req
        };
        assert!(req.validate_ratings().is_ok());
    }

    #[test]
    fn update_distinguishes_absent_and_null_map_link() {
        let req: UpdateCourseRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.map_link, None);

        let req: UpdateCourseRequest = serde_json::from_str(r#"{"map_link":null}"#).unwrap();
        assert_eq!(req.map_link, Some(None));

        let req: UpdateCourseRequest =
            serde_json::from_str(r#"{"map_link":"https://osm.org/go/abc"}"#).unwrap();
        assert_eq!(req.map_link, Some(Some("https://osm.org/go/abc".to_string())));
    }
}
