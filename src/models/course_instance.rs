use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{ActiveStatus, Identified};

/// One offering of a course, taught by one teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInstance {
    pub id: i64,
    pub course_id: i64,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    pub status: ActiveStatus,
}

impl Identified for CourseInstance {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseInstanceRequest {
    #[validate(range(min = 1, message = "Please select a course"))]
    pub course_id: i64,
    #[validate(range(min = 1, message = "Please select a teacher"))]
    pub teacher_id: i64,
}
