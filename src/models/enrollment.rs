use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_instance_id: i64,
    #[serde(default)]
    pub enrolled_at: Option<NaiveDateTime>,
}

impl Identified for Enrollment {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BulkEnrollRequest {
    #[validate(range(min = 1, message = "Please select a course instance"))]
    pub course_instance_id: i64,
    #[validate(length(min = 1, message = "Select at least one student"))]
    pub student_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkEnrollResult {
    pub enrolled: Vec<Enrollment>,
    /// Students the backend refused, e.g. already enrolled.
    pub skipped_student_ids: Vec<i64>,
}
