use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms;
use crate::models::{BulkEnrollRequest, BulkEnrollResult};

pub const ENROLLMENTS_PATH: &str = "/enrollments";
pub const MY_COURSE_INSTANCES_PATH: &str = "/students/me/course-instances";

#[derive(Clone)]
pub struct EnrollmentService {
    api: ApiClient,
}

impl EnrollmentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn enroll_students(
        &self,
        course_instance_id: i64,
        student_ids: Vec<i64>,
    ) -> Result<BulkEnrollResult, ApiError> {
        let req = BulkEnrollRequest {
            course_instance_id,
            student_ids,
        };
        forms::validate(&req)?;
        let result: BulkEnrollResult = self
            .api
            .post(&format!("{}/bulk", ENROLLMENTS_PATH), &req)
            .await?;
        info!(
            "Enrolled {} students into instance {} ({} skipped)",
            result.enrolled.len(),
            course_instance_id,
            result.skipped_student_ids.len()
        );
        Ok(result)
    }

    pub async fn unenroll(&self, enrollment_id: i64) -> Result<(), ApiError> {
        self.api
            .delete(&format!("{}/{}", ENROLLMENTS_PATH, enrollment_id))
            .await
    }
}
