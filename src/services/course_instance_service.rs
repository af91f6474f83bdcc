use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms;
use crate::models::{ActiveStatus, CourseInstance, NewCourseInstanceRequest};

pub const COURSE_INSTANCES_PATH: &str = "/course-instances";

#[derive(Clone)]
pub struct CourseInstanceService {
    api: ApiClient,
}

impl CourseInstanceService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, req: &NewCourseInstanceRequest) -> Result<CourseInstance, ApiError> {
        forms::validate(req)?;
        self.api.post(COURSE_INSTANCES_PATH, req).await
    }

    pub async fn get(&self, id: i64) -> Result<CourseInstance, ApiError> {
        self.api
            .get(&format!("{}/{}", COURSE_INSTANCES_PATH, id))
            .await
    }

    pub async fn set_status(&self, id: i64, status: ActiveStatus) -> Result<CourseInstance, ApiError> {
        let query = vec![("newStatus".to_string(), status.as_str().to_string())];
        let instance: CourseInstance = self
            .api
            .patch_query(&format!("{}/{}/status", COURSE_INSTANCES_PATH, id), &query)
            .await?;
        info!("Course instance {} set to {}", id, status.as_str());
        Ok(instance)
    }

    pub async fn archive(&self, id: i64) -> Result<CourseInstance, ApiError> {
        self.set_status(id, ActiveStatus::Inactive).await
    }

    pub async fn restore(&self, id: i64) -> Result<CourseInstance, ApiError> {
        self.set_status(id, ActiveStatus::Active).await
    }
}
