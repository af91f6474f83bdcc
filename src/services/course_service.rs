use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms;
use crate::models::{Course, NewCourseRequest, UpdateCourseRequest};

pub const COURSES_PATH: &str = "/courses";

#[derive(Clone)]
pub struct CourseService {
    api: ApiClient,
}

impl CourseService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, req: &NewCourseRequest) -> Result<Course, ApiError> {
        forms::validate(req)?;
        let course: Course = self.api.post(COURSES_PATH, req).await?;
        info!("Created course {} ({})", course.id, course.title);
        Ok(course)
    }

    pub async fn get(&self, id: i64) -> Result<Course, ApiError> {
        self.api.get(&format!("{}/{}", COURSES_PATH, id)).await
    }

    pub async fn update(&self, id: i64, req: &UpdateCourseRequest) -> Result<Course, ApiError> {
        forms::validate(req)?;
        self.api.patch(&format!("{}/{}", COURSES_PATH, id), req).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", COURSES_PATH, id)).await?;
        info!("Deleted course {}", id);
        Ok(())
    }
}
