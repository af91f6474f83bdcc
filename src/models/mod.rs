pub mod attachment;
pub mod auth;
pub mod content;
pub mod course;
pub mod course_instance;
pub mod enrollment;
pub mod quiz;
pub mod user;

pub use attachment::Attachment;
pub use auth::{LoginRequest, LoginResponse};
pub use content::{Content, ContentStatus, ContentType, NewContentRequest, UpdateContentRequest};
pub use course::{Course, NewCourseRequest, UpdateCourseRequest};
pub use course_instance::{CourseInstance, NewCourseInstanceRequest};
pub use enrollment::{BulkEnrollRequest, BulkEnrollResult, Enrollment};
pub use quiz::{NewQuizRequest, Quiz, QuizQuestion};
pub use user::{NewUserRequest, Role, UpdateUserRequest, User, UserStatus};

/// Entities the list layer can patch or remove by id.
pub trait Identified {
    fn id(&self) -> i64;
}

/// ACTIVE/INACTIVE lifecycle shared by users, courses and course instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActiveStatus {
    Active,
    Inactive,
}

impl ActiveStatus {
    pub fn toggled(self) -> Self {
        match self {
            ActiveStatus::Active => ActiveStatus::Inactive,
            ActiveStatus::Inactive => ActiveStatus::Active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActiveStatus::Active => "ACTIVE",
            ActiveStatus::Inactive => "INACTIVE",
        }
    }
}
