pub mod content_service;
pub mod course_instance_service;
pub mod course_service;
pub mod enrollment_service;
pub mod quiz_service;
pub mod user_service;

pub use content_service::ContentService;
pub use course_instance_service::CourseInstanceService;
pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use quiz_service::QuizService;
pub use user_service::UserService;
