//! One controller per dashboard list page.

pub mod admin_course_instances;
pub mod admin_courses;
pub mod admin_enroll_students;
pub mod admin_users;
pub mod student_courses;
pub mod teacher_contents;
pub mod teacher_quizzes;

pub use admin_course_instances::AdminCourseInstances;
pub use admin_courses::AdminCoursesList;
pub use admin_enroll_students::AdminEnrollStudents;
pub use admin_users::AdminUsers;
pub use student_courses::StudentCourses;
pub use teacher_contents::TeacherContents;
pub use teacher_quizzes::TeacherQuizzes;

pub const KEYWORD: &str = "keyword";
