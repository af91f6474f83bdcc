mod common;

use std::sync::{Arc, Mutex};

use common::{FakeTransport, fail, ok, page_of, signed_in, user};
use lms_client::ApiError;
use lms_client::client::RequestBody;
use lms_client::forms::FormState;
use lms_client::models::{
    ActiveStatus, Attachment, Content, ContentStatus, ContentType, CourseInstance, Role,
};
use lms_client::mutation::DeleteOutcome;
use lms_client::pages::{AdminEnrollStudents, StudentCourses, TeacherContents, TeacherQuizzes};
use reqwest::Method;
use serde_json::json;

fn instance(id: i64) -> CourseInstance {
    CourseInstance {
        id,
        course_id: 2,
        course_title: Some("Lap trinh web".to_string()),
        course_code: Some("IT402".to_string()),
        teacher_id: Some(9),
        teacher_name: None,
        status: ActiveStatus::Active,
    }
}

fn content(id: i64, course_instance_id: i64) -> Content {
    Content {
        id,
        course_instance_id,
        title: format!("Tuan {}", id),
        description: None,
        content_type: ContentType::Lecture,
        status: ContentStatus::Published,
        order_index: id as i32,
        created_at: None,
        updated_at: None,
    }
}

fn attachment(id: i64, owner_id: i64) -> Attachment {
    Attachment {
        id,
        owner_id,
        file_url: format!("https://files.lms.test/{}", id),
        file_name: format!("slide-{}.pptx", id),
        file_size: 4096,
        file_type: None,
        uploaded_at: None,
    }
}

fn enroll_transport() -> Arc<FakeTransport> {
    FakeTransport::new(|req| {
        if req.method == Method::GET && req.path == "/course-instances/3" {
            ok(instance(3))
        } else if req.method == Method::GET && req.path == "/users" {
            page_of(vec![user(1, ActiveStatus::Active), user(2, ActiveStatus::Active)], req)
        } else if req.method == Method::POST && req.path == "/enrollments/bulk" {
            ok(json!({
                "enrolled": [{ "id": 40, "studentId": 1, "courseInstanceId": 3 }],
                "skippedStudentIds": [2]
            }))
        } else {
            fail(404, "Not found")
        }
    })
}

#[tokio::test]
async fn enroll_page_lists_students_only() {
    let transport = enroll_transport();
    let ctx = signed_in(transport.clone(), Role::Admin).await;
    let page = AdminEnrollStudents::open(&ctx, 3).await.unwrap();

    assert_eq!(page.instance.course_code.as_deref(), Some("IT402"));
    let list_request = transport.last();
    assert_eq!(list_request.path, "/users");
    assert_eq!(list_request.query_value("role"), Some("STUDENT"));
    assert_eq!(page.students.items().await.len(), 2);
}

#[tokio::test]
async fn enrolling_nobody_is_rejected_locally() {
    let transport = enroll_transport();
    let ctx = signed_in(transport.clone(), Role::Admin).await;
    let mut page = AdminEnrollStudents::open(&ctx, 3).await.unwrap();

    let mut form = FormState::new();
    assert!(page.enroll_selected(&mut form).await.is_none());

    assert_eq!(form.error.as_deref(), Some("Select at least one student"));
    assert_eq!(transport.count(Method::POST, "/enrollments/bulk"), 0);
}

#[tokio::test]
async fn selected_students_are_enrolled_in_one_request() {
    let transport = enroll_transport();
    let ctx = signed_in(transport.clone(), Role::Admin).await;
    let mut page = AdminEnrollStudents::open(&ctx, 3).await.unwrap();

    assert!(page.toggle_selection(2));
    assert!(page.toggle_selection(1));
    assert!(!page.toggle_selection(2));
    assert!(page.toggle_selection(2));

    let mut form = FormState::new();
    let result = page.enroll_selected(&mut form).await.unwrap();

    assert_eq!(result.enrolled.len(), 1);
    assert_eq!(result.skipped_student_ids, vec![2]);
    assert!(page.selected().is_empty());

    let post = transport
        .requests()
        .into_iter()
        .find(|r| r.path == "/enrollments/bulk")
        .unwrap();
    let RequestBody::Json(body) = post.body else {
        panic!("bulk enroll should send json");
    };
    assert_eq!(body, json!({ "courseInstanceId": 3, "studentIds": [1, 2] }));
}

#[tokio::test]
async fn student_cannot_open_the_enroll_page() {
    let ctx = signed_in(enroll_transport(), Role::Student).await;
    let err = AdminEnrollStudents::open(&ctx, 3).await.err().unwrap();
    assert!(matches!(err, ApiError::Forbidden(_)));
}

#[tokio::test]
async fn student_courses_come_from_own_endpoint() {
    let transport = FakeTransport::new(|req| page_of(vec![instance(3), instance(4)], req));
    let ctx = signed_in(transport.clone(), Role::Student).await;
    let page = StudentCourses::open(&ctx).await.unwrap();

    assert_eq!(transport.last().path, "/students/me/course-instances");
    assert_eq!(page.list.items().await.len(), 2);
}

fn contents_transport(store: Arc<Mutex<Vec<Content>>>) -> Arc<FakeTransport> {
    FakeTransport::new(move |req| {
        if req.method == Method::GET && req.path == "/contents" {
            page_of(store.lock().unwrap().clone(), req)
        } else if req.method == Method::GET && req.path == "/contents/5/attachments" {
            ok(vec![attachment(11, 5), attachment(12, 5)])
        } else if req.method == Method::DELETE && req.path == "/attachments/11" {
            fail(500, "Storage unavailable")
        } else if req.method == Method::DELETE && req.path == "/attachments/12" {
            ok(json!(null))
        } else if req.method == Method::GET && req.path == "/contents/7/attachments" {
            fail(503, "Service unavailable")
        } else if req.method == Method::DELETE
            && (req.path == "/contents/5" || req.path == "/contents/7")
        {
            let id: i64 = req.path.trim_start_matches("/contents/").parse().unwrap();
            store.lock().unwrap().retain(|c| c.id != id);
            ok(json!(null))
        } else {
            fail(404, "Not found")
        }
    })
}

#[tokio::test]
async fn content_list_is_scoped_to_its_instance() {
    let store = Arc::new(Mutex::new(vec![content(5, 8)]));
    let transport = contents_transport(store);
    let ctx = signed_in(transport.clone(), Role::Teacher).await;
    let page = TeacherContents::open(&ctx, 8).await.unwrap();

    page.filter_type(Some(ContentType::Lecture)).await;

    let last = transport.last();
    assert_eq!(last.query_value("courseInstanceId"), Some("8"));
    assert_eq!(last.query_value("type"), Some("LECTURE"));
    assert_eq!(last.query_value("page"), Some("0"));
}

#[tokio::test]
async fn deleting_selected_content_cascades_over_its_attachments() {
    let store = Arc::new(Mutex::new(vec![content(5, 8), content(6, 8)]));
    let transport = contents_transport(store.clone());
    let ctx = signed_in(transport.clone(), Role::Teacher).await;
    let mut page = TeacherContents::open(&ctx, 8).await.unwrap();

    assert_eq!(page.select(5).await.unwrap().len(), 2);
    let report = page
        .delete_content(5, &|_: &str| true)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.deleted_children, vec![12]);
    assert_eq!(report.failed_children.len(), 1);
    assert_eq!(report.failed_children[0].0, 11);
    assert!(!report.is_clean());
    assert_eq!(transport.count(Method::DELETE, "/contents/5"), 1);
    // fetched again at delete time, not taken from the open panel
    assert_eq!(transport.count(Method::GET, "/contents/5/attachments"), 2);
    assert!(page.attachments().is_empty());

    let ids: Vec<i64> = page.list.items().await.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![6]);
}

#[tokio::test]
async fn declined_content_delete_sends_nothing() {
    let store = Arc::new(Mutex::new(vec![content(5, 8)]));
    let transport = contents_transport(store);
    let ctx = signed_in(transport.clone(), Role::Teacher).await;
    let mut page = TeacherContents::open(&ctx, 8).await.unwrap();

    let report = page.delete_content(5, &|_: &str| false).await.unwrap();

    assert!(report.is_none());
    assert_eq!(transport.count(Method::DELETE, "/contents/5"), 0);
    assert_eq!(transport.count(Method::DELETE, "/attachments/11"), 0);
}

#[tokio::test]
async fn content_is_deleted_even_when_its_attachments_cannot_be_listed() {
    let store = Arc::new(Mutex::new(vec![content(6, 8), content(7, 8)]));
    let transport = contents_transport(store.clone());
    let ctx = signed_in(transport.clone(), Role::Teacher).await;
    let mut page = TeacherContents::open(&ctx, 8).await.unwrap();

    let report = page
        .delete_content(7, &|_: &str| true)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.attempted(), 0);
    assert_eq!(transport.count(Method::DELETE, "/contents/7"), 1);
    let ids: Vec<i64> = page.list.items().await.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![6]);
}

#[tokio::test]
async fn quiz_page_follows_the_content_page_roles() {
    let transport = FakeTransport::new(|req| {
        if req.method == Method::DELETE {
            ok(json!(null))
        } else {
            page_of(Vec::<serde_json::Value>::new(), req)
        }
    });
    let admin = signed_in(transport.clone(), Role::Admin).await;
    let page = TeacherQuizzes::open(&admin, 8).await.unwrap();
    assert!(TeacherContents::open(&admin, 8).await.is_ok());

    let outcome = page.delete_quiz(12, &|_: &str| true).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(transport.count(Method::DELETE, "/quizzes/12"), 1);

    let student = signed_in(transport, Role::Student).await;
    assert!(matches!(
        TeacherQuizzes::open(&student, 8).await.err(),
        Some(ApiError::Forbidden(_))
    ));
}
