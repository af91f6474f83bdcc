mod common;

use std::sync::{Arc, Mutex};

use common::{FakeTransport, fail, ok, page_of, signed_in, user};
use lms_client::ApiClient;
use lms_client::client::RequestBody;
use lms_client::models::{ActiveStatus, Attachment, CourseInstance, Role, User};
use lms_client::mutation::{DeleteOutcome, InFlight};
use lms_client::pages::{AdminCourseInstances, AdminCoursesList, AdminUsers};
use lms_client::services::ContentService;
use reqwest::Method;
use serde_json::json;

fn attachment(id: i64, owner_id: i64) -> Attachment {
    Attachment {
        id,
        owner_id,
        file_url: format!("https://files.lms.test/{}.pdf", id),
        file_name: format!("week-{}.pdf", id),
        file_size: 2048,
        file_type: Some("application/pdf".to_string()),
        uploaded_at: None,
    }
}

#[tokio::test]
async fn cascade_issues_every_delete_even_when_first_attachment_fails() {
    let transport = FakeTransport::new(|req| match req.path.as_str() {
        "/attachments/11" => fail(500, "Storage unavailable"),
        _ => ok(json!(null)),
    });
    let service = ContentService::new(ApiClient::new(transport.clone()));

    let report = service
        .delete_with_attachments(5, &[attachment(11, 5), attachment(12, 5)])
        .await
        .unwrap();

    let deletes: Vec<String> = transport
        .requests()
        .into_iter()
        .filter(|r| r.method == Method::DELETE)
        .map(|r| r.path)
        .collect();
    assert_eq!(deletes, vec!["/attachments/11", "/attachments/12", "/contents/5"]);
    assert_eq!(report.attempted(), 2);
    assert_eq!(report.deleted_children, vec![12]);
    assert_eq!(report.failed_children.len(), 1);
    assert_eq!(report.failed_children[0].0, 11);
}

#[tokio::test]
async fn cascade_reports_only_the_parent_failure() {
    let transport = FakeTransport::new(|req| match req.path.as_str() {
        "/contents/5" => fail(404, "Content does not exist"),
        _ => ok(json!(null)),
    });
    let service = ContentService::new(ApiClient::new(transport.clone()));

    let err = service
        .delete_with_attachments(5, &[attachment(11, 5), attachment(12, 5)])
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Content does not exist");
    assert_eq!(transport.count(Method::DELETE, "/attachments/11"), 1);
    assert_eq!(transport.count(Method::DELETE, "/attachments/12"), 1);
}

fn status_store_transport(store: Arc<Mutex<Vec<User>>>) -> Arc<FakeTransport> {
    FakeTransport::new(move |req| {
        let mut users = store.lock().unwrap();
        if req.method == Method::GET && req.path == "/users" {
            let wanted = req.query_value("status");
            let rows: Vec<User> = users
                .iter()
                .filter(|u| wanted.is_none_or(|s| s == u.status.as_str()))
                .cloned()
                .collect();
            return page_of(rows, req);
        }
        if req.method == Method::PATCH && req.path == "/users/3/status" {
            let RequestBody::Json(body) = &req.body else {
                return fail(400, "missing body");
            };
            let status: ActiveStatus = serde_json::from_value(body["status"].clone()).unwrap();
            let target = users.iter_mut().find(|u| u.id == 3).unwrap();
            target.status = status;
            return ok(target.clone());
        }
        fail(404, "not found")
    })
}

#[tokio::test]
async fn toggling_status_twice_restores_the_original() {
    let store = Arc::new(Mutex::new(vec![
        user(2, ActiveStatus::Active),
        user(3, ActiveStatus::Active),
    ]));
    let transport = status_store_transport(store.clone());
    let ctx = signed_in(transport.clone(), Role::Admin).await;
    let page = AdminUsers::open(&ctx).await.unwrap();

    let first = page.toggle_status(3).await.unwrap().unwrap();
    assert_eq!(first.status, ActiveStatus::Inactive);
    assert_eq!(page.list.find(3).await.unwrap().status, ActiveStatus::Inactive);

    let second = page.toggle_status(3).await.unwrap().unwrap();
    assert_eq!(second.status, ActiveStatus::Active);
    assert_eq!(page.list.find(3).await.unwrap().status, ActiveStatus::Active);
    assert_eq!(store.lock().unwrap()[1].status, ActiveStatus::Active);

    // patched in place, no refetch after the initial load
    assert_eq!(transport.count(Method::GET, "/users"), 1);
}

#[tokio::test]
async fn toggled_user_leaves_a_status_filtered_view() {
    let store = Arc::new(Mutex::new(vec![
        user(2, ActiveStatus::Active),
        user(3, ActiveStatus::Active),
    ]));
    let transport = status_store_transport(store.clone());
    let ctx = signed_in(transport.clone(), Role::Admin).await;
    let page = AdminUsers::open(&ctx).await.unwrap();
    page.filter_status(Some(ActiveStatus::Active)).await;

    let updated = page.toggle_status(3).await.unwrap().unwrap();

    assert_eq!(updated.status, ActiveStatus::Inactive);
    let ids: Vec<i64> = page.list.items().await.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(transport.last().query_value("status"), Some("ACTIVE"));
    assert_eq!(transport.count(Method::GET, "/users"), 3);
}

#[tokio::test]
async fn in_flight_guard_rejects_second_toggle() {
    let guards = InFlight::new();
    let first = guards.try_begin(3);
    assert!(first.is_some());
    assert!(guards.try_begin(3).is_none());
    assert!(guards.is_pending(3));
    assert!(guards.try_begin(4).is_some());

    drop(first);
    assert!(!guards.is_pending(3));
    assert!(guards.try_begin(3).is_some());
}

fn instance(id: i64, status: ActiveStatus) -> CourseInstance {
    CourseInstance {
        id,
        course_id: 1,
        course_title: Some("Cau truc du lieu".to_string()),
        course_code: Some("CS201".to_string()),
        teacher_id: Some(9),
        teacher_name: Some("Tran Thi Mai".to_string()),
        status,
    }
}

#[tokio::test]
async fn restoring_an_archived_instance_moves_it_between_filtered_views() {
    let store = Arc::new(Mutex::new(vec![
        instance(1, ActiveStatus::Active),
        instance(2, ActiveStatus::Inactive),
    ]));
    let backend = store.clone();
    let transport = FakeTransport::new(move |req| {
        let mut instances = backend.lock().unwrap();
        if req.method == Method::GET && req.path == "/course-instances" {
            let wanted = req.query_value("status").map(str::to_string);
            let rows: Vec<CourseInstance> = instances
                .iter()
                .filter(|i| wanted.as_deref().is_none_or(|s| s == i.status.as_str()))
                .cloned()
                .collect();
            return page_of(rows, req);
        }
        if req.method == Method::PATCH && req.path == "/course-instances/2/status" {
            let status = match req.query_value("newStatus") {
                Some("ACTIVE") => ActiveStatus::Active,
                _ => ActiveStatus::Inactive,
            };
            let target = instances.iter_mut().find(|i| i.id == 2).unwrap();
            target.status = status;
            return ok(target.clone());
        }
        fail(404, "not found")
    });
    let ctx = signed_in(transport.clone(), Role::Admin).await;
    let page = AdminCourseInstances::open(&ctx).await.unwrap();

    page.filter_status(Some(ActiveStatus::Inactive)).await;
    assert_eq!(page.list.items().await.len(), 1);

    let restored = page.restore(2).await.unwrap();
    assert_eq!(restored.status, ActiveStatus::Active);

    let patch = transport
        .requests()
        .into_iter()
        .find(|r| r.method == Method::PATCH)
        .unwrap();
    assert_eq!(patch.query_value("newStatus"), Some("ACTIVE"));
    assert!(page.list.items().await.is_empty());

    page.filter_status(Some(ActiveStatus::Active)).await;
    let ids: Vec<i64> = page.list.items().await.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let transport = FakeTransport::new(|req| page_of(Vec::<serde_json::Value>::new(), req));
    let ctx = signed_in(transport.clone(), Role::Admin).await;
    let page = AdminCoursesList::open(&ctx).await.unwrap();

    let outcome = page.delete_course(4, &|_: &str| false).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(transport.count(Method::DELETE, "/courses/4"), 0);
}

#[tokio::test]
async fn confirmed_delete_refetches_the_list() {
    let transport = FakeTransport::new(|req| {
        if req.method == Method::DELETE {
            ok(json!(null))
        } else {
            page_of(Vec::<serde_json::Value>::new(), req)
        }
    });
    let ctx = signed_in(transport.clone(), Role::Admin).await;
    let page = AdminCoursesList::open(&ctx).await.unwrap();

    let prompts = Arc::new(Mutex::new(Vec::new()));
    let seen = prompts.clone();
    let confirm = move |prompt: &str| {
        seen.lock().unwrap().push(prompt.to_string());
        true
    };
    let outcome = page.delete_course(4, &confirm).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(prompts.lock().unwrap().as_slice(), ["Delete course \"#4\"?"]);
    assert_eq!(transport.count(Method::DELETE, "/courses/4"), 1);
    assert_eq!(transport.count(Method::GET, "/courses"), 2);
}
