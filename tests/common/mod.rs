#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use lms_client::client::{ApiRequest, RawResponse, Transport};
use lms_client::models::{ActiveStatus, Role, User};
use lms_client::session::LOGIN_PATH;
use lms_client::{ApiError, AppContext, ClientConfig};
use reqwest::Method;
use serde::Serialize;
use serde_json::json;

type Handler = Box<dyn Fn(&ApiRequest) -> Result<RawResponse, ApiError> + Send + Sync>;

/// Records every request and answers through a closure.
///
/// `/auth/login` is answered here: the role is taken from the email's
/// local part (admin@…, teacher@…, anything else is a student).
pub struct FakeTransport {
    requests: Mutex<Vec<ApiRequest>>,
    delays: Mutex<VecDeque<Duration>>,
    handler: Handler,
}

impl FakeTransport {
    pub fn new<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&ApiRequest) -> Result<RawResponse, ApiError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            delays: Mutex::new(VecDeque::new()),
            handler: Box::new(handler),
        })
    }

    /// Queues response latencies, consumed one per request.
    pub fn delay_next(&self, delays: &[Duration]) {
        self.delays.lock().unwrap().extend(delays.iter().copied());
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests other than the login call.
    pub fn api_requests(&self) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path != LOGIN_PATH)
            .collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last(&self) -> ApiRequest {
        self.api_requests().last().cloned().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if request.method == Method::POST && request.path == LOGIN_PATH {
            return login_reply(&request);
        }
        (self.handler)(&request)
    }
}

fn login_reply(request: &ApiRequest) -> Result<RawResponse, ApiError> {
    let email = match &request.body {
        lms_client::client::RequestBody::Json(body) => body["email"].as_str().unwrap_or_default().to_string(),
        _ => String::new(),
    };
    let role = if email.starts_with("admin") {
        Role::Admin
    } else if email.starts_with("teacher") {
        Role::Teacher
    } else {
        Role::Student
    };
    ok(json!({
        "accessToken": format!("token-{}", email),
        "user": user_with_role(1, role, ActiveStatus::Active),
    }))
}

pub fn ok<T: Serialize>(data: T) -> Result<RawResponse, ApiError> {
    Ok(RawResponse::new(
        200,
        json!({ "success": true, "data": data }).to_string(),
    ))
}

pub fn fail(status: u16, message: &str) -> Result<RawResponse, ApiError> {
    Ok(RawResponse::new(
        status,
        json!({ "success": false, "message": message }).to_string(),
    ))
}

pub fn page_of<T: Serialize>(all: Vec<T>, request: &ApiRequest) -> Result<RawResponse, ApiError> {
    let page = request
        .query_value("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);
    let size = request
        .query_value("size")
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    ok(lms_client::client::PageResponse::from_slice(all, page, size))
}

pub fn user(id: i64, status: ActiveStatus) -> User {
    user_with_role(id, Role::Student, status)
}

pub fn user_with_role(id: i64, role: Role, status: ActiveStatus) -> User {
    User {
        id,
        first_name: format!("An{}", id),
        last_name: "Nguyen".to_string(),
        email: format!("user{}@lms.test", id),
        role,
        status,
    }
}

pub fn users(count: i64) -> Vec<User> {
    (1..=count).map(|id| user(id, ActiveStatus::Active)).collect()
}

pub fn config() -> ClientConfig {
    ClientConfig::new("http://lms.test/api")
}

pub fn context(transport: Arc<FakeTransport>) -> AppContext {
    AppContext::new(config(), transport)
}

pub async fn signed_in(transport: Arc<FakeTransport>, role: Role) -> AppContext {
    let mut ctx = context(transport);
    let email = match role {
        Role::Admin => "admin@lms.test",
        Role::Teacher => "teacher@lms.test",
        Role::Student => "student@lms.test",
    };
    ctx.sign_in(email, "secret123").await.expect("sign in");
    ctx
}
