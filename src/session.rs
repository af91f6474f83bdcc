use std::sync::Arc;

use tracing::info;

use crate::client::{ApiClient, Transport};
use crate::config::ClientConfig;
use crate::error::{ApiError, FALLBACK_UNAUTHORIZED};
use crate::forms;
use crate::models::{LoginRequest, LoginResponse, Role, User};

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Admin,
    Teacher,
    Student,
}

impl Dashboard {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Dashboard::Admin,
            Role::Teacher => Dashboard::Teacher,
            Role::Student => Dashboard::Student,
        }
    }

    pub fn home_path(self) -> &'static str {
        match self {
            Dashboard::Admin => "/admin/users",
            Dashboard::Teacher => "/teacher/course-instances",
            Dashboard::Student => "/student/courses",
        }
    }
}

/// Application-wide context, created at app start and handed to every page.
///
/// Holds what would otherwise be ambient globals: the signed-in user and
/// the sidebar state. `sign_out` tears both down.
pub struct AppContext {
    api: ApiClient,
    config: ClientConfig,
    session: Option<Session>,
    sidebar_expanded: bool,
}

impl AppContext {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            api: ApiClient::new(transport),
            config,
            session: None,
            sidebar_expanded: true,
        }
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ApiError> {
        let api = ApiClient::from_config(&config)?;
        Ok(Self {
            api,
            config,
            session: None,
            sidebar_expanded: true,
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<&Session, ApiError> {
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        forms::validate(&req)?;

        let response: LoginResponse = self.api.post(LOGIN_PATH, &req).await?;
        self.api.set_token(Some(response.access_token.clone())).await;
        info!(
            "Signed in as {} ({})",
            response.user.email,
            response.user.role.as_str()
        );

        let session = self.session.insert(Session {
            token: response.access_token,
            user: response.user,
        });
        Ok(&*session)
    }

    pub async fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            info!("Signed out {}", session.user.email);
        }
        self.api.set_token(None).await;
        self.sidebar_expanded = true;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn dashboard(&self) -> Option<Dashboard> {
        self.current_user().map(|u| Dashboard::for_role(u.role))
    }

    /// Role guard for a dashboard page.
    pub fn require_role(&self, allowed: &[Role]) -> Result<&User, ApiError> {
        let user = self
            .current_user()
            .ok_or_else(|| ApiError::Unauthorized(FALLBACK_UNAUTHORIZED.to_string()))?;
        if allowed.contains(&user.role) {
            Ok(user)
        } else {
            Err(ApiError::Forbidden(format!(
                "This page is not available for the {} role.",
                user.role.as_str()
            )))
        }
    }

    pub fn sidebar_expanded(&self) -> bool {
        self.sidebar_expanded
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_expanded = !self.sidebar_expanded;
        self.sidebar_expanded
    }
}
