use serde::Serialize;
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms;
use crate::models::{NewUserRequest, UpdateUserRequest, User, UserStatus};

pub const USERS_PATH: &str = "/users";

#[derive(Serialize)]
struct StatusBody {
    status: UserStatus,
}

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, req: &NewUserRequest) -> Result<User, ApiError> {
        forms::validate(req)?;
        let user: User = self.api.post(USERS_PATH, req).await?;
        info!("Created user {} ({})", user.id, user.role.as_str());
        Ok(user)
    }

    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        self.api.get(&format!("{}/{}", USERS_PATH, id)).await
    }

    pub async fn update_profile(&self, id: i64, req: &UpdateUserRequest) -> Result<User, ApiError> {
        forms::validate(req)?;
        self.api.patch(&format!("{}/{}", USERS_PATH, id), req).await
    }

    pub async fn set_status(&self, id: i64, status: UserStatus) -> Result<User, ApiError> {
        let user: User = self
            .api
            .patch(&format!("{}/{}/status", USERS_PATH, id), &StatusBody { status })
            .await?;
        info!("User {} is now {}", id, user.status.as_str());
        Ok(user)
    }

    /// Flips ACTIVE/INACTIVE based on the status currently displayed.
    pub async fn toggle_status(&self, user: &User) -> Result<User, ApiError> {
        self.set_status(user.id, user.status.toggled()).await
    }
}
