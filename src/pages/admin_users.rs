use crate::error::{ApiError, FALLBACK_NOT_FOUND};
use crate::forms::FormState;
use crate::list::{ListController, LoadOutcome, SearchBox};
use crate::models::{NewUserRequest, Role, User, UserStatus};
use crate::mutation::InFlight;
use crate::services::UserService;
use crate::services::user_service::USERS_PATH;
use crate::session::AppContext;

use super::KEYWORD;

pub struct AdminUsers {
    pub list: ListController<User>,
    search: SearchBox,
    users: UserService,
    toggling: InFlight,
}

impl AdminUsers {
    pub async fn open(ctx: &AppContext) -> Result<Self, ApiError> {
        ctx.require_role(&[Role::Admin])?;
        let config = ctx.config();
        let list = ListController::new(ctx.api().clone(), USERS_PATH, config.page_size);
        let search = SearchBox::attach(&list, KEYWORD, config.search_debounce);
        list.load(0).await;
        Ok(Self {
            list,
            search,
            users: UserService::new(ctx.api().clone()),
            toggling: InFlight::new(),
        })
    }

    pub fn search(&self, text: &str) {
        self.search.input(text);
    }

    pub async fn filter_role(&self, role: Option<Role>) -> LoadOutcome {
        self.list
            .set_filter("role", role.map(Role::as_str).unwrap_or_default())
            .await
    }

    pub async fn filter_status(&self, status: Option<UserStatus>) -> LoadOutcome {
        self.list
            .set_filter("status", status.map(UserStatus::as_str).unwrap_or_default())
            .await
    }

    pub fn is_toggling(&self, id: i64) -> bool {
        self.toggling.is_pending(id)
    }

    /// Flips the user's status. The row is patched in place, or the page is
    /// reloaded when a status filter could drop it from view.
    ///
    /// `Ok(None)` when a toggle for this user is already in flight.
    pub async fn toggle_status(&self, id: i64) -> Result<Option<User>, ApiError> {
        let Some(_guard) = self.toggling.try_begin(id) else {
            return Ok(None);
        };
        let user = self
            .list
            .find(id)
            .await
            .ok_or_else(|| ApiError::NotFound(FALLBACK_NOT_FOUND.to_string()))?;
        let updated = self.users.toggle_status(&user).await?;
        if self.list.filter("status").await.is_some() {
            // the row may no longer match the status filter
            self.list.reload_after_removal().await;
        } else {
            self.list.patch_item(updated.clone()).await;
        }
        Ok(Some(updated))
    }

    pub async fn create_user(&self, form: &mut FormState, req: &NewUserRequest) -> Option<User> {
        let created = form.submit(req, || self.users.create(req)).await?;
        self.list.load(0).await;
        Some(created)
    }
}
