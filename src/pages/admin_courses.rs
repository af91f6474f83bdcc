use crate::error::ApiError;
use crate::forms::FormState;
use crate::list::{ListController, LoadOutcome, SearchBox};
use crate::models::{ActiveStatus, Course, NewCourseRequest, Role, UpdateCourseRequest};
use crate::mutation::{Confirm, DeleteOutcome};
use crate::services::CourseService;
use crate::services::course_service::COURSES_PATH;
use crate::session::AppContext;

use super::KEYWORD;

pub struct AdminCoursesList {
    pub list: ListController<Course>,
    search: SearchBox,
    courses: CourseService,
}

impl AdminCoursesList {
    pub async fn open(ctx: &AppContext) -> Result<Self, ApiError> {
        ctx.require_role(&[Role::Admin])?;
        let config = ctx.config();
        let list = ListController::new(ctx.api().clone(), COURSES_PATH, config.page_size);
        let search = SearchBox::attach(&list, KEYWORD, config.search_debounce);
        list.load(0).await;
        Ok(Self {
            list,
            search,
            courses: CourseService::new(ctx.api().clone()),
        })
    }

    pub fn search(&self, text: &str) {
        self.search.input(text);
    }

    pub async fn filter_status(&self, status: Option<ActiveStatus>) -> LoadOutcome {
        self.list
            .set_filter("status", status.map(ActiveStatus::as_str).unwrap_or_default())
            .await
    }

    pub async fn create_course(&self, form: &mut FormState, req: &NewCourseRequest) -> Option<Course> {
        let created = form.submit(req, || self.courses.create(req)).await?;
        self.list.load(0).await;
        Some(created)
    }

    pub async fn update_course(
        &self,
        form: &mut FormState,
        id: i64,
        req: &UpdateCourseRequest,
    ) -> Option<Course> {
        let updated = form.submit(req, || self.courses.update(id, req)).await?;
        self.list.patch_item(updated.clone()).await;
        Some(updated)
    }

    pub async fn delete_course(&self, id: i64, confirm: &dyn Confirm) -> Result<DeleteOutcome, ApiError> {
        let title = self
            .list
            .find(id)
            .await
            .map(|c| c.title)
            .unwrap_or_else(|| format!("#{}", id));
        if !confirm.confirm(&format!("Delete course \"{}\"?", title)) {
            return Ok(DeleteOutcome::Declined);
        }
        self.courses.delete(id).await?;
        self.list.reload_after_removal().await;
        Ok(DeleteOutcome::Deleted)
    }
}
