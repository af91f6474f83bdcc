use crate::error::ApiError;
use crate::forms::FormState;
use crate::list::{ListController, LoadOutcome};
use crate::models::{ActiveStatus, CourseInstance, NewCourseInstanceRequest, Role};
use crate::services::CourseInstanceService;
use crate::services::course_instance_service::COURSE_INSTANCES_PATH;
use crate::session::AppContext;

pub struct AdminCourseInstances {
    pub list: ListController<CourseInstance>,
    instances: CourseInstanceService,
}

impl AdminCourseInstances {
    pub async fn open(ctx: &AppContext) -> Result<Self, ApiError> {
        ctx.require_role(&[Role::Admin])?;
        let list = ListController::new(
            ctx.api().clone(),
            COURSE_INSTANCES_PATH,
            ctx.config().page_size,
        );
        list.load(0).await;
        Ok(Self {
            list,
            instances: CourseInstanceService::new(ctx.api().clone()),
        })
    }

    pub async fn filter_course(&self, course_id: Option<i64>) -> LoadOutcome {
        let value = course_id.map(|id| id.to_string()).unwrap_or_default();
        self.list.set_filter("courseId", &value).await
    }

    pub async fn filter_status(&self, status: Option<ActiveStatus>) -> LoadOutcome {
        self.list
            .set_filter("status", status.map(ActiveStatus::as_str).unwrap_or_default())
            .await
    }

    pub async fn create_instance(
        &self,
        form: &mut FormState,
        req: &NewCourseInstanceRequest,
    ) -> Option<CourseInstance> {
        let created = form.submit(req, || self.instances.create(req)).await?;
        self.list.load(0).await;
        Some(created)
    }

    /// Archiving can drop the row out of the active filter, so the whole
    /// page is refetched rather than patched.
    pub async fn archive(&self, id: i64) -> Result<CourseInstance, ApiError> {
        let instance = self.instances.archive(id).await?;
        self.list.reload_after_removal().await;
        Ok(instance)
    }

    pub async fn restore(&self, id: i64) -> Result<CourseInstance, ApiError> {
        let instance = self.instances.restore(id).await?;
        self.list.reload_after_removal().await;
        Ok(instance)
    }
}
