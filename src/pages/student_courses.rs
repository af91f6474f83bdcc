use crate::error::ApiError;
use crate::list::{ListController, SearchBox};
use crate::models::{CourseInstance, Role};
use crate::services::enrollment_service::MY_COURSE_INSTANCES_PATH;
use crate::session::AppContext;

use super::KEYWORD;

pub struct StudentCourses {
    pub list: ListController<CourseInstance>,
    search: SearchBox,
}

impl StudentCourses {
    pub async fn open(ctx: &AppContext) -> Result<Self, ApiError> {
        ctx.require_role(&[Role::Student])?;
        let config = ctx.config();
        let list = ListController::new(
            ctx.api().clone(),
            MY_COURSE_INSTANCES_PATH,
            config.page_size,
        );
        let search = SearchBox::attach(&list, KEYWORD, config.search_debounce);
        list.load(0).await;
        Ok(Self { list, search })
    }

    pub fn search(&self, text: &str) {
        self.search.input(text);
    }
}
