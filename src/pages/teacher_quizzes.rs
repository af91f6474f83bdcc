use crate::error::ApiError;
use crate::forms::FormState;
use crate::list::{Filters, ListController};
use crate::models::{NewQuizRequest, Quiz, Role};
use crate::mutation::{Confirm, DeleteOutcome};
use crate::services::QuizService;
use crate::services::quiz_service::QUIZZES_PATH;
use crate::session::AppContext;

pub struct TeacherQuizzes {
    pub course_instance_id: i64,
    pub list: ListController<Quiz>,
    quizzes: QuizService,
}

impl TeacherQuizzes {
    pub async fn open(ctx: &AppContext, course_instance_id: i64) -> Result<Self, ApiError> {
        ctx.require_role(&[Role::Teacher, Role::Admin])?;
        let mut filters = Filters::new();
        filters.set("courseInstanceId", &course_instance_id.to_string());
        let list = ListController::with_filters(
            ctx.api().clone(),
            QUIZZES_PATH,
            ctx.config().page_size,
            filters,
        );
        list.load(0).await;
        Ok(Self {
            course_instance_id,
            list,
            quizzes: QuizService::new(ctx.api().clone()),
        })
    }

    pub async fn create_quiz(&self, form: &mut FormState, req: &NewQuizRequest) -> Option<Quiz> {
        let created = form.submit(req, || self.quizzes.create(req)).await?;
        self.list.load(0).await;
        Some(created)
    }

    pub async fn delete_quiz(&self, id: i64, confirm: &dyn Confirm) -> Result<DeleteOutcome, ApiError> {
        if !confirm.confirm("Delete this quiz?") {
            return Ok(DeleteOutcome::Declined);
        }
        self.quizzes.delete(id).await?;
        self.list.reload_after_removal().await;
        Ok(DeleteOutcome::Deleted)
    }
}
