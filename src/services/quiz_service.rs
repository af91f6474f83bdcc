use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms;
use crate::models::{NewQuizRequest, Quiz};

pub const QUIZZES_PATH: &str = "/quizzes";

#[derive(Clone)]
pub struct QuizService {
    api: ApiClient,
}

impl QuizService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, req: &NewQuizRequest) -> Result<Quiz, ApiError> {
        forms::validate(req)?;
        let quiz: Quiz = self.api.post(QUIZZES_PATH, req).await?;
        info!(
            "Created quiz {} with {} questions ({} points)",
            quiz.id,
            quiz.questions.len(),
            quiz.total_points()
        );
        Ok(quiz)
    }

    pub async fn get(&self, id: i64) -> Result<Quiz, ApiError> {
        self.api.get(&format!("{}/{}", QUIZZES_PATH, id)).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("{}/{}", QUIZZES_PATH, id)).await
    }
}
