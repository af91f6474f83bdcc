use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    #[serde(default = "default_points")]
    pub points: u32,
}

fn default_points() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: i64,
    pub course_instance_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time_limit_minutes: Option<u32>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }
}

impl Identified for Quiz {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewQuizRequest {
    #[validate(range(min = 1, message = "Please select a course instance"))]
    pub course_instance_id: i64,
    #[validate(length(min = 1, max = 255, message = "Quiz title is required"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 300, message = "Time limit must be between 1 and 300 minutes"))]
    pub time_limit_minutes: Option<u32>,
    #[validate(
        length(min = 1, message = "Add at least one question"),
        custom(function = "validate_questions")
    )]
    pub questions: Vec<QuizQuestion>,
}

fn validate_questions(questions: &[QuizQuestion]) -> Result<(), ValidationError> {
    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;
        let problem = if question.prompt.trim().is_empty() {
            Some(format!("Question {} needs a prompt", number))
        } else if question.options.iter().filter(|o| !o.trim().is_empty()).count() < 2 {
            Some(format!("Question {} needs at least two options", number))
        } else if question.correct_option >= question.options.len() {
            Some(format!("Question {} has no valid correct answer", number))
        } else if question.points == 0 {
            Some(format!("Question {} must be worth at least one point", number))
        } else {
            None
        };

        if let Some(message) = problem {
            let mut err = ValidationError::new("question");
            err.message = Some(message.into());
            return Err(err);
        }
    }
    Ok(())
}
