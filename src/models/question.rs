// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use super::validate_not_blank;

/// Represents the 'question' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,

    /// Nullable pointer into 'answer'. Must reference an answer of this question.
    pub correct_answer_id: Option<i64>,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(
        length(min = 1, max = 1000, message = "Text must be between 1 and 1000 characters."),
        custom(function = validate_not_blank, message = "Text must not be blank.")
    )]
    pub text: String,
}

/// DTO for updating a question. Omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_has_changes))]
pub struct UpdateQuestionRequest {
    #[validate(
        length(min = 1, max = 1000, message = "Text must be between 1 and 1000 characters."),
        custom(function = validate_not_blank, message = "Text must not be blank.")
    )]
    pub text: Option<String>,
    pub correct_answer_id: Option<i64>,
}

fn validate_has_changes(req: &UpdateQuestionRequest) -> Result<(), validator::ValidationError> {
    if req.text.is_none() && req.correct_answer_id.is_none() {
        let mut err = validator::ValidationError::new("nothing_to_update");
        err.message = Some("Either text or correctAnswerId must be provided.".into());
        return Err(err);
    }
    Ok(())
}
