// src/models/answer.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use super::validate_not_blank;

/// Represents the 'answer' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
}

/// DTO for creating or rewording an answer.
#[derive(Debug, Deserialize, Validate)]
pub struct AnswerRequest {
    #[validate(
        length(min = 1, max = 1000, message = "Text must be between 1 and 1000 characters."),
        custom(function = validate_not_blank, message = "Text must not be blank.")
    )]
    pub text: String,
}
