// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use super::validate_not_blank;

/// Represents the 'quiz' table in the database.
/// Also serves as the summary entry of the collection listing.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
}

/// Fully assembled quiz: the quiz row, its questions in store order,
/// each question's answers, and navigation links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAggregate {
    pub id: i64,
    pub title: String,
    pub questions: Vec<QuestionItem>,
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionItem {
    pub id: i64,
    pub text: String,
    pub answers: Vec<AnswerItem>,

    /// `None` until a correct answer has been configured.
    pub correct_answer_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerItem {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
    pub questions: String,
}

impl Links {
    pub fn for_quiz(quiz_id: i64) -> Self {
        Self {
            self_link: format!("/api/quizzes/{}", quiz_id),
            questions: format!("/api/quizzes/{}/questions", quiz_id),
        }
    }
}

/// DTO for creating a new quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be between 1 and 200 characters."),
        custom(function = validate_not_blank, message = "Title must not be blank.")
    )]
    pub title: String,
}

/// DTO for renaming a quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuizRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be between 1 and 200 characters."),
        custom(function = validate_not_blank, message = "Title must not be blank.")
    )]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_titles_are_rejected() {
        assert!(CreateQuizRequest { title: String::new() }.validate().is_err());
        assert!(CreateQuizRequest { title: "   ".into() }.validate().is_err());
        assert!(CreateQuizRequest { title: "Capitals".into() }.validate().is_ok());
    }

    #[test]
    fn aggregate_serializes_with_camel_case_and_self_link() {
        let aggregate = QuizAggregate {
            id: 7,
            title: "Rivers".into(),
            questions: vec![QuestionItem {
                id: 1,
                text: "Longest?".into(),
                answers: vec![],
                correct_answer_id: None,
            }],
            links: Links::for_quiz(7),
        };
        let value = serde_json::to_value(&aggregate).unwrap();
        assert_eq!(value["links"]["self"], "/api/quizzes/7");
        assert_eq!(value["links"]["questions"], "/api/quizzes/7/questions");
        assert!(value["questions"][0]["correctAnswerId"].is_null());
        assert_eq!(value["questions"][0]["answers"], serde_json::json!([]));
    }
}
