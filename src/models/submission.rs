// src/models/submission.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// DTO for submitting a quiz attempt.
#[derive(Debug, Default, Deserialize)]
pub struct QuizSubmission {
    /// Key: question id. Value: chosen answer id.
    /// Unanswered questions are simply absent.
    #[serde(default)]
    pub answers: HashMap<i64, i64>,
}

/// Outcome of scoring a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: i64,
}
