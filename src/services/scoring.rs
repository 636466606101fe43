// src/services/scoring.rs

use std::collections::HashMap;

use crate::models::{quiz::QuizAggregate, submission::QuizResult};

/// Counts the questions whose submitted answer matches the configured one.
///
/// Walks the quiz's own questions, so submission entries for unknown
/// questions are never looked at. Unanswered questions and questions with
/// no correct answer configured contribute nothing.
pub fn score(aggregate: &QuizAggregate, answers: &HashMap<i64, i64>) -> QuizResult {
    let score = aggregate
        .questions
        .iter()
        .filter(|question| match (answers.get(&question.id), question.correct_answer_id) {
            (Some(submitted), Some(correct)) => *submitted == correct,
            _ => false,
        })
        .count();

    QuizResult {
        score: score as i64,
    }
}
