// src/services/aggregate.rs

use std::collections::HashMap;

use crate::models::{
    answer::Answer,
    question::Question,
    quiz::{AnswerItem, Links, QuestionItem, Quiz, QuizAggregate},
};

/// Builds a quiz aggregate from three independently fetched row sets.
///
/// Questions keep the order the store returned them in. Answers are grouped
/// by owning question, preserving their relative order; a question with no
/// answers gets an empty list. Answers whose question is not in `questions`
/// are dropped.
pub fn assemble(quiz: Quiz, questions: Vec<Question>, answers: Vec<Answer>) -> QuizAggregate {
    let mut grouped: HashMap<i64, Vec<AnswerItem>> = HashMap::new();
    for answer in answers {
        grouped
            .entry(answer.question_id)
            .or_default()
            .push(AnswerItem {
                id: answer.id,
                text: answer.text,
            });
    }

    let questions = questions
        .into_iter()
        .map(|question| QuestionItem {
            answers: grouped.remove(&question.id).unwrap_or_default(),
            id: question.id,
            text: question.text,
            correct_answer_id: question.correct_answer_id,
        })
        .collect();

    QuizAggregate {
        links: Links::for_quiz(quiz.id),
        id: quiz.id,
        title: quiz.title,
        questions,
    }
}
