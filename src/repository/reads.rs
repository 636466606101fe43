// src/repository/reads.rs

use sqlx::SqliteConnection;

use crate::{
    models::{answer::Answer, question::Question, quiz::{Quiz, QuizAggregate}},
    services::aggregate::assemble,
};

/// Lists every quiz as a plain summary. No child rows are read.
pub async fn list_quizzes(conn: &mut SqliteConnection) -> Result<Vec<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>("SELECT id, title FROM quiz ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

pub async fn find_quiz(conn: &mut SqliteConnection, quiz_id: i64) -> Result<Option<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>("SELECT id, title FROM quiz WHERE id = ?")
        .bind(quiz_id)
        .fetch_optional(&mut *conn)
        .await
}

/// Loads a quiz with its questions and answers.
///
/// Returns `Ok(None)` when the quiz does not exist, which is distinct from a
/// quiz that has no questions. Pass a transaction to read all three row sets
/// from one snapshot.
pub async fn load_quiz_aggregate(
    conn: &mut SqliteConnection,
    quiz_id: i64,
) -> Result<Option<QuizAggregate>, sqlx::Error> {
    let Some(quiz) = find_quiz(conn, quiz_id).await? else {
        return Ok(None);
    };

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, quiz_id, text, correct_answer_id
        FROM question
        WHERE quiz_id = ?
        ORDER BY id
        "#,
    )
    .bind(quiz_id)
    .fetch_all(&mut *conn)
    .await?;

    let answers = sqlx::query_as::<_, Answer>(
        r#"
        SELECT a.id, a.question_id, a.text
        FROM answer a
        INNER JOIN question q ON a.question_id = q.id
        WHERE q.quiz_id = ?
        ORDER BY a.id
        "#,
    )
    .bind(quiz_id)
    .fetch_all(&mut *conn)
    .await?;

    tracing::debug!(
        quiz_id,
        questions = questions.len(),
        answers = answers.len(),
        "Loaded quiz rows"
    );

    Ok(Some(assemble(quiz, questions, answers)))
}
