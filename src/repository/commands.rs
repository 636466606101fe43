// src/repository/commands.rs

//! Mutations on quiz, question and answer rows.
//!
//! Inputs are validated before touching the store. Child rows are addressed
//! through their parents, and a statement that matches zero rows is reported
//! as `AppError::NotFound` with the store left unchanged.

use sqlx::{Connection, SqliteConnection, sqlite::SqliteQueryResult};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        answer::AnswerRequest,
        question::{CreateQuestionRequest, UpdateQuestionRequest},
        quiz::{CreateQuizRequest, UpdateQuizRequest},
    },
};

fn ensure_affected(result: SqliteQueryResult) -> Result<(), AppError> {
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

/// Inserts a quiz and returns its new id.
pub async fn create_quiz(
    conn: &mut SqliteConnection,
    payload: &CreateQuizRequest,
) -> Result<i64, AppError> {
    payload.validate()?;

    let id = sqlx::query("INSERT INTO quiz (title) VALUES (?)")
        .bind(&payload.title)
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

    tracing::info!(quiz_id = id, "Quiz created");
    Ok(id)
}

pub async fn update_quiz(
    conn: &mut SqliteConnection,
    quiz_id: i64,
    payload: &UpdateQuizRequest,
) -> Result<(), AppError> {
    payload.validate()?;

    let result = sqlx::query("UPDATE quiz SET title = ? WHERE id = ?")
        .bind(&payload.title)
        .bind(quiz_id)
        .execute(&mut *conn)
        .await?;
    ensure_affected(result)?;

    tracing::info!(quiz_id, "Quiz updated");
    Ok(())
}

/// Deletes a quiz. Its questions and their answers go with it.
pub async fn delete_quiz(conn: &mut SqliteConnection, quiz_id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM quiz WHERE id = ?")
        .bind(quiz_id)
        .execute(&mut *conn)
        .await?;
    ensure_affected(result)?;

    tracing::info!(quiz_id, "Quiz deleted");
    Ok(())
}

/// Inserts a question under an existing quiz.
/// The existence check and the insert share one transaction.
pub async fn create_question(
    conn: &mut SqliteConnection,
    quiz_id: i64,
    payload: &CreateQuestionRequest,
) -> Result<i64, AppError> {
    payload.validate()?;

    let mut tx = conn.begin().await?;

    let quiz_exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM quiz WHERE id = ?")
        .bind(quiz_id)
        .fetch_one(&mut *tx)
        .await?
        > 0;
    if !quiz_exists {
        return Err(AppError::NotFound);
    }

    let id = sqlx::query("INSERT INTO question (quiz_id, text) VALUES (?, ?)")
        .bind(quiz_id)
        .bind(&payload.text)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;

    tracing::info!(quiz_id, question_id = id, "Question created");
    Ok(id)
}

/// Rewords a question and/or points it at its correct answer.
///
/// The answer must belong to this question; anything else is a
/// `BadRequest`. Fields left out of the payload keep their stored values.
pub async fn update_question(
    conn: &mut SqliteConnection,
    quiz_id: i64,
    question_id: i64,
    payload: &UpdateQuestionRequest,
) -> Result<(), AppError> {
    payload.validate()?;

    let mut tx = conn.begin().await?;

    if let Some(answer_id) = payload.correct_answer_id {
        let owned = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(1)
            FROM answer a
            INNER JOIN question q ON a.question_id = q.id
            WHERE a.id = ? AND q.id = ? AND q.quiz_id = ?
            "#,
        )
        .bind(answer_id)
        .bind(question_id)
        .bind(quiz_id)
        .fetch_one(&mut *tx)
        .await?
            > 0;

        if !owned {
            let question_exists = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(1) FROM question WHERE id = ? AND quiz_id = ?",
            )
            .bind(question_id)
            .bind(quiz_id)
            .fetch_one(&mut *tx)
            .await?
                > 0;
            if !question_exists {
                return Err(AppError::NotFound);
            }
            return Err(AppError::BadRequest(format!(
                "Answer {} does not belong to question {}",
                answer_id, question_id
            )));
        }
    }

    let result = sqlx::query(
        r#"
        UPDATE question
        SET text = COALESCE(?, text),
            correct_answer_id = COALESCE(?, correct_answer_id)
        WHERE id = ? AND quiz_id = ?
        "#,
    )
    .bind(payload.text.as_deref())
    .bind(payload.correct_answer_id)
    .bind(question_id)
    .bind(quiz_id)
    .execute(&mut *tx)
    .await?;
    ensure_affected(result)?;

    tx.commit().await?;

    tracing::info!(quiz_id, question_id, "Question updated");
    Ok(())
}

/// Deletes a question together with its answers.
pub async fn delete_question(
    conn: &mut SqliteConnection,
    quiz_id: i64,
    question_id: i64,
) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM question WHERE id = ? AND quiz_id = ?")
        .bind(question_id)
        .bind(quiz_id)
        .execute(&mut *conn)
        .await?;
    ensure_affected(result)?;

    tracing::info!(quiz_id, question_id, "Question deleted");
    Ok(())
}

/// Inserts an answer under an existing question of the given quiz.
pub async fn create_answer(
    conn: &mut SqliteConnection,
    quiz_id: i64,
    question_id: i64,
    payload: &AnswerRequest,
) -> Result<i64, AppError> {
    payload.validate()?;

    let mut tx = conn.begin().await?;

    let question_exists = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(1) FROM question WHERE id = ? AND quiz_id = ?",
    )
    .bind(question_id)
    .bind(quiz_id)
    .fetch_one(&mut *tx)
    .await?
        > 0;
    if !question_exists {
        return Err(AppError::NotFound);
    }

    let id = sqlx::query("INSERT INTO answer (question_id, text) VALUES (?, ?)")
        .bind(question_id)
        .bind(&payload.text)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;

    tracing::info!(quiz_id, question_id, answer_id = id, "Answer created");
    Ok(id)
}

pub async fn update_answer(
    conn: &mut SqliteConnection,
    quiz_id: i64,
    question_id: i64,
    answer_id: i64,
    payload: &AnswerRequest,
) -> Result<(), AppError> {
    payload.validate()?;

    let result = sqlx::query(
        r#"
        UPDATE answer
        SET text = ?
        WHERE id = ?
          AND question_id = (SELECT id FROM question WHERE id = ? AND quiz_id = ?)
        "#,
    )
    .bind(&payload.text)
    .bind(answer_id)
    .bind(question_id)
    .bind(quiz_id)
    .execute(&mut *conn)
    .await?;
    ensure_affected(result)?;

    tracing::info!(quiz_id, question_id, answer_id, "Answer updated");
    Ok(())
}

/// Deletes an answer. If it was its question's correct answer, the
/// question is left with no correct answer configured.
pub async fn delete_answer(
    conn: &mut SqliteConnection,
    quiz_id: i64,
    question_id: i64,
    answer_id: i64,
) -> Result<(), AppError> {
    let mut tx = conn.begin().await?;

    let result = sqlx::query(
        r#"
        DELETE FROM answer
        WHERE id = ?
          AND question_id = (SELECT id FROM question WHERE id = ? AND quiz_id = ?)
        "#,
    )
    .bind(answer_id)
    .bind(question_id)
    .bind(quiz_id)
    .execute(&mut *tx)
    .await?;
    ensure_affected(result)?;

    sqlx::query("UPDATE question SET correct_answer_id = NULL WHERE id = ? AND correct_answer_id = ?")
        .bind(question_id)
        .bind(answer_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(quiz_id, question_id, answer_id, "Answer deleted");
    Ok(())
}
