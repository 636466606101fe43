// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        quiz::{CreateQuizRequest, UpdateQuizRequest},
        submission::QuizSubmission,
    },
    repository::{commands, reads},
    services::scoring,
};

/// Lists all quizzes as `{id, title}` summaries.
pub async fn list_quizzes(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let quizzes = reads::list_quizzes(&mut conn).await?;

    Ok(Json(quizzes))
}

/// Retrieves a quiz with its questions, answers and links.
pub async fn get_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let aggregate = reads::load_quiz_aggregate(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound)?;
    tx.commit().await?;

    Ok(Json(aggregate))
}

pub async fn create_quiz(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let id = commands::create_quiz(&mut conn, &payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/quizzes/{}", id))],
    ))
}

pub async fn update_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    commands::update_quiz(&mut conn, id, &payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    commands::delete_quiz(&mut conn, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Scores a submission against the quiz's current answer key.
///
/// * Rebuilds the aggregate from the store on every call.
/// * Answers for questions outside the quiz are ignored.
pub async fn submit_responses(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(submission): Json<QuizSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = pool.begin().await?;
    let aggregate = reads::load_quiz_aggregate(&mut tx, id)
        .await?
        .ok_or(AppError::NotFound)?;
    tx.commit().await?;

    let result = scoring::score(&aggregate, &submission.answers);
    tracing::info!(quiz_id = id, score = result.score, "Submission scored");

    Ok(Json(result))
}
