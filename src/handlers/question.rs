// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, UpdateQuestionRequest},
    repository::commands,
};

/// Adds a question to a quiz. 404 when the quiz does not exist.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Path(quiz_id): Path<i64>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let id = commands::create_question(&mut conn, quiz_id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("/api/quizzes/{}/questions/{}", quiz_id, id),
        )],
    ))
}

/// Updates text and/or the correct answer pointer.
pub async fn update_question(
    State(pool): State<SqlitePool>,
    Path((quiz_id, question_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    commands::update_question(&mut conn, quiz_id, question_id, &payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path((quiz_id, question_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    commands::delete_question(&mut conn, quiz_id, question_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
