// src/handlers/answer.rs

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{error::AppError, models::answer::AnswerRequest, repository::commands};

pub async fn create_answer(
    State(pool): State<SqlitePool>,
    Path((quiz_id, question_id)): Path<(i64, i64)>,
    Json(payload): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    let id = commands::create_answer(&mut conn, quiz_id, question_id, &payload).await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!(
                "/api/quizzes/{}/questions/{}/answers/{}",
                quiz_id, question_id, id
            ),
        )],
    ))
}

pub async fn update_answer(
    State(pool): State<SqlitePool>,
    Path((quiz_id, question_id, answer_id)): Path<(i64, i64, i64)>,
    Json(payload): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    commands::update_answer(&mut conn, quiz_id, question_id, answer_id, &payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_answer(
    State(pool): State<SqlitePool>,
    Path((quiz_id, question_id, answer_id)): Path<(i64, i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = pool.acquire().await?;
    commands::delete_answer(&mut conn, quiz_id, question_id, answer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
