//! Word registration endpoints.

use crate::server::routes_api::invalid_body;
use crate::server::{AppContext, AppError};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::json;
use signbridge_common::paths::normalize_relative;
use signbridge_common::text::normalize_label;
use signbridge_common::{Error, Result};
use signbridge_db::pool::{get_conn, DbPool};
use signbridge_db::queries::words;

pub fn word_routes() -> Router<AppContext> {
    Router::new()
        .route("/words", get(list_words).post(add_word))
        .route("/words/{label}", delete(delete_word))
}

/// Run a blocking query on a pooled connection.
async fn with_conn<T, F>(ctx: &AppContext, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> Result<T> + Send + 'static,
{
    let pool: DbPool = ctx
        .db_pool
        .clone()
        .ok_or_else(|| Error::database("Word database is not configured"))?;

    tokio::task::spawn_blocking(move || {
        let conn = get_conn(&pool)?;
        f(&conn)
    })
    .await
    .map_err(|e| Error::internal(format!("Database task failed: {e}")))?
}

async fn list_words(
    State(ctx): State<AppContext>,
) -> std::result::Result<impl IntoResponse, AppError> {
    let words = with_conn(&ctx, words::list_words).await?;

    Ok(Json(json!({
        "success": true,
        "count": words.len(),
        "words": words,
    })))
}

#[derive(Deserialize)]
struct AddWordRequest {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    video_path: Option<String>,
}

async fn add_word(
    State(ctx): State<AppContext>,
    payload: std::result::Result<Json<AddWordRequest>, JsonRejection>,
) -> std::result::Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;
    let label = normalize_label(payload.label.as_deref().unwrap_or_default());
    let video_path = payload.video_path.unwrap_or_default().trim().to_string();
    if label.is_empty() || video_path.is_empty() {
        return Err(Error::validation("label and video_path required").into());
    }

    let video_path = normalize_relative(&video_path)?;

    let record = with_conn(&ctx, move |conn| {
        words::insert_word(conn, &label, &video_path).map_err(|e| match e {
            Error::Conflict(_) => Error::Conflict("Word already exists".to_string()),
            other => other,
        })
    })
    .await?;

    tracing::info!("Registered word '{}' -> {}", record.label, record.video_path);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": format!("Added '{}'", record.label),
            "word": record,
        })),
    ))
}

async fn delete_word(
    State(ctx): State<AppContext>,
    Path(label): Path<String>,
) -> std::result::Result<StatusCode, AppError> {
    let removed = with_conn(&ctx, move |conn| words::delete_word(conn, &label)).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
