use crate::config::Config;
use crate::server::{AppContext, AppError};
use crate::translate::{build_url, translate};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use signbridge_common::{Error, Result};
use signbridge_db::pool::get_conn;
use std::path::Path;

pub fn api_routes() -> Router<AppContext> {
    Router::new().route("/generate-video", post(generate_video))
}

pub async fn health(State(ctx): State<AppContext>) -> impl IntoResponse {
    let database = match ctx.db_pool.clone() {
        Some(pool) => {
            let reachable = tokio::task::spawn_blocking(move || get_conn(&pool).is_ok())
                .await
                .unwrap_or(false);
            if reachable {
                "connected"
            } else {
                "disconnected"
            }
        }
        None => "disconnected",
    };

    Json(serde_json::json!({
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "word_index": ctx.word_index.name(),
        "word_videos": count_entries(&ctx.config.videos.words_dir()).await,
        "output_videos": count_entries(&ctx.config.videos.output_dir()).await,
    }))
}

async fn count_entries(dir: &Path) -> usize {
    let Ok(mut entries) = tokio::fs::read_dir(dir).await else {
        return 0;
    };
    let mut count = 0;
    while let Ok(Some(_)) = entries.next_entry().await {
        count += 1;
    }
    count
}

#[derive(Deserialize)]
pub struct GenerateVideoRequest {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateVideoResponse {
    success: bool,
    text: String,
    words: Vec<String>,
    video_count: usize,
    #[serde(rename = "videoUrls")]
    video_urls: Vec<String>,
    missing_words: Vec<String>,
    language: String,
}

async fn generate_video(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
    payload: std::result::Result<Json<GenerateVideoRequest>, JsonRejection>,
) -> std::result::Result<Json<GenerateVideoResponse>, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;
    let text = payload.text.unwrap_or_default();
    let language = payload.language.unwrap_or_else(|| "en_US".to_string());

    tracing::info!("Received text: '{}' ({})", text, language);

    if text.trim().is_empty() {
        return Err(Error::validation("Text is required").into());
    }

    let translation = translate(&text, ctx.word_index.clone(), &ctx.config.videos.root).await?;

    let base = public_base_url(&ctx.config, &headers);
    let video_urls = translation
        .video_paths
        .iter()
        .map(|path| build_url(&base, path))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!("Returning {} video URLs", video_urls.len());

    Ok(Json(GenerateVideoResponse {
        success: true,
        text,
        words: translation.words,
        video_count: video_urls.len(),
        video_urls,
        missing_words: translation.missing_words,
        language,
    }))
}

/// Turn a rejected JSON body into the API's JSON error shape.
pub(crate) fn invalid_body(rejection: JsonRejection) -> Error {
    Error::validation(format!("Invalid request body: {}", rejection.body_text()))
}

/// Base URL clients should use to reach this server.
///
/// Configured `public_url` wins, then the request's `Host` header, then the
/// bind address.
fn public_base_url(config: &Config, headers: &HeaderMap) -> String {
    if let Some(url) = &config.server.public_url {
        return url.clone();
    }

    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(|host| format!("http://{host}"))
        .unwrap_or_else(|| format!("http://{}:{}", config.server.host, config.server.port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_public_base_url_prefers_config() {
        let mut config = Config::default();
        config.server.public_url = Some("https://signs.example.com".into());
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("10.0.0.2:5000"));

        assert_eq!(
            public_base_url(&config, &headers),
            "https://signs.example.com"
        );
    }

    #[test]
    fn test_public_base_url_from_host_header() {
        let config = Config::default();
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("10.0.0.2:5000"));

        assert_eq!(public_base_url(&config, &headers), "http://10.0.0.2:5000");
    }

    #[test]
    fn test_public_base_url_fallback() {
        let config = Config::default();
        assert_eq!(
            public_base_url(&config, &HeaderMap::new()),
            "http://0.0.0.0:5000"
        );
    }

    #[tokio::test]
    async fn test_count_entries() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(count_entries(&dir.path().join("missing")).await, 0);

        std::fs::write(dir.path().join("a.mp4"), b"a").unwrap();
        std::fs::write(dir.path().join("b.mp4"), b"b").unwrap();
        assert_eq!(count_entries(dir.path()).await, 2);
    }
}
