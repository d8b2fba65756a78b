//! Direct streaming with HTTP range requests.
//!
//! Serves word clips from the video root with support for single byte-range
//! requests. Every request opens its own file handle; the handle is owned by
//! the response body stream and closed when that stream is dropped.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use signbridge_common::paths::{confine_canonical, normalize_relative, resolve_under_root};
use signbridge_common::{Error, Result};
use std::io::SeekFrom;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use super::range::{resolve_range, ByteRange, RangeOutcome};
use crate::server::AppContext;

/// Content type of every served clip.
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// A clip located on disk and confined to the video root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoAsset {
    /// Normalized path relative to the video root, `/`-separated.
    pub relative: String,
    /// Canonical absolute location.
    pub path: PathBuf,
    pub size: u64,
}

/// Locate a clip under `root`.
///
/// Fails with [`Error::PathTraversal`] if the client path (or a symlink it
/// names) leads outside the root, and [`Error::AssetNotFound`] if nothing
/// regular exists there.
pub async fn locate_asset(root: &std::path::Path, requested: &str) -> Result<VideoAsset> {
    let relative = normalize_relative(requested)?;
    let lexical = resolve_under_root(root, &relative)?;

    let canonical_root = tokio::fs::canonicalize(root)
        .await
        .map_err(|_| Error::not_found(&relative))?;
    let canonical = tokio::fs::canonicalize(&lexical)
        .await
        .map_err(|_| Error::not_found(&relative))?;
    confine_canonical(&canonical_root, &canonical)?;

    let metadata = tokio::fs::metadata(&canonical)
        .await
        .map_err(|_| Error::not_found(&relative))?;
    if !metadata.is_file() {
        return Err(Error::not_found(&relative));
    }

    Ok(VideoAsset {
        relative,
        path: canonical,
        size: metadata.len(),
    })
}

/// Open a body streaming exactly the bytes of `range`.
///
/// Only `range.len()` bytes are read, in chunks, starting at `range.start`.
pub async fn open_range(asset: &VideoAsset, range: ByteRange) -> Result<Body> {
    let mut file = File::open(&asset.path)
        .await
        .map_err(|e| Error::unavailable(&asset.relative, e))?;

    file.seek(SeekFrom::Start(range.start))
        .await
        .map_err(|e| Error::unavailable(&asset.relative, e))?;

    Ok(Body::from_stream(ReaderStream::new(file.take(range.len()))))
}

/// Open a body streaming the whole asset.
///
/// Bounded to the size seen by [`locate_asset`], which is what `Content-Length`
/// announces.
pub async fn open_full(asset: &VideoAsset) -> Result<Body> {
    let file = File::open(&asset.path)
        .await
        .map_err(|e| Error::unavailable(&asset.relative, e))?;

    Ok(Body::from_stream(ReaderStream::new(file.take(asset.size))))
}

/// Build the 200 or 206 response for a validated range.
pub fn build_response(outcome: RangeOutcome, size: u64, body: Body) -> Result<Response> {
    let builder = Response::builder()
        .header(header::CONTENT_TYPE, VIDEO_CONTENT_TYPE)
        .header(header::ACCEPT_RANGES, "bytes")
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");

    let builder = match outcome {
        RangeOutcome::Full => builder
            .status(StatusCode::OK)
            .header(header::CONTENT_LENGTH, size.to_string()),
        RangeOutcome::Partial(range) => builder
            .status(StatusCode::PARTIAL_CONTENT)
            .header(header::CONTENT_LENGTH, range.len().to_string())
            .header(header::CONTENT_RANGE, range.content_range(size)),
    };

    builder
        .body(body)
        .map_err(|e| Error::internal(format!("Failed to build video response: {e}")))
}

/// Error wrapper using range-serving semantics instead of the API JSON shape.
#[derive(Debug)]
pub struct VideoError(pub Error);

impl From<Error> for VideoError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for VideoError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::RangeNotSatisfiable { size } => (
                StatusCode::RANGE_NOT_SATISFIABLE,
                [
                    (header::CONTENT_RANGE, format!("bytes */{size}")),
                    (header::ACCEPT_RANGES, "bytes".to_string()),
                    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
                ],
                Body::empty(),
            )
                .into_response(),
            Error::PathTraversal(_) | Error::AssetNotFound(_) | Error::AssetUnavailable { .. } => {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Video not found" })),
                )
                    .into_response()
            }
            other => {
                tracing::error!(error = %other, "Failed to serve video");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

/// Serve a clip from the video root with range request support.
pub async fn serve_video(
    State(ctx): State<AppContext>,
    Path(requested): Path<String>,
    headers: HeaderMap,
) -> std::result::Result<Response, VideoError> {
    let asset = match locate_asset(&ctx.config.videos.root, &requested).await {
        Ok(asset) => asset,
        Err(e @ Error::PathTraversal(_)) => {
            tracing::warn!(requested = %requested, "Rejected path outside video root");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let range_header = headers.get(header::RANGE).and_then(|h| h.to_str().ok());
    let outcome = resolve_range(range_header, asset.size)?;

    let body = match outcome {
        RangeOutcome::Full => open_full(&asset).await,
        RangeOutcome::Partial(range) => {
            tracing::debug!(
                path = %asset.relative,
                start = range.start,
                end = range.end,
                size = asset.size,
                "Serving byte range"
            );
            open_range(&asset, range).await
        }
    }
    .inspect_err(|e| tracing::warn!(error = %e, "Video vanished before it could be opened"))?;

    Ok(build_response(outcome, asset.size, body)?)
}
