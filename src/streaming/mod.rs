//! Video streaming module.
//!
//! Serves word clips straight from the video root with HTTP range support.
//!
//! # Routes
//!
//! - `GET /videos/{*path}` - Clip bytes, honouring a single `Range: bytes=a-b`

pub mod direct;
pub mod range;

pub use direct::{locate_asset, serve_video, VideoAsset, VIDEO_CONTENT_TYPE};
pub use range::{parse_range_header, resolve_range, ByteRange, RangeOutcome};

use axum::{routing::get, Router};

use crate::server::AppContext;

/// Create the clip streaming router, mounted at `/videos`.
pub fn video_router() -> Router<AppContext> {
    Router::new().route("/{*path}", get(serve_video))
}
