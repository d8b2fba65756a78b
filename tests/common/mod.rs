//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates a temporary video root, an
//! in-memory word database and the full [`AppContext`]. The [`with_server`]
//! constructor starts Axum on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use signbridge::config::Config;
use signbridge::server::{create_router, AppContext};
use signbridge_db::pool::{init_memory_pool, DbPool, PooledConnection};
use signbridge_db::queries::words;

/// Test harness wrapping an [`AppContext`] backed by an in-memory database
/// and a temporary video root.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
    /// Scratch directory owned by this harness; the video root lives inside it.
    pub dir: TempDir,
    root: PathBuf,
}

impl TestHarness {
    /// Create a harness with an empty video root and word table.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create scratch dir");
        let root = dir.path().join("videos");
        let db = init_memory_pool().expect("failed to create in-memory pool");

        let mut config = Config::default();
        config.videos.root = root.clone();
        signbridge::server::prepare_video_dirs(&config).expect("failed to create video dirs");

        let ctx = AppContext::new(config, db.clone());
        Self { ctx, db, dir, root }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let app = harness.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }

    pub fn router(&self) -> Router {
        create_router(self.ctx.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a file next to the video root, inside this harness's scratch dir.
    pub fn write_outside(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Get a database connection from the pool.
    pub fn conn(&self) -> PooledConnection {
        signbridge_db::pool::get_conn(&self.db).expect("failed to get db connection")
    }

    /// Write a clip of `len` patterned bytes under the video root.
    pub fn write_clip(&self, rel: &str, len: usize) -> Vec<u8> {
        let data = patterned(len);
        let path = self.root().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, &data).unwrap();
        data
    }

    /// Write a clip under `words/` and register it.
    pub fn add_word_clip(&self, label: &str) {
        let rel = format!("words/{label}.mp4");
        self.write_clip(&rel, 64);
        words::insert_word(&self.conn(), label, &rel).unwrap();
    }

    /// Send a request through the router without a network socket.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router().oneshot(request).await.unwrap()
    }
}

/// Bytes where each position is distinguishable from its neighbours.
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body is not JSON")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn get_range(uri: &str, range: &str) -> Request<Body> {
    Request::get(uri)
        .header("range", range)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, json: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .header("host", "10.0.0.2:5000")
        .body(Body::from(json.to_string()))
        .unwrap()
}
