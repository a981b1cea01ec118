#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use recipebox_api::config::ServerConfig;
use recipebox_api::router::build_app_router;
use recipebox_api::state::AppState;
use recipebox_api::uploads::UploadStore;

/// Build a test `ServerConfig` with safe defaults, storing uploads in `upload_dir`.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        upload_dir,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
    }
}

/// The full application router plus the temporary uploads directory it
/// writes into. The directory lives as long as this value.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    uploads: TempDir,
}

impl TestApp {
    pub fn upload_dir(&self) -> &Path {
        self.uploads.path()
    }

    /// Number of files currently in the uploads directory.
    pub fn upload_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_empty(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, form: MultipartForm) -> Response<Body> {
        let (content_type, body) = form.finish();
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a fresh temporary uploads directory.
pub fn build_test_app(pool: SqlitePool) -> TestApp {
    let uploads = TempDir::new().unwrap();
    let config = test_config(uploads.path().to_path_buf());

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        uploads: UploadStore::new(config.upload_dir.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        pool,
        uploads,
    }
}

/// Minimal `multipart/form-data` body builder.
pub struct MultipartForm {
    boundary: &'static str,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: "recipebox-test-boundary",
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

/// A complete, valid recipe form without an image.
pub fn recipe_form(name: &str, description: &str, ingredients: &str, directions: &str) -> MultipartForm {
    MultipartForm::new()
        .text("recipe-name", name)
        .text("recipe-desc", description)
        .text("ingredients", ingredients)
        .text("directions", directions)
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

/// Extract the `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(axum::http::header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Parse the recipe id out of a `/recipe/{id}` redirect.
pub fn redirected_id(response: &Response<Body>) -> i64 {
    location(response)
        .strip_prefix("/recipe/")
        .expect("redirect should point at a recipe")
        .parse()
        .unwrap()
}
