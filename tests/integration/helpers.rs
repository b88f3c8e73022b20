//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::header;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use newsroom_api::router::build_router;
use newsroom_api::state::AppState;
use newsroom_auth::password::PasswordHasher;
use newsroom_auth::policy::AccessPolicy;
use newsroom_auth::session::{SessionManager, SessionStore};
use newsroom_core::config::{AppConfig, StorageConfig};
use newsroom_entity::Account;
use newsroom_store::{AccountStore, NewsStore};

/// Test application context backed by a throwaway data directory.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application state for direct store access.
    pub state: AppState,
    /// Owns the temp directory for the lifetime of the test.
    _dir: tempfile::TempDir,
}

/// A collected response: status, headers, raw text, and parsed JSON
/// (`Null` when the body is not JSON).
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with empty stores and stub pages.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let public_dir = dir.path().join("public");
        write_stub_pages(&public_dir);

        let config = AppConfig {
            storage: StorageConfig {
                data_dir: dir.path().join("data"),
                public_dir,
                ..StorageConfig::default()
            },
            ..AppConfig::default()
        };
        std::fs::create_dir_all(&config.storage.data_dir).expect("Failed to create data dir");

        let news = Arc::new(NewsStore::load(config.storage.news_path()).await);
        let accounts = Arc::new(AccountStore::load(config.storage.accounts_path()).await);
        let password_hasher = Arc::new(PasswordHasher::new());
        let sessions = Arc::new(SessionManager::new(
            Arc::clone(&accounts),
            Arc::clone(&password_hasher),
            SessionStore::new(config.session.ttl_hours),
        ));

        let state = AppState {
            config: Arc::new(config),
            news,
            accounts,
            sessions,
            password_hasher,
            policy: AccessPolicy::new(),
        };
        let router = build_router(state.clone());

        Self {
            router,
            state,
            _dir: dir,
        }
    }

    /// Seed an account directly into the credential store.
    pub async fn create_account(&self, id: &str, password: &str, role: &str) {
        let password_hash = self
            .state
            .password_hasher
            .hash_password(password)
            .expect("Failed to hash password");
        self.state
            .accounts
            .insert(Account {
                id: id.to_string(),
                password_hash,
                role: role.parse().expect("Bad role in test"),
            })
            .await
            .expect("Failed to seed account");
    }

    /// Log in and return the `Cookie` header value for follow-up requests.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/login/admin",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.text);

        let set_cookie = response
            .headers
            .get(header::SET_COOKIE)
            .expect("No session cookie set")
            .to_str()
            .expect("Bad Set-Cookie header");
        set_cookie
            .split(';')
            .next()
            .expect("Empty Set-Cookie header")
            .to_string()
    }

    /// Drive one request through the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router call failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let text = String::from_utf8_lossy(&bytes).to_string();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }
}

/// Lay down the static pages the gated routes serve.
fn write_stub_pages(public_dir: &std::path::Path) {
    std::fs::create_dir_all(public_dir).expect("Failed to create public dir");
    std::fs::write(public_dir.join("index.html"), "<h1>World News</h1>").unwrap();
    std::fs::write(public_dir.join("admin.html"), "<h1>Global Admin</h1>").unwrap();
    std::fs::write(
        public_dir.join("usermanagement.html"),
        "<h1>User Management</h1>",
    )
    .unwrap();
    for region in newsroom_entity::Region::CONTINENTS {
        let region_dir = public_dir.join(region.as_str());
        std::fs::create_dir_all(&region_dir).unwrap();
        std::fs::write(
            region_dir.join("admin.html"),
            format!("<h1>{region} Admin</h1>"),
        )
        .unwrap();
    }
}
