//! Shared test helpers for API integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use bytes::Bytes;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use http_body_util::BodyExt;
use mockable::Clock;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use geticard_api::{AppState, build_app};
use geticard_core::config::{
    ApiConfig, AppConfig, AuthConfig, LoggingConfig, ServerConfig, StorageConfig, StoreConfig,
    StoreProvider,
};
use geticard_database::MemoryRecordStore;
use geticard_storage::ImageStore;

pub const JWT_SECRET: &str = "integration-test-secret";

/// Clock that only moves when told to.
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid date");
        Self(Mutex::new(start))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().expect("clock mutex");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.0.lock().expect("clock mutex")
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct access to services and the decoder
    pub state: AppState,
    /// Backing store, for direct inspection
    pub store: MemoryRecordStore,
    /// Time source driving token issuance and expiry
    pub clock: Arc<ManualClock>,
    /// Upload directory; removed on drop
    pub uploads: TempDir,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        Self::with_api(ApiConfig::default()).await
    }

    /// Create a test application with specific route toggles
    pub async fn with_api(api: ApiConfig) -> Self {
        Self::build(api, "/uploads").await
    }

    /// Create a test application whose image references use `public_prefix`
    pub async fn with_public_prefix(public_prefix: &str) -> Self {
        Self::build(ApiConfig::default(), public_prefix).await
    }

    async fn build(api: ApiConfig, public_prefix: &str) -> Self {
        let uploads = tempfile::tempdir().expect("Failed to create upload dir");

        let config = AppConfig {
            server: ServerConfig::default(),
            auth: AuthConfig {
                jwt_secret: JWT_SECRET.to_string(),
                access_ttl_minutes: 15,
            },
            store: StoreConfig {
                provider: StoreProvider::Memory,
                ..StoreConfig::default()
            },
            storage: StorageConfig {
                upload_dir: uploads.path().to_string_lossy().into_owned(),
                public_prefix: public_prefix.to_string(),
            },
            api,
            logging: LoggingConfig::default(),
        };
        config.validate().expect("Test config should be valid");

        let store = MemoryRecordStore::new();
        let images = ImageStore::from_config(&config.storage)
            .await
            .expect("Failed to init image storage");
        let clock = Arc::new(ManualClock::new());

        let state = AppState::new(
            config,
            Arc::new(store.clone()),
            Arc::new(images),
            clock.clone(),
        );

        Self {
            router: build_app(state.clone()),
            state,
            store,
            clock,
            uploads,
        }
    }

    /// Register a user and assert success
    pub async fn register(&self, email: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/register",
                Some(serde_json::json!({"email": email, "password": password})),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );
    }

    /// Login and return JWT access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(serde_json::json!({"email": email, "password": password})),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create a card and return its id
    pub async fn create_card(&self, body: Value) -> String {
        let response = self.request("POST", "/card", Some(body), None).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create card failed: {:?}",
            response.body
        );
        response.body["card_id"]
            .as_str()
            .expect("No card_id in response")
            .to_string()
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let body = body
            .map(|b| serde_json::to_vec(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        let req = req.body(Body::from(body)).expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let raw = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            raw,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, or `Null` when the body is not JSON
    pub body: Value,
    /// Raw body bytes
    pub raw: Bytes,
}
