//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! backed by a temporary settings file, UI directory and sounds directory,
//! with the motor optionally replaced by a mock driver.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tokio::runtime::Handle;
use tower::ServiceExt;

use slotbox_core::{
    create_actuator, testing::MockMotorDriver, Config, EventOrchestrator, GameConfig,
    JsonFileSettingsStore, MediaConfig, MotorDriver, ServerConfig,
};
use slotbox_server::state::AppState;

/// Test fixture for E2E testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_spin() {
///     let fixture = TestFixture::new().await;
///     let response = fixture.post("/api/test-spin", json!({})).await;
///     assert_eq!(response.body["status"], "queued");
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Orchestrator behind the router
    pub orchestrator: Arc<EventOrchestrator>,
    /// Mock motor, present when the fixture was built with one
    pub motor: Option<Arc<MockMotorDriver>>,
    /// Temporary directory holding settings, UI and sounds
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a new test fixture without hardware.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let ui_dir = temp_dir.path().join("ui");
        let sounds_dir = temp_dir.path().join("sounds");
        std::fs::create_dir_all(&ui_dir).expect("Failed to create ui dir");
        std::fs::create_dir_all(sounds_dir.join("win")).expect("Failed to create win dir");
        std::fs::create_dir_all(sounds_dir.join("loose")).expect("Failed to create loose dir");
        std::fs::write(ui_dir.join("index.html"), "<h1>cabinet</h1>").unwrap();
        std::fs::write(ui_dir.join("settings.html"), "<h1>settings</h1>").unwrap();

        let config = Config {
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
                ui_dir,
            },
            game: GameConfig {
                cycle_size: 20,
                spin_duration_ms: 50,
                settings_path: temp_dir.path().join("config.json"),
            },
            media: MediaConfig { sounds_dir },
            hardware: Default::default(),
        };

        let settings = Arc::new(
            JsonFileSettingsStore::open(&config.game.settings_path)
                .expect("Failed to open settings"),
        );

        let motor = test_config.with_motor.then(|| Arc::new(MockMotorDriver::new()));
        let driver = motor
            .as_ref()
            .map(|m| Arc::clone(m) as Arc<dyn MotorDriver>);
        let actuator = create_actuator(driver, Handle::current());

        let orchestrator = Arc::new(
            EventOrchestrator::new(settings, actuator)
                .with_cycle_size(config.game.cycle_size)
                .with_spin_duration(Duration::from_millis(config.game.spin_duration_ms)),
        );

        let state = Arc::new(AppState::new(config, Arc::clone(&orchestrator)));
        let router = slotbox_server::api::create_router(state);

        Self {
            router,
            orchestrator,
            motor,
            temp_dir,
        }
    }

    /// Path of a file under the fixture's sounds directory.
    pub fn sound_path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join("sounds").join(relative)
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// Configuration for test fixture.
#[derive(Debug, Clone, Default)]
pub struct TestConfig {
    /// Drive a mock motor instead of simulating spins
    pub with_motor: bool,
}

impl TestConfig {
    pub fn with_motor() -> Self {
        Self { with_motor: true }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}
