//! Test helpers for integration tests
//!
//! Provides utilities for spawning the API and a stub joke source, and
//! for making cookie-carrying HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::{http::StatusCode as AxumStatus, routing::get, Json, Router};
use jokebox_api::{create_app, create_app_state};
use jokebox_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Bind an ephemeral port and serve `app` on it
async fn spawn_router(app: Router) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok((addr, handle))
}

/// What the stub joke source answers with
#[derive(Debug, Clone)]
pub enum UpstreamBehavior {
    /// The same joke with a string id every time
    Fixed(Value),
    /// Always a 503
    Failing,
}

impl UpstreamBehavior {
    /// A joke id unique to this run, so reruns against one database still
    /// see a first fetch
    pub fn unique_text_id() -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        Self::Fixed(json!({
            "id": id,
            "question": format!("Why did test {id} cross the road?"),
            "answer": "To get to the other side.",
        }))
    }

    /// Same as [`UpstreamBehavior::unique_text_id`] but with a numeric id
    pub fn unique_numeric_id() -> Self {
        let id = (uuid::Uuid::new_v4().as_u64_pair().0 >> 12) as i64;
        Self::Fixed(json!({
            "id": id,
            "question": "What do you call a fake noodle?",
            "answer": "An impasta.",
        }))
    }
}

/// Stub of the upstream `GET /api/joke`
pub struct StubUpstream {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl StubUpstream {
    pub async fn start(behavior: UpstreamBehavior) -> Result<Self> {
        let app = Router::new().route(
            "/api/joke",
            get(move || {
                let behavior = behavior.clone();
                async move {
                    match behavior {
                        UpstreamBehavior::Fixed(joke) => (AxumStatus::OK, Json(joke)),
                        UpstreamBehavior::Failing => (
                            AxumStatus::SERVICE_UNAVAILABLE,
                            Json(json!({ "error": "unavailable" })),
                        ),
                    }
                }
            }),
        );
        let (addr, handle) = spawn_router(app).await?;
        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub upstream: StubUpstream,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start the API backed by a stub returning one unique joke
    pub async fn start() -> Result<Self> {
        Self::start_with_upstream(UpstreamBehavior::unique_text_id()).await
    }

    pub async fn start_with_upstream(behavior: UpstreamBehavior) -> Result<Self> {
        let upstream = StubUpstream::start(behavior).await?;

        let mut config = test_config()?;
        config.joke_source.base_url = upstream.base_url();
        config.maintenance.interval_secs = 0;

        let state = create_app_state(config).await?;
        let (addr, handle) = spawn_router(create_app(state)).await?;

        Ok(Self {
            addr,
            upstream,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A new client with its own cookie store, i.e. its own session
    pub fn session(&self) -> Result<Session> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Session {
            base_url: self.base_url(),
            client,
        })
    }
}

/// HTTP client bound to one server, keeping cookies between requests
pub struct Session {
    base_url: String,
    client: Client,
}

impl Session {
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.get(&url).send().await?)
    }

    /// GET with an explicit bearer token instead of the cookie
    pub async fn get_bearer(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        Ok(self.client.post(&url).json(body).send().await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config.rate_limit.requests_per_second = 10_000;
    config.rate_limit.burst = 10_000;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET", "API_PORT"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Value of the `access_token` cookie in a response, if set
pub fn access_token_cookie(response: &Response) -> Option<String> {
    response
        .cookies()
        .find(|c| c.name() == "access_token")
        .map(|c| c.value().to_string())
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
