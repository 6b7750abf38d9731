//! Test helpers for integration tests
//!
//! Provides a mock users endpoint that records every request it receives
//! and answers according to a configurable behavior.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::extract::{Query, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use collab_common::DirectoryConfig;
use collab_core::DirectoryUser;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// How the mock users endpoint answers
#[derive(Debug, Clone)]
pub enum DirectoryBehavior {
    /// Return the known users whose id was requested
    Serve(Vec<DirectoryUser>),
    /// Return an empty body with this status
    Status(StatusCode),
    /// Return 200 with this raw body
    RawBody(&'static str),
}

/// One request seen by the mock endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Query string exactly as received
    pub raw_query: Option<String>,
    /// Decoded `ids` parameter
    pub ids: Option<String>,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
}

struct MockState {
    behavior: DirectoryBehavior,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Mock user directory instance that manages lifecycle
pub struct MockDirectory {
    pub addr: SocketAddr,
    state: Arc<MockState>,
    _handle: JoinHandle<()>,
}

impl MockDirectory {
    /// Start a mock directory on a free local port
    pub async fn start(behavior: DirectoryBehavior) -> Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/users", get(users_handler))
            .with_state(Arc::clone(&state));

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(50)).await;

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Serve the given users
    pub async fn serving(users: Vec<DirectoryUser>) -> Result<Self> {
        Self::start(DirectoryBehavior::Serve(users)).await
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Directory config pointing at this server
    pub fn directory_config(&self) -> DirectoryConfig {
        DirectoryConfig {
            timeout_secs: Some(5),
            ..DirectoryConfig::new(self.base_url())
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

async fn users_handler(
    State(state): State<Arc<MockState>>,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    };

    let ids = params.get("ids").cloned();
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(RecordedRequest {
            raw_query,
            ids: ids.clone(),
            content_type: header_value(header::CONTENT_TYPE),
            authorization: header_value(header::AUTHORIZATION),
        });
    }

    match &state.behavior {
        DirectoryBehavior::Serve(users) => {
            let requested: Vec<&str> = ids
                .as_deref()
                .map(|ids| ids.split(',').collect())
                .unwrap_or_default();
            let found: Vec<DirectoryUser> = users
                .iter()
                .filter(|user| requested.contains(&user.id.as_str()))
                .cloned()
                .collect();
            Json(found).into_response()
        }
        DirectoryBehavior::Status(status) => (*status).into_response(),
        DirectoryBehavior::RawBody(body) => (StatusCode::OK, *body).into_response(),
    }
}

/// Convert string slices into owned ids
pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
