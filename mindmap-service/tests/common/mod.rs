//! Test helper module for mindmap-service integration tests.
//!
//! Spawns the real application on a random port against an in-process
//! fake Groq upstream, so tests exercise the full HTTP surface without
//! network access or a credential.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use secrecy::Secret;
use serde_json::{json, Value};

use mindmap_core::config::{Config, RelayConfig};
use mindmap_core::gateway::GroqConfig;
use mindmap_core::observability::init_metrics;
use mindmap_service::config::ServiceConfig;
use mindmap_service::startup::Application;

// The Prometheus recorder is process-global, so install it exactly once
// per test binary.
static INIT_METRICS: Once = Once::new();

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub upstream: FakeGroq,
}

impl TestApp {
    pub async fn spawn(behavior: UpstreamBehavior) -> Self {
        Self::spawn_inner(behavior, false).await
    }

    pub async fn spawn_normalizing(behavior: UpstreamBehavior) -> Self {
        Self::spawn_inner(behavior, true).await
    }

    async fn spawn_inner(behavior: UpstreamBehavior, normalize_headings: bool) -> Self {
        INIT_METRICS.call_once(init_metrics);

        let upstream = FakeGroq::spawn(behavior).await;

        // Use random port for testing (port 0)
        let config = ServiceConfig {
            common: Config { port: 0 },
            relay: RelayConfig {
                groq: GroqConfig::new(Secret::new("gsk_test_key".to_string()))
                    .with_base_url(upstream.base_url.clone()),
                normalize_headings,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            upstream,
        }
    }
}

/// Canned reply the fake upstream serves.
#[derive(Clone)]
pub enum UpstreamBehavior {
    /// 200 with a well-formed chat-completion envelope.
    Markdown(&'static str),
    /// Arbitrary status with a raw body.
    Status(u16, &'static str),
    /// 200 with an empty choices array.
    NoChoices,
}

/// In-process stand-in for Groq's chat-completion endpoint. Records every
/// request it receives, including the authorization header.
pub struct FakeGroq {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeGroq {
    pub async fn spawn(behavior: UpstreamBehavior) -> Self {
        let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));

        let state = FakeGroqState {
            behavior,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/chat/completions", post(fake_chat_completions))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let port = listener
            .local_addr()
            .expect("Failed to read fake upstream address")
            .port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        FakeGroq {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct FakeGroqState {
    behavior: UpstreamBehavior,
    requests: Arc<Mutex<Vec<Value>>>,
}

async fn fake_chat_completions(
    State(state): State<FakeGroqState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    state.requests.lock().unwrap().push(json!({
        "authorization": authorization,
        "body": body,
    }));

    let (status, payload) = match &state.behavior {
        UpstreamBehavior::Markdown(content) => (
            StatusCode::OK,
            json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
                .to_string(),
        ),
        UpstreamBehavior::Status(code, message) => (
            StatusCode::from_u16(*code).expect("invalid status in test behavior"),
            (*message).to_string(),
        ),
        UpstreamBehavior::NoChoices => (StatusCode::OK, json!({"choices": []}).to_string()),
    };

    (status, [(header::CONTENT_TYPE, "application/json")], payload)
}
