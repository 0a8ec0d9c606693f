//! Test helpers for the edge handler: request builders and a minimal
//! in-process upstream.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use secrecy::Secret;
use serde_json::{json, Value};

use mindmap_core::config::RelayConfig;
use mindmap_core::gateway::GroqConfig;

/// Spawn a one-behavior fake chat-completions endpoint and return its base
/// URL.
pub async fn fake_upstream(content: &'static str) -> String {
    let app = Router::new().route(
        "/chat/completions",
        post(move |Json(_): Json<Value>| async move {
            Json(json!({"choices": [{"message": {"role": "assistant", "content": content}}]}))
        }),
    );

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

    format!("http://127.0.0.1:{}", port)
}

pub fn relay_config(api_key: &str, base_url: &str) -> RelayConfig {
    RelayConfig {
        groq: GroqConfig::new(Secret::new(api_key.to_string()))
            .with_base_url(base_url.to_string()),
        normalize_headings: false,
    }
}

pub fn post_generate(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/generate-mindmap")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body was not JSON")
}
