//! mindmap-core: Shared contract of the mind map relay.
//!
//! Both deployments (the `mindmap-service` process and the `mindmap-edge`
//! per-invocation handler) build their HTTP surface from this crate:
//! request handlers, the upstream completion gateway, the error envelope,
//! and the ambient observability layers.
pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod markdown;
pub mod middleware;
pub mod observability;
pub mod prompt;
