use async_trait::async_trait;
use thiserror::Error;

pub mod groq;
pub mod mock;

pub use groq::{GroqCompletionProvider, GroqConfig};
pub use mock::MockCompletionProvider;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Upstream API error {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Chat-completion backend behind the mind map handler.
///
/// `complete` sends one system prompt plus one user query and resolves to
/// the raw Markdown the model produced. Implementations must never resolve
/// to an empty string; an empty or absent completion is a
/// [`ProviderError::InvalidResponse`].
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider label used in logs and metrics.
    fn name(&self) -> &'static str;

    async fn complete(&self, system_prompt: &str, query: &str) -> Result<String, ProviderError>;

    /// Cheap readiness probe. Checks configuration rather than calling the
    /// upstream, so readiness never burns quota.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
