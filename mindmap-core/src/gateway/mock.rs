//! Mock provider implementation for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionProvider, ProviderError};

/// Mock completion provider for testing.
///
/// Resolves every call with a canned outcome and records the prompts it
/// was asked to complete, so tests can assert both the response contract
/// and whether the upstream was reached at all.
pub struct MockCompletionProvider {
    outcome: Result<String, ProviderError>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub query: String,
}

impl MockCompletionProvider {
    pub fn with_markdown(markdown: impl Into<String>) -> Self {
        Self {
            outcome: Ok(markdown.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_error(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock call log poisoned").len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, system_prompt: &str, query: &str) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall {
                system_prompt: system_prompt.to_string(),
                query: query.to_string(),
            });

        self.outcome.clone()
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.outcome {
            Ok(_) => Ok(()),
            Err(ProviderError::NotConfigured(msg)) => {
                Err(ProviderError::NotConfigured(msg.clone()))
            }
            Err(_) => Ok(()),
        }
    }
}
