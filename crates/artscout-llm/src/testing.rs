//! Test doubles for the completion client.

use crate::client::CompletionClient;
use crate::error::LlmError;
use std::sync::Mutex;

/// Replies with a fixed answer (or a fixed API error) and records every
/// prompt it was sent.
pub struct CannedClient {
    reply: Result<String, u16>,
    pub prompts: Mutex<Vec<String>>,
}

impl CannedClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl CompletionClient for CannedClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LlmError::Api {
                status: *status,
                body: r#"{"type":"error","error":{"type":"rate_limit_error"}}"#.into(),
            }),
        }
    }

    fn model_id(&self) -> &str {
        "canned-model"
    }
}
