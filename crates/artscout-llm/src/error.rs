use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("environment variable {0} not set")]
    MissingApiKey(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response contained no text content")]
    EmptyResponse,

    #[error("no JSON object found in model reply")]
    NoJsonObject,

    #[error("could not decode model reply: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
