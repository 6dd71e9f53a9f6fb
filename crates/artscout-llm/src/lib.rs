pub mod analyze;
pub mod client;
pub mod error;
pub mod extract;
pub mod json;
pub mod prompt;

pub use analyze::analyze_artist;
pub use client::{AnthropicClient, CompletionClient};
pub use error::LlmError;
pub use extract::extract_profile;

#[cfg(test)]
pub(crate) mod testing;
