use crate::client::CompletionClient;
use crate::error::LlmError;
use crate::json;
use crate::prompt;
use artscout_model::Artist;
use serde_json::Value;

/// Ask the model to turn scraped website text into an artist profile.
///
/// Returns `None` when the call fails or the reply holds no usable JSON
/// object; the reason is logged. The profile's `name` is always the
/// requested name and its `website` is the scraped base URL.
pub async fn extract_profile(
    client: &dyn CompletionClient,
    artist_name: &str,
    base_url: &str,
    website_text: &str,
) -> Option<Artist> {
    tracing::info!(artist = %artist_name, model = client.model_id(), "Extracting profile");

    match request_profile(client, artist_name, website_text).await {
        Ok(mut reply) => {
            reply.insert("name".into(), Value::from(artist_name));
            reply.insert("website".into(), Value::from(base_url));
            let artist = Artist::from_extracted(artist_name, &Value::Object(reply));
            tracing::info!(artist = %artist_name, "Extracted profile");
            Some(artist)
        }
        Err(e) => {
            tracing::warn!(artist = %artist_name, error = %e, "Profile extraction failed");
            None
        }
    }
}

async fn request_profile(
    client: &dyn CompletionClient,
    artist_name: &str,
    website_text: &str,
) -> Result<serde_json::Map<String, Value>, LlmError> {
    let prompt = prompt::extraction_prompt(artist_name, website_text);
    let reply = client.complete(&prompt).await?;
    json::parse_reply(&reply)
}
