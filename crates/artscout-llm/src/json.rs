use crate::error::LlmError;
use serde::de::DeserializeOwned;

/// The text from the first `{` to the last `}` of a model reply, inclusive.
///
/// Models wrap JSON in prose or code fences often enough that this is the
/// only part of the reply we try to decode.
pub fn json_span(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (end > start).then(|| &reply[start..=end])
}

/// Decode the brace span of `reply` as `T`.
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, LlmError> {
    let span = json_span(reply).ok_or(LlmError::NoJsonObject)?;
    Ok(serde_json::from_str(span)?)
}
