use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything we know about one artist, as extracted from their website
/// or entered by hand.
///
/// `name` is the only required field and the only uniqueness key in the
/// store. Every other field is optional because the model is free to leave
/// any of them out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    pub name: String,
    /// Degrees and institutions (e.g., "BFA Yale, MFA RISD").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Style and medium (e.g., "Abstract painting, mixed media").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_representation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exhibition_history: Option<ExhibitionHistory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// The decoded model reply this record was built from, kept verbatim so
    /// fields without a column (career stage, achievements) survive.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub raw_data: Value,
}

/// Exhibition history comes back from the model either as prose or as a
/// list of shows. Lists are kept as lists all the way through the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExhibitionHistory {
    List(Vec<Value>),
    Text(String),
}

/// An artist row as read back from the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredArtist {
    pub artist_id: i64,
    #[serde(flatten)]
    pub artist: Artist,
    /// RFC 3339 timestamp of the last write for this name.
    pub data_collected_date: String,
}

impl Artist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            education: None,
            art_style: None,
            gallery_representation: None,
            exhibition_history: None,
            website: None,
            raw_data: Value::Null,
        }
    }

    /// Build an artist from a decoded extraction reply.
    ///
    /// Field decoding is lenient: strings are taken as-is, `null` and
    /// missing keys become `None`, and any other value is kept as its
    /// compact JSON text. The whole object is retained as `raw_data`.
    pub fn from_extracted(name: &str, value: &Value) -> Self {
        Self {
            name: name.to_string(),
            education: text_field(value, "education"),
            art_style: text_field(value, "art_style"),
            gallery_representation: text_field(value, "gallery_representation"),
            exhibition_history: value
                .get("exhibition_history")
                .and_then(ExhibitionHistory::from_value),
            website: text_field(value, "website"),
            raw_data: value.clone(),
        }
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl ExhibitionHistory {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Array(items) => Some(Self::List(items.clone())),
            Value::String(s) => Some(Self::Text(s.clone())),
            other => Some(Self::Text(other.to_string())),
        }
    }

    /// Text stored in the `exhibition_history` column. Lists are written as
    /// JSON arrays.
    pub fn to_column(&self) -> String {
        match self {
            Self::List(items) => Value::Array(items.clone()).to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Inverse of [`to_column`](Self::to_column). Only text that starts with
    /// `[` and decodes as a JSON array becomes a list; anything else is
    /// returned unchanged.
    pub fn from_column(column: &str) -> Self {
        if column.starts_with('[') {
            if let Ok(items) = serde_json::from_str::<Vec<Value>>(column) {
                return Self::List(items);
            }
        }
        Self::Text(column.to_string())
    }

    /// Human-readable rendering for prompts and console output.
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
