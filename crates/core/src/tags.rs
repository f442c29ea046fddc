//! Codec for the `videos.tags` column, which stores a JSON array of labels as text.

use serde::Serialize;

/// Tag payload as returned to clients.
///
/// `Raw` carries a stored value that did not decode as a JSON array of strings;
/// it is passed through unchanged instead of failing the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tags {
    Labels(Vec<String>),
    Raw(String),
}

impl Tags {
    /// Labels if the stored value decoded, `None` for a raw pass-through.
    pub fn labels(&self) -> Option<&[String]> {
        match self {
            Self::Labels(labels) => Some(labels),
            Self::Raw(_) => None,
        }
    }
}

/// Encode labels for storage. Order is preserved.
pub fn encode_tags(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored column value into labels.
pub fn decode_tags(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}
