use reqwest::StatusCode;
use thiserror::Error;

pub const FALLBACK_MESSAGE: &str = "Failed to fetch domain information";

/// Every failure a lookup can hit. `Display` is the text shown to the user.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl LookupError {
    /// Builds an API error from a non-success response body.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        LookupError::Api {
            status,
            message: error_message(body),
        }
    }
}

fn non_empty_str<'a>(body: &'a serde_json::Map<String, serde_json::Value>, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}

/// `detail`, then `error`, then the fallback. Only a JSON object counts.
pub(crate) fn error_message(body: &[u8]) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_slice(body).ok();
    parsed
        .as_ref()
        .and_then(|value| value.as_object())
        .and_then(|object| non_empty_str(object, "detail").or_else(|| non_empty_str(object, "error")))
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}
