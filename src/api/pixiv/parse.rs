use serde::Deserialize;

use super::data::IllustResponse;

/// Errors that can occur while turning a response body into a page.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The body is not the JSON document we expect
    #[error("malformed page body: {0}")]
    Json(#[from] serde_json::Error),
    /// The body is a well-formed error document sent by the server
    #[error("server error: {message}")]
    Api { message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorDetail {
    user_message: String,
    message: String,
    reason: String,
}

impl ErrorDetail {
    /// The most specific of the messages the server filled in.
    fn into_message(self) -> String {
        [self.user_message, self.message, self.reason]
            .into_iter()
            .find(|m| !m.is_empty())
            .unwrap_or_else(|| "unknown error".to_string())
    }
}

/// Parses a raw feed response body into an [`IllustResponse`].
///
/// Error documents (`{"error": {...}}`) are reported as [`ParseError::Api`]
/// rather than as a schema mismatch.
pub fn parse_illust_page(body: &str) -> Result<IllustResponse, ParseError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("error").is_some() {
        let body = ErrorBody::deserialize(value)?;
        return Err(ParseError::Api {
            message: body.error.into_message(),
        });
    }

    Ok(IllustResponse::deserialize(value)?)
}
