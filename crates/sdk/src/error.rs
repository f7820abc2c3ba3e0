//! Error types for the Litcal SDK.

use litcal_core::LitcalError;
use serde::Deserialize;

/// Result type for SDK operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Longest response body kept in an error message.
const MAX_MESSAGE_LEN: usize = 500;

/// Error types that can occur when calling the API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// DNS, TLS or socket failure before a response arrived.
    #[error("Connection error: {0}")]
    Connection(String),

    /// API returned a non-success status.
    #[error("API error (status {status}): {message}")]
    Http { status: u16, message: String },

    /// The body was not JSON of the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Create an HTTP error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(ErrorResponse::into_message)
            .unwrap_or_else(|| body.trim().to_string());

        Self::Http {
            status,
            message: truncate(message),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Malformed(err.to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Connection(err.to_string())
        }
    }
}

impl From<ApiError> for LitcalError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Timeout => Self::UpstreamTimeout,
            ApiError::Connection(message) => Self::UpstreamConnection(message),
            ApiError::Http { status, message } => Self::UpstreamHttp { status, message },
            ApiError::Malformed(message) => Self::MalformedUpstreamResponse(message),
            ApiError::Config(message) => Self::Internal(message),
            ApiError::InvalidUrl(e) => Self::Internal(e.to_string()),
        }
    }
}

/// Error body of the API, when it sends one.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    response: Option<String>,
}

impl ErrorResponse {
    fn into_message(self) -> Option<String> {
        self.description
            .or(self.error)
            .or(self.response)
            .filter(|m| !m.is_empty())
    }
}

fn truncate(mut message: String) -> String {
    if message.len() > MAX_MESSAGE_LEN {
        let mut end = MAX_MESSAGE_LEN;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
        message.push('…');
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_json_body() {
        let err = ApiError::from_response(
            404,
            r#"{"status":"ERROR","response":"Not Found","description":"no such diocese"}"#,
        );
        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "no such diocese");
            }
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_response_plain_body() {
        let err = ApiError::from_response(502, "  Bad Gateway\n");
        assert_eq!(err.to_string(), "API error (status 502): Bad Gateway");
    }

    #[test]
    fn test_long_body_is_truncated() {
        let err = ApiError::from_response(500, &"é".repeat(600));
        match err {
            ApiError::Http { message, .. } => {
                assert!(message.len() <= MAX_MESSAGE_LEN + '…'.len_utf8());
                assert!(message.ends_with('…'));
            }
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_litcal_error() {
        assert_eq!(LitcalError::from(ApiError::Timeout), LitcalError::UpstreamTimeout);
        assert_eq!(
            LitcalError::from(ApiError::Http {
                status: 503,
                message: "down".to_string()
            }),
            LitcalError::UpstreamHttp {
                status: 503,
                message: "down".to_string()
            }
        );
        assert_eq!(
            LitcalError::from(ApiError::Malformed("eof".to_string())).kind(),
            "MalformedUpstreamResponse"
        );
        assert_eq!(
            LitcalError::from(ApiError::Connection("refused".to_string())).kind(),
            "UpstreamConnectionError"
        );
    }
}
