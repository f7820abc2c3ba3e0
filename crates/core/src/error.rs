// Error kinds surfaced at the tool-call boundary

use crate::types::CalendarType;

/// Result type for calendar operations.
pub type LitcalResult<T> = Result<T, LitcalError>;

/// Everything that can go wrong while serving a tool call.
///
/// None of these are fatal to the server: each one is rendered as an error
/// block and handed back to the agent as the tool output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LitcalError {
    /// A tool argument failed validation.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The nation or diocese is not in the upstream listing.
    #[error("{kind} calendar not found for: {id}")]
    UnknownCalendar {
        kind: CalendarType,
        id: String,
        available: Vec<String>,
    },

    /// The upstream request exceeded the configured timeout.
    #[error("upstream request timed out")]
    UpstreamTimeout,

    /// The upstream API could not be reached.
    #[error("could not reach the upstream API: {0}")]
    UpstreamConnection(String),

    /// The upstream API answered with a non-success status.
    #[error("upstream API returned HTTP {status}: {message}")]
    UpstreamHttp { status: u16, message: String },

    /// The upstream payload was not the JSON we expected.
    #[error("malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    /// The requested day has no celebration in the calendar.
    #[error("no liturgical celebrations found for {date}")]
    NoCelebrations { date: String },

    /// Client construction or other local failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LitcalError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Stable name of the error kind, shown in error blocks.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "InvalidParameter",
            Self::UnknownCalendar { .. } => "UnknownCalendar",
            Self::UpstreamTimeout => "UpstreamTimeout",
            Self::UpstreamConnection(_) => "UpstreamConnectionError",
            Self::UpstreamHttp { .. } => "UpstreamHTTPError",
            Self::MalformedUpstreamResponse(_) => "MalformedUpstreamResponse",
            Self::NoCelebrations { .. } => "NoCelebrations",
            Self::Internal(_) => "Internal",
        }
    }
}
