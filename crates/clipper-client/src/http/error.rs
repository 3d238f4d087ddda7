/*
[INPUT]:  Transport failures (error responses, unreachable server, local errors)
[OUTPUT]: The normalized ApiError surfaced by every client operation
[POS]:    Error handling layer - single error shape for the entire crate
[UPDATE]: When adding error codes or changing the classification order
*/

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Message used when a request was sent but no response ever came back.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";

/// Message used when the caught failure is not recognizable at all.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Last-resort message for an error response that carried no message.
pub const GENERIC_ERROR_MESSAGE: &str = "Unknown error";

/// Machine-readable error code
///
/// Callers should branch on this rather than on status or message text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    Unauthorized,
    Forbidden,
    Conflict,
    NetworkError,
    ClientError,
    UnknownError,
    /// Any other code the server put in its error envelope, kept verbatim
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::ClientError => "CLIENT_ERROR",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
            ErrorCode::Other(code) => code,
        }
    }

    /// Parse a code as it appears on the wire
    pub fn from_wire(code: &str) -> Self {
        match code {
            "NOT_FOUND" => ErrorCode::NotFound,
            "VALIDATION_ERROR" => ErrorCode::ValidationError,
            "UNAUTHORIZED" => ErrorCode::Unauthorized,
            "FORBIDDEN" => ErrorCode::Forbidden,
            "CONFLICT" => ErrorCode::Conflict,
            "NETWORK_ERROR" => ErrorCode::NetworkError,
            "CLIENT_ERROR" => ErrorCode::ClientError,
            "UNKNOWN_ERROR" => ErrorCode::UnknownError,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(ErrorCode::from_wire(&code))
    }
}

/// Normalized error returned by every client operation
///
/// `status` is 0 when no HTTP response was ever received.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message} ({code}, status {status})")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }

    /// Check if error indicates missing or insufficient credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self.code, ErrorCode::Unauthorized | ErrorCode::Forbidden)
    }

    pub fn is_validation_error(&self) -> bool {
        self.code == ErrorCode::ValidationError
    }

    pub fn is_network_error(&self) -> bool {
        self.code == ErrorCode::NetworkError
    }
}

/// Conventional server error envelope: `{ "error": { code, message, details } }`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorEnvelope {
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    /// Parse a response body, returning `None` when it is not a JSON object
    ///
    /// Each field is read on its own: a `code` or `message` that is not a
    /// non-blank string counts as absent without affecting the others, and
    /// `details` is kept as sent.
    pub fn parse(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).ok()?;
        let root = value.as_object()?;
        let error = root.get("error").and_then(Value::as_object).map(|error| {
            let text = |key: &str| {
                error
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_string)
            };
            ErrorBody {
                code: text("code"),
                message: text("message"),
                details: error.get("details").filter(|d| !d.is_null()).cloned(),
            }
        });
        Some(Self { error })
    }
}

/// An HTTP response that was received but could not be returned as a success
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FailedResponse {
    pub status: u16,
    pub envelope: Option<ErrorEnvelope>,
    /// Message produced by the transport layer itself
    pub transport_message: Option<String>,
}

/// Everything known about a failed call at the point it was caught
///
/// The fields are independent so any combination can be represented;
/// [`TransportFailure::normalize`] resolves overlaps by precedence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportFailure {
    pub response: Option<FailedResponse>,
    pub request_sent: bool,
    pub source_message: Option<String>,
}

impl TransportFailure {
    /// A non-success status with its raw body
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        Self {
            response: Some(FailedResponse {
                status,
                envelope: ErrorEnvelope::parse(body),
                transport_message: Some(format!("Request failed with status code {status}")),
            }),
            request_sent: true,
            source_message: None,
        }
    }

    /// A success status whose body could not be decoded into the expected type
    pub fn undecodable(status: u16, err: &serde_json::Error) -> Self {
        Self {
            response: Some(FailedResponse {
                status,
                envelope: None,
                transport_message: Some(format!("Failed to decode response body: {err}")),
            }),
            request_sent: true,
            source_message: Some(err.to_string()),
        }
    }

    /// A request that went out and never got an answer
    pub fn no_response(message: impl Into<String>) -> Self {
        Self {
            response: None,
            request_sent: true,
            source_message: Some(message.into()),
        }
    }

    /// A failure raised before anything left the process
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            response: None,
            request_sent: false,
            source_message: Some(message.into()),
        }
    }

    /// Nothing recognizable was caught
    pub fn unrecognized() -> Self {
        Self::default()
    }

    /// Classify into the normalized error
    ///
    /// Precedence: response present, then request sent without response,
    /// then local error, then fallback.
    pub fn normalize(self) -> ApiError {
        if let Some(response) = self.response {
            let body = response.envelope.and_then(|envelope| envelope.error).unwrap_or_default();
            let code = body
                .code
                .as_deref()
                .filter(|code| !code.trim().is_empty())
                .map(ErrorCode::from_wire)
                .unwrap_or(ErrorCode::UnknownError);
            let message = body
                .message
                .filter(|message| !message.trim().is_empty())
                .or(response.transport_message)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
            return ApiError {
                code,
                message,
                status: response.status,
                details: body.details,
            };
        }

        if self.request_sent {
            return ApiError {
                code: ErrorCode::NetworkError,
                message: NETWORK_ERROR_MESSAGE.to_string(),
                status: 0,
                details: None,
            };
        }

        if let Some(message) = self.source_message {
            return ApiError {
                code: ErrorCode::ClientError,
                message,
                status: 0,
                details: None,
            };
        }

        ApiError {
            code: ErrorCode::UnknownError,
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            status: 0,
            details: None,
        }
    }
}

impl From<TransportFailure> for ApiError {
    fn from(failure: TransportFailure) -> Self {
        failure.normalize()
    }
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        // Builder errors happen while assembling the request; everything else
        // (connect, timeout, body, redirect) means it was already on the wire.
        if err.is_builder() {
            TransportFailure::local(err.to_string())
        } else {
            TransportFailure::no_response(err.to_string())
        }
    }
}

impl From<url::ParseError> for TransportFailure {
    fn from(err: url::ParseError) -> Self {
        TransportFailure::local(format!("Invalid request URL: {err}"))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
