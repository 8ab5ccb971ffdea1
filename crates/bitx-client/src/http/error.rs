/*
[INPUT]:  Error sources (transport failures, API error bodies, serialization)
[OUTPUT]: Unified error type carrying message, code and HTTP status
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Main error type for the BitX client
#[derive(Error, Debug)]
pub enum BitxError {
    /// The HTTP exchange itself failed (connection error or non-2xx status).
    ///
    /// `status` is 0 when no response was received.
    #[error("{message}")]
    Transport { message: String, status: u16 },

    /// The API answered with an `error` object
    #[error("{message}")]
    Api {
        message: String,
        code: ErrorCode,
        status: u16,
    },

    /// A value could not be decoded into the requested model
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Composed request URL could not be parsed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Building the underlying HTTP client failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl BitxError {
    /// Build an application error from the decoded `error` / `error_code` fields.
    pub fn api_error(error: &Value, error_code: Option<&Value>, status: u16) -> Self {
        let code = error_code.map(ErrorCode::from_value).unwrap_or(ErrorCode::Missing);
        BitxError::Api {
            message: format!("{} ({})", value_text(error), code),
            code,
            status,
        }
    }

    /// Human readable message, as carried by the unified API error record
    pub fn message(&self) -> String {
        match self {
            BitxError::Transport { message, .. } | BitxError::Api { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    /// Application or transport error code.
    ///
    /// Transport failures report their HTTP status as the code.
    pub fn code(&self) -> ErrorCode {
        match self {
            BitxError::Api { code, .. } => code.clone(),
            BitxError::Transport { status, .. } => ErrorCode::Number(i64::from(*status)),
            _ => ErrorCode::Missing,
        }
    }

    /// HTTP status of the response that produced this error, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            BitxError::Api { status, .. } => Some(*status),
            BitxError::Transport { status, .. } if *status != 0 => Some(*status),
            _ => None,
        }
    }

    /// Check if the HTTP exchange itself failed
    pub fn is_transport(&self) -> bool {
        matches!(self, BitxError::Transport { .. })
    }

    /// Check if the API returned an error body
    pub fn is_api(&self) -> bool {
        matches!(self, BitxError::Api { .. })
    }
}

/// `error_code` value reported by the API: numeric or textual
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Number(i64),
    Text(String),
    Missing,
}

impl ErrorCode {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => ErrorCode::Missing,
            Value::Number(n) => match n.as_i64() {
                Some(n) => ErrorCode::Number(n),
                None => ErrorCode::Text(n.to_string()),
            },
            other => ErrorCode::Text(value_text(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Number(n) => write!(f, "{n}"),
            ErrorCode::Text(s) => f.write_str(s),
            ErrorCode::Missing => Ok(()),
        }
    }
}

// Strings render without their JSON quotes.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        other => other.to_string(),
    }
}

/// Result type alias for BitX operations
pub type Result<T> = std::result::Result<T, BitxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_message_with_numeric_code() {
        let err = BitxError::api_error(&json!("Something bad"), Some(&json!(123)), 200);
        assert_eq!(err.to_string(), "Something bad (123)");
        assert_eq!(err.code(), ErrorCode::Number(123));
        assert_eq!(err.http_status(), Some(200));
        assert!(err.is_api());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_api_error_message_with_text_code() {
        let err = BitxError::api_error(&json!("Invalid pair"), Some(&json!("ErrInvalidPair")), 400);
        assert_eq!(err.message(), "Invalid pair (ErrInvalidPair)");
        assert_eq!(err.code(), ErrorCode::Text("ErrInvalidPair".to_string()));
    }

    #[test]
    fn test_api_error_without_code() {
        let err = BitxError::api_error(&json!("Oops"), None, 500);
        assert_eq!(err.message(), "Oops ()");
        assert_eq!(err.code(), ErrorCode::Missing);
    }

    #[test]
    fn test_transport_error_reports_status_as_code() {
        let err = BitxError::Transport {
            message: "Client error: 404 Not Found".to_string(),
            status: 404,
        };
        assert!(err.is_transport());
        assert_eq!(err.code(), ErrorCode::Number(404));
        assert_eq!(err.http_status(), Some(404));
    }

    #[test]
    fn test_transport_error_without_response() {
        let err = BitxError::Transport {
            message: "connection refused".to_string(),
            status: 0,
        };
        assert_eq!(err.http_status(), None);
        assert_eq!(err.code(), ErrorCode::Number(0));
    }
}
