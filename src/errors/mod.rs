//! Error handling module for the DLS console.
//!
//! Every failure path of the console is a variant of [`ConsoleError`]: the
//! client returns it, refresh functions leave their mount untouched when they
//! see it, and the console server maps it onto an HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const UNEXPECTED_STATUS: &str = "UNEXPECTED_STATUS";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const INVALID_REFERENCE: &str = "INVALID_REFERENCE";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
}

/// Console error type.
#[derive(Debug)]
pub enum ConsoleError {
    /// The request never produced a response (connect, TLS, timeout, ...)
    Transport(String),
    /// The backend answered with a status other than the expected one
    Status { status: u16, body: String },
    /// The response body was not the JSON we expected
    Decode(String),
    /// An origin or lease reference was empty or otherwise unusable
    InvalidReference(String),
    /// Configuration could not be loaded
    Config(String),
    /// Local I/O failed (terminal, listener socket)
    Io(String),
}

impl ConsoleError {
    /// Get the HTTP status code the console server answers with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ConsoleError::Transport(_) => StatusCode::BAD_GATEWAY,
            ConsoleError::Status { .. } => StatusCode::BAD_GATEWAY,
            ConsoleError::Decode(_) => StatusCode::BAD_GATEWAY,
            ConsoleError::InvalidReference(_) => StatusCode::BAD_REQUEST,
            ConsoleError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ConsoleError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleError::Transport(_) => codes::TRANSPORT_ERROR,
            ConsoleError::Status { .. } => codes::UNEXPECTED_STATUS,
            ConsoleError::Decode(_) => codes::DECODE_ERROR,
            ConsoleError::InvalidReference(_) => codes::INVALID_REFERENCE,
            ConsoleError::Config(_) => codes::CONFIG_ERROR,
            ConsoleError::Io(_) => codes::IO_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ConsoleError::Transport(msg) => msg.clone(),
            ConsoleError::Status { status, body } if body.is_empty() => {
                format!("backend answered {}", status)
            }
            ConsoleError::Status { status, body } => {
                format!("backend answered {}: {}", status, body)
            }
            ConsoleError::Decode(msg) => msg.clone(),
            ConsoleError::InvalidReference(msg) => msg.clone(),
            ConsoleError::Config(msg) => msg.clone(),
            ConsoleError::Io(msg) => msg.clone(),
        }
    }

    /// The backend status code, if the backend answered at all.
    pub fn backend_status(&self) -> Option<u16> {
        match self {
            ConsoleError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ConsoleError {}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        ConsoleError::Transport(format!("Transport error: {}", err))
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ConsoleError::Decode(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {:?}", err);
        ConsoleError::Io(format!("I/O error: {}", err))
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_status: Option<u16>,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &ConsoleError) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
                backend_status: error.backend_status(),
            },
        }
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}
