//! Uniform HTTP response envelope shared by service handlers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CODE_SUCCESS: &str = "0";
pub const CODE_ERROR: &str = "1";
pub const MESSAGE_SUCCESS: &str = "success";

/// Error body carried by failed responses. Doubles as a service error type,
/// so handlers can return it through `Result`.
#[derive(Clone, Debug, Serialize, Deserialize, Error, PartialEq)]
#[error("http {http_code}, code {code}: {message}")]
pub struct ApiError {
    #[serde(rename = "httpCode")]
    pub http_code: u16,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    #[must_use]
    pub fn new(http_code: u16, code: &str, message: &str) -> Self {
        Self {
            http_code,
            code: code.to_owned(),
            message: message.to_owned(),
            data: None,
        }
    }

    /// 400 with the caller's message.
    #[must_use]
    pub fn bad_request(message: &str) -> Self {
        Self::new(400, CODE_ERROR, message)
    }

    /// 500 with the fixed status text; internal detail never reaches clients.
    #[must_use]
    pub fn internal() -> Self {
        Self::new(500, CODE_ERROR, "Internal Server Error")
    }
}

/// Response envelope: `code`/`message` plus an optional payload, omitted
/// from the wire when absent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            code: CODE_SUCCESS.to_owned(),
            message: MESSAGE_SUCCESS.to_owned(),
            data: Some(data),
        }
    }

    /// An error envelope carries the error's code and message and no data.
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            code: err.code.clone(),
            message: err.message.clone(),
            data: None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }
}

impl<T> From<Result<T, ApiError>> for Envelope<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::error(&err),
        }
    }
}
