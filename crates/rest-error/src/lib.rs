// SPDX-License-Identifier: MIT OR Apache-2.0
//! Serializable error values for HTTP-facing services.
//!
//! A [`RestError`] carries a human-readable message, a numeric status code,
//! a machine-readable kind token and a flat, ordered list of cause strings.
//! Values are built through the constructors on [`RestError`] and are
//! read-only afterwards.
//!
//! Two representations are stable across releases:
//!
//! * the rendered string (see [`RestError::render`]), and
//! * the JSON body `{"message", "status_code", "error", "causes"}`
//!   (see [`RestErrorBody`]).
//!
//! ```
//! use rest_error::RestError;
//!
//! let err = RestError::not_found("user 42 not found");
//! assert_eq!(err.status_code(), 404);
//! assert_eq!(
//!     err.render(),
//!     "message: user 42 not found - status: 404 - error: not_found - causes: []",
//! );
//!
//! let back = RestError::from_bytes(&err.to_bytes()).unwrap();
//! assert_eq!(back, err);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// The well-known failure families and their fixed `(status, kind)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// 400, `bad_request`.
    BadRequest,
    /// 401, `unauthorized`.
    Unauthorized,
    /// 404, `not_found`.
    NotFound,
    /// 409, `conflict`.
    Conflict,
    /// 500, `internal_server_error`.
    InternalServerError,
}

impl Classification {
    /// Every classification, in ascending status-code order.
    pub const ALL: [Classification; 5] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::NotFound,
        Self::Conflict,
        Self::InternalServerError,
    ];

    /// Numeric status code for this classification.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::InternalServerError => 500,
        }
    }

    /// Stable kind token (e.g. `"not_found"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::InternalServerError => "internal_server_error",
        }
    }

    /// Look up a classification by status code.
    pub fn from_status_code(status_code: u16) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.status_code() == status_code)
    }

    /// Look up a classification by kind token.
    pub fn from_kind(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == kind)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RestError
// ---------------------------------------------------------------------------

/// A classified failure.
///
/// Equality compares message, status code, kind and causes element-wise.
/// The `Display` output is the canonical rendering, so a `RestError` can be
/// propagated with `?` and logged like any other [`std::error::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RestErrorBody", into = "RestErrorBody")]
pub struct RestError {
    message: String,
    status_code: u16,
    kind: String,
    causes: Vec<String>,
}

impl RestError {
    /// Generic constructor.
    ///
    /// The `(status_code, kind)` pair is taken as-is, without checking it
    /// against [`Classification`]. `None` causes yield an empty list.
    pub fn new(
        message: impl Into<String>,
        status_code: u16,
        kind: impl Into<String>,
        causes: Option<Vec<String>>,
    ) -> Self {
        Self {
            message: message.into(),
            status_code,
            kind: kind.into(),
            causes: causes.unwrap_or_default(),
        }
    }

    /// Build a value for one of the well-known classifications.
    pub fn from_classification(classification: Classification, message: impl Into<String>) -> Self {
        Self::new(
            message,
            classification.status_code(),
            classification.as_str(),
            None,
        )
    }

    /// 400 `bad_request`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from_classification(Classification::BadRequest, message)
    }

    /// 401 `unauthorized`.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_classification(Classification::Unauthorized, message)
    }

    /// 404 `not_found`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::from_classification(Classification::NotFound, message)
    }

    /// 409 `conflict`.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::from_classification(Classification::Conflict, message)
    }

    /// 500 `internal_server_error`.
    ///
    /// When `cause` is present its `Display` output becomes the only entry
    /// in [`causes`](Self::causes).
    pub fn internal_server_error(
        message: impl Into<String>,
        cause: Option<&dyn std::error::Error>,
    ) -> Self {
        let mut err = Self::from_classification(Classification::InternalServerError, message);
        if let Some(cause) = cause {
            err.causes.push(cause.to_string());
        }
        err
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Numeric status classification.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Machine-readable kind token.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Recorded causes in insertion order.
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    /// The well-known classification matching both status code and kind.
    ///
    /// Returns `None` for generic values whose pair is not in the table,
    /// including mismatched pairs such as `(404, "bad_request")`.
    pub fn classification(&self) -> Option<Classification> {
        Classification::from_kind(&self.kind).filter(|c| c.status_code() == self.status_code)
    }

    /// Canonical rendering:
    /// `message: {message} - status: {status} - error: {kind} - causes: [{causes}]`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "message: {} - status: {} - error: {} - causes: [{}]",
            self.message,
            self.status_code,
            self.kind,
            self.causes.join(", ")
        )
    }
}

impl std::error::Error for RestError {}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// JSON body of a [`RestError`].
///
/// `causes` may be absent or `null` on input; it is always written as an
/// array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RestErrorBody {
    /// Human-readable message.
    pub message: String,
    /// Numeric status classification.
    pub status_code: u16,
    /// Machine-readable kind token.
    pub error: String,
    /// Underlying cause descriptions, in order.
    #[serde(default)]
    pub causes: Option<Vec<String>>,
}

impl From<RestError> for RestErrorBody {
    fn from(err: RestError) -> Self {
        Self {
            message: err.message,
            status_code: err.status_code,
            error: err.kind,
            causes: Some(err.causes),
        }
    }
}

impl From<&RestError> for RestErrorBody {
    fn from(err: &RestError) -> Self {
        err.clone().into()
    }
}

impl From<RestErrorBody> for RestError {
    fn from(body: RestErrorBody) -> Self {
        Self::new(body.message, body.status_code, body.error, body.causes)
    }
}

/// JSON Schema (draft 2020-12) for [`RestErrorBody`].
pub fn wire_schema() -> serde_json::Value {
    schemars::schema_for!(RestErrorBody).to_value()
}

// ---------------------------------------------------------------------------
// Encoding / decoding
// ---------------------------------------------------------------------------

/// Failure to turn bytes back into a [`RestError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input is not JSON, or does not have the error body shape.
    #[error("malformed error payload: {reason}")]
    MalformedPayload {
        /// Parser detail.
        reason: String,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload {
            reason: err.to_string(),
        }
    }
}

impl RestError {
    /// Compact JSON body as a string.
    pub fn to_json(&self) -> String {
        let body = RestErrorBody::from(self);
        // A struct of strings, an integer and a string list always encodes.
        serde_json::to_string(&body).unwrap_or_default()
    }

    /// Compact JSON body as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_json().into_bytes()
    }

    /// Strictly decode a JSON body.
    ///
    /// `message`, `status_code` and `error` are required; `causes` may be
    /// missing or `null`. Unknown fields are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let body: RestErrorBody = serde_json::from_slice(bytes)?;
        Ok(body.into())
    }

    /// Decode a JSON body, falling back to a `bad_request` whose message is
    /// the raw input (lossily read as UTF-8) when strict decoding fails.
    pub fn from_bytes_lossy(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
            .unwrap_or_else(|_| Self::bad_request(String::from_utf8_lossy(bytes).into_owned()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
