//! Typed error handling for the paging engine
//!
//! The taxonomy separates wiring defects from per-request failures:
//!
//! - `Configuration`: a record type reached the paginated path without a
//!   usable default-sort declaration. Fatal at integration time; never
//!   swallowed or retried.
//! - `PageOutOfRange`: `page` or `pageSize` outside the allowed bounds.
//!   Both parameters are rejected (never clamped), uniformly.
//! - `MalformedFilter` / `FilterValue`: the filter payload is not a JSON
//!   object, or a known field received a value that cannot become its
//!   native type. Client errors.
//! - `UnknownField`: a field name did not resolve on a record type. Only
//!   surfaced where the call site treats it as fatal; sorting falls back
//!   to the default instead, and filtering skips the key.
//! - `Store`: the backing source failed while counting or materializing.
//!
//! Per-request errors become a structured client-facing body carrying a
//! taxonomy code, a message and the request path, without internal detail.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors produced by the paging/sorting/filtering engine
#[derive(Debug)]
pub enum PagingError {
    /// A record type lacks a usable default-sort declaration
    Configuration {
        resource: &'static str,
        message: String,
    },

    /// page or pageSize outside the allowed bounds
    PageOutOfRange {
        parameter: &'static str,
        value: String,
    },

    /// The filter payload is not a JSON object of field/value pairs
    MalformedFilter {
        message: String,
    },

    /// A known filter field received an incoercible value
    FilterValue {
        field: String,
        value: serde_json::Value,
    },

    /// A field name did not resolve on the record type
    UnknownField {
        resource: &'static str,
        field: String,
    },

    /// The backing store failed during a read
    Store {
        message: String,
    },
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagingError::Configuration { resource, message } => {
                write!(f, "Record type '{}' is misconfigured: {}", resource, message)
            }
            PagingError::PageOutOfRange { parameter, value } => {
                write!(f, "Invalid value '{}' for parameter '{}'", value, parameter)
            }
            PagingError::MalformedFilter { message } => {
                write!(f, "Malformed filter payload: {}", message)
            }
            PagingError::FilterValue { field, value } => {
                write!(f, "Filter value {} cannot be applied to field '{}'", value, field)
            }
            PagingError::UnknownField { resource, field } => {
                write!(f, "Unknown field '{}' on '{}'", field, resource)
            }
            PagingError::Store { message } => {
                write!(f, "Store read failed: {}", message)
            }
        }
    }
}

impl std::error::Error for PagingError {}

/// Error response body for HTTP responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Taxonomy code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request path, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl PagingError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PagingError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            PagingError::PageOutOfRange { .. } => StatusCode::BAD_REQUEST,
            PagingError::MalformedFilter { .. } => StatusCode::BAD_REQUEST,
            PagingError::FilterValue { .. } => StatusCode::BAD_REQUEST,
            PagingError::UnknownField { .. } => StatusCode::BAD_REQUEST,
            PagingError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the taxonomy code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PagingError::Configuration { .. } => "CONFIGURATION_ERROR",
            PagingError::PageOutOfRange { .. } => "PAGING_RANGE",
            PagingError::MalformedFilter { .. } => "MALFORMED_FILTER",
            PagingError::FilterValue { .. } => "FILTER_VALUE",
            PagingError::UnknownField { .. } => "UNKNOWN_FIELD",
            PagingError::Store { .. } => "STORE_ERROR",
        }
    }

    /// Convert to a response body, optionally tagged with the request path
    pub fn body(&self, path: Option<&str>) -> ErrorBody {
        ErrorBody {
            code: self.error_code().to_string(),
            message: self.to_string(),
            path: path.map(String::from),
        }
    }

    /// Build the HTTP response for this error at a known request path
    pub fn into_response_at(self, path: &str) -> Response {
        let status = self.status_code();
        let body = Json(self.body(Some(path)));
        (status, body).into_response()
    }
}

impl IntoResponse for PagingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.body(None));
        (status, body).into_response()
    }
}

impl From<anyhow::Error> for PagingError {
    fn from(err: anyhow::Error) -> Self {
        PagingError::Store {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for engine operations
pub type PagingResult<T> = Result<T, PagingError>;
