//! Error types for GIS feature-service queries.
//!
//! These errors are all recoverable at the resolver level: a failing
//! endpoint just means the next endpoint in the list is tried. They never
//! propagate past [`crate::gis::GisResolver`].

use thiserror::Error;

/// Errors that can occur while querying a single GIS endpoint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GisError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Endpoint answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body was not valid JSON for the expected shape.
    #[error("Failed to parse response: {0}")]
    Json(String),

    /// Endpoint returned a well-formed error payload.
    #[error("GIS service error {code}: {message}")]
    Service { code: i64, message: String },
}
