//! Feature-service response model.
//!
//! The services return `{ features: [{ attributes: {...} }], error?: {...} }`.
//! Attribute schemas vary per provider, so attributes stay as raw JSON
//! values and the field search happens downstream. Unknown top-level fields
//! (geometry metadata, display field names) are ignored.

use super::error::GisError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// A single geographic feature. Only attributes are requested
/// (`returnGeometry=false`), so geometry is never deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Raw attribute map; values may be strings, numbers, or null.
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

/// Error payload some services embed in an HTTP 200 response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Top-level feature-service query response.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureSet {
    #[serde(default)]
    pub features: Vec<Feature>,
    pub error: Option<QueryError>,
}

/// Parses a response body into a [`FeatureSet`].
///
/// An embedded error payload is promoted to [`GisError::Service`] so the
/// resolver treats it like any other endpoint failure.
pub fn parse_feature_set(body: &[u8]) -> Result<FeatureSet, GisError> {
    let set: FeatureSet =
        serde_json::from_slice(body).map_err(|e| GisError::Json(e.to_string()))?;

    if let Some(err) = &set.error {
        return Err(GisError::Service {
            code: err.code,
            message: err.message.clone(),
        });
    }

    Ok(set)
}
