//! Service error types.

use crate::coord::CoordError;
use crate::gis::GisError;
use std::fmt;

/// Errors that can surface from a jurisdiction lookup.
///
/// Per-endpoint GIS failures never appear here; they are absorbed by the
/// resolver's fallback. Callers see either an input validation error or a
/// single generic lookup failure.
#[derive(Debug)]
pub enum JurisdictionError {
    /// The input coordinate failed validation.
    InvalidCoordinates(CoordError),
    /// The HTTP client could not be constructed.
    HttpClient(GisError),
    /// Unexpected failure while aggregating the result.
    LookupFailed(String),
}

impl fmt::Display for JurisdictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinates(e) => write!(f, "Invalid coordinates: {}", e),
            Self::HttpClient(e) => write!(f, "HTTP client error: {}", e),
            Self::LookupFailed(msg) => {
                write!(f, "Failed to determine jurisdiction: {}", msg)
            }
        }
    }
}

impl std::error::Error for JurisdictionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCoordinates(e) => Some(e),
            Self::HttpClient(e) => Some(e),
            Self::LookupFailed(_) => None,
        }
    }
}

impl From<CoordError> for JurisdictionError {
    fn from(e: CoordError) -> Self {
        Self::InvalidCoordinates(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_coordinates() {
        let err = JurisdictionError::InvalidCoordinates(CoordError::InvalidLatitude(95.0));
        assert!(err.to_string().contains("Invalid coordinates"));
        assert!(err.to_string().contains("95"));
    }

    #[test]
    fn test_display_lookup_failed() {
        let err = JurisdictionError::LookupFailed("both resolutions failed".to_string());
        assert!(err
            .to_string()
            .contains("Failed to determine jurisdiction"));
    }

    #[test]
    fn test_from_coord_error() {
        let err: JurisdictionError = CoordError::InvalidLongitude(200.0).into();
        assert!(matches!(err, JurisdictionError::InvalidCoordinates(_)));
    }

    #[test]
    fn test_error_trait() {
        let err = JurisdictionError::LookupFailed("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
