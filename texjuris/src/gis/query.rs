//! Esri point-in-polygon query construction.

use crate::coord::Coordinate;

/// Builds a "within" spatial query URL for a feature-service endpoint.
///
/// Parameters follow the ArcGIS REST query convention: the geometry is
/// `<lon>,<lat>` in WGS84 (`inSR=4326`), geometry is not echoed back, and
/// all attribute fields are requested so the caller can search
/// heterogeneous schemas.
pub fn point_query_url(endpoint: &str, coord: Coordinate) -> String {
    format!(
        "{endpoint}?f=json\
         &geometry={lon}%2C{lat}\
         &geometryType=esriGeometryPoint\
         &inSR=4326\
         &spatialRel=esriSpatialRelWithin\
         &outFields=*\
         &returnGeometry=false\
         &where=1%3D1",
        endpoint = endpoint,
        lon = coord.longitude,
        lat = coord.latitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_construction() {
        let coord = Coordinate::new(29.885, -93.94).unwrap();
        let url = point_query_url("https://example.com/FeatureServer/0/query", coord);

        assert!(url.starts_with("https://example.com/FeatureServer/0/query?f=json"));
        assert!(url.contains("geometry=-93.94%2C29.885"));
        assert!(url.contains("geometryType=esriGeometryPoint"));
        assert!(url.contains("inSR=4326"));
        assert!(url.contains("spatialRel=esriSpatialRelWithin"));
        assert!(url.contains("outFields=*"));
        assert!(url.contains("returnGeometry=false"));
        assert!(url.contains("where=1%3D1"));
    }

    #[test]
    fn test_longitude_precedes_latitude() {
        let coord = Coordinate::new(30.0, -97.0).unwrap();
        let url = point_query_url("https://example.com/query", coord);
        assert!(url.contains("geometry=-97%2C30"));
    }
}
