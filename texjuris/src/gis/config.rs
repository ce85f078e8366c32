//! Resolver configuration: ordered endpoint lists.

/// Primary TxDOT city boundaries feature service.
pub const TXDOT_CITIES_URL: &str = "https://services.arcgis.com/KTcxiTD9dsQw4r7Z/arcgis/rest/services/TxDOT_City_Boundaries/FeatureServer/0/query";

/// Primary TxDOT county boundaries feature service.
pub const TXDOT_COUNTIES_URL: &str = "https://services.arcgis.com/KTcxiTD9dsQw4r7Z/arcgis/rest/services/Texas_County_Boundaries_Detailed/FeatureServer/0/query";

/// TxDOT map-server fallback for city boundaries.
pub const FALLBACK_CITIES_URL: &str =
    "https://maps.dot.state.tx.us/arcgis/rest/services/General/Cities/MapServer/0/query";

/// TxDOT map-server fallback for county boundaries.
pub const FALLBACK_COUNTIES_URL: &str =
    "https://maps.dot.state.tx.us/arcgis/rest/services/Boundaries/MapServer/1/query";

/// Census Bureau TIGERweb places backup for city boundaries.
pub const CENSUS_PLACES_URL: &str = "https://tigerweb.geo.census.gov/arcgis/rest/services/TIGERweb/Places_CouSub_ConCity_SubMCD/MapServer/0/query";

/// Census Bureau TIGERweb backup for county boundaries.
pub const CENSUS_COUNTIES_URL: &str =
    "https://tigerweb.geo.census.gov/arcgis/rest/services/TIGERweb/State_County/MapServer/1/query";

/// Ordered endpoint lists for the resolver.
///
/// Endpoints are tried front to back; the first one returning usable data
/// wins. The defaults cover Texas; tests substitute shorter lists.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// City boundary endpoints, most authoritative first.
    pub city_endpoints: Vec<String>,
    /// County boundary endpoints, most authoritative first.
    pub county_endpoints: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            city_endpoints: vec![
                TXDOT_CITIES_URL.to_string(),
                FALLBACK_CITIES_URL.to_string(),
                CENSUS_PLACES_URL.to_string(),
            ],
            county_endpoints: vec![
                TXDOT_COUNTIES_URL.to_string(),
                FALLBACK_COUNTIES_URL.to_string(),
                CENSUS_COUNTIES_URL.to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_order() {
        let config = ResolverConfig::default();
        assert_eq!(config.city_endpoints.len(), 3);
        assert_eq!(config.county_endpoints.len(), 3);
        assert_eq!(config.city_endpoints[0], TXDOT_CITIES_URL);
        assert_eq!(config.county_endpoints[0], TXDOT_COUNTIES_URL);
        assert!(config.city_endpoints[2].contains("census.gov"));
        assert!(config.county_endpoints[2].contains("census.gov"));
    }
}
