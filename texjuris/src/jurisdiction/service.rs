//! Jurisdiction lookup facade.

use super::error::JurisdictionError;
use super::types::{Agency, AgencyKind, Jurisdiction, JurisdictionResult};
use crate::coord::Coordinate;
use crate::gis::{GisResolver, HttpClient, ReqwestClient, ResolverConfig};
use crate::synth::{search_suggestions, SearchSuggestions};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Snapshot of the synthesis cache, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of cached synthesized records
    pub size: usize,
    /// Cache keys as `"city-county"` strings
    pub entries: Vec<String>,
}

/// Facade over GIS resolution, the contact directory, and the synthesizer.
///
/// One lookup issues a city resolution and a county resolution, then applies
/// the city-takes-precedence rule. The service is cheap to share by
/// reference; the only internal state is the synthesis cache.
pub struct JurisdictionService<C: HttpClient = ReqwestClient> {
    resolver: GisResolver<C>,
}

impl JurisdictionService<ReqwestClient> {
    /// Creates a service with the default HTTP client and Texas endpoints.
    pub fn new() -> Result<Self, JurisdictionError> {
        let client = ReqwestClient::new().map_err(JurisdictionError::HttpClient)?;
        Ok(Self::with_client(client))
    }

    /// Creates a service with a custom HTTP timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, JurisdictionError> {
        let client =
            ReqwestClient::with_timeout(timeout).map_err(JurisdictionError::HttpClient)?;
        Ok(Self::with_client(client))
    }
}

impl<C: HttpClient> JurisdictionService<C> {
    /// Creates a service around an existing HTTP client.
    pub fn with_client(client: C) -> Self {
        Self {
            resolver: GisResolver::new(client),
        }
    }

    /// Creates a service with custom endpoint lists.
    pub fn with_client_and_config(client: C, config: ResolverConfig) -> Self {
        Self {
            resolver: GisResolver::with_config(client, config),
        }
    }

    /// Determines which agency has jurisdiction over a coordinate.
    ///
    /// City and county are resolved independently; a city match makes the
    /// police department primary, otherwise the sheriff's office is. The
    /// county side always produces a record, so the result is never
    /// partial: exactly one jurisdiction type is selected.
    ///
    /// # Errors
    ///
    /// Returns [`JurisdictionError::InvalidCoordinates`] for out-of-range
    /// input. Endpoint failures do not error; they degrade to the statewide
    /// fallback.
    pub async fn jurisdiction_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<JurisdictionResult, JurisdictionError> {
        let coord = Coordinate::new(latitude, longitude)?;

        let city = self.resolver.resolve_city(coord).await;
        let county = self.resolver.resolve_county(coord).await;

        info!(
            coord = %coord,
            city = city.as_ref().map(|c| c.name.as_str()).unwrap_or("none"),
            county = %county.name,
            "jurisdiction resolved"
        );

        let result = match city {
            Some(city) => {
                let primary_agency = Agency {
                    name: format!("{} Police Department", city.name),
                    kind: AgencyKind::PoliceDepartment,
                    phone: city.police_phone.clone(),
                    website: city.police_website.clone(),
                    address: city.address.clone(),
                };
                JurisdictionResult {
                    coordinates: coord,
                    city: Some(city),
                    county,
                    jurisdiction: Jurisdiction::City,
                    primary_agency,
                }
            }
            None => {
                let primary_agency = Agency {
                    name: format!("{} Sheriff's Office", county.name),
                    kind: AgencyKind::SheriffsOffice,
                    phone: county.sheriff_phone.clone(),
                    website: county.sheriff_website.clone(),
                    address: county.address.clone(),
                };
                JurisdictionResult {
                    coordinates: coord,
                    city: None,
                    county,
                    jurisdiction: Jurisdiction::County,
                    primary_agency,
                }
            }
        };

        Ok(result)
    }

    /// Web-search suggestions for a city/county pair.
    pub fn search_suggestions(&self, city_name: &str, county_name: &str) -> SearchSuggestions {
        search_suggestions(city_name, county_name)
    }

    /// Clears the synthesis cache.
    pub fn clear_search_cache(&self) {
        self.resolver.cache().clear();
    }

    /// Snapshot of the synthesis cache contents.
    pub fn cache_stats(&self) -> CacheStats {
        let cache = self.resolver.cache();
        CacheStats {
            size: cache.len(),
            entries: cache.keys(),
        }
    }
}
