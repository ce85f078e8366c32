//! City and county resolution over ordered endpoint lists.

use super::config::ResolverConfig;
use super::fields::{
    first_string_field, CITY_COUNTY_FIELDS, CITY_NAME_FIELDS, COUNTY_NAME_FIELDS,
};
use super::http::HttpClient;
use super::normalize::{clean_city_name, clean_county_name};
use super::query::point_query_url;
use super::response::parse_feature_set;
use crate::coord::Coordinate;
use crate::directory::{self, CityRecord, CountyRecord};
use crate::synth::{self, SynthCache};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// County used for synthesis when a city feature names no county.
const UNKNOWN_COUNTY: &str = "Unknown County";

/// Resolves coordinates to city and county contact records.
///
/// Owns the synthesis cache so repeated lookups of the same unknown city
/// within a session reuse the generated record.
pub struct GisResolver<C: HttpClient> {
    client: C,
    config: ResolverConfig,
    cache: SynthCache,
}

impl<C: HttpClient> GisResolver<C> {
    /// Creates a resolver with the default Texas endpoint lists.
    pub fn new(client: C) -> Self {
        Self::with_config(client, ResolverConfig::default())
    }

    /// Creates a resolver with custom endpoint lists.
    pub fn with_config(client: C, config: ResolverConfig) -> Self {
        Self {
            client,
            config,
            cache: SynthCache::new(),
        }
    }

    /// The synthesis cache owned by this resolver.
    pub fn cache(&self) -> &SynthCache {
        &self.cache
    }

    /// Resolves the city containing a coordinate, if any.
    ///
    /// Walks the city endpoints in order and stops at the first one whose
    /// response yields an extractable city name. Known cities come from the
    /// contact directory; unknown cities get a cached or freshly
    /// synthesized record. Returns `None` only when every endpoint is
    /// exhausted without usable data - the coordinate is then assumed to
    /// lie in unincorporated territory.
    pub async fn resolve_city(&self, coord: Coordinate) -> Option<CityRecord> {
        for endpoint in &self.config.city_endpoints {
            let attributes = match self.query_endpoint(endpoint, coord).await {
                Some(attrs) => attrs,
                None => continue,
            };

            let raw_city = match first_string_field(&attributes, CITY_NAME_FIELDS) {
                Some(name) => name,
                None => {
                    debug!(endpoint = %endpoint, "feature has no recognizable city field");
                    continue;
                }
            };

            let city_name = clean_city_name(raw_city);
            debug!(endpoint = %endpoint, raw = raw_city, city = %city_name, "city name extracted");

            if let Some(record) = directory::city_by_name(&city_name) {
                return Some(record);
            }

            // Not in the directory: synthesize, reusing the session cache.
            let county_name = first_string_field(&attributes, CITY_COUNTY_FIELDS)
                .map(clean_county_name)
                .unwrap_or_else(|| UNKNOWN_COUNTY.to_string());

            if let Some(cached) = self.cache.get(&city_name, &county_name) {
                debug!(city = %city_name, "synthesized record served from cache");
                return Some(cached);
            }

            let record = synth::synthesize(&city_name, &county_name);
            self.cache.insert(&city_name, &county_name, record.clone());
            return Some(record);
        }

        debug!(coord = %coord, "no city found at coordinates");
        None
    }

    /// Resolves the county containing a coordinate.
    ///
    /// Never fails: a county outside the contact directory yields a bare
    /// record carrying the name alone, and exhausting every endpoint yields
    /// the statewide Texas DPS fallback.
    pub async fn resolve_county(&self, coord: Coordinate) -> CountyRecord {
        for endpoint in &self.config.county_endpoints {
            let attributes = match self.query_endpoint(endpoint, coord).await {
                Some(attrs) => attrs,
                None => continue,
            };

            let raw_county = match first_string_field(&attributes, COUNTY_NAME_FIELDS) {
                Some(name) => name,
                None => {
                    debug!(endpoint = %endpoint, "feature has no recognizable county field");
                    continue;
                }
            };

            let county_name = clean_county_name(raw_county);
            debug!(endpoint = %endpoint, raw = raw_county, county = %county_name, "county name extracted");

            let slug = directory::county_slug(&county_name);
            if let Some(record) = directory::county_by_slug(&slug) {
                return record;
            }

            // Known polygon, unknown contacts: keep the name only.
            return CountyRecord {
                name: county_name,
                sheriff_phone: None,
                sheriff_website: None,
                address: None,
            };
        }

        debug!(coord = %coord, "no county found, using Texas DPS fallback");
        directory::statewide_fallback()
    }

    /// Queries one endpoint and returns the first feature's attributes.
    ///
    /// All failure modes collapse to `None` so the caller moves on to the
    /// next endpoint: transport errors, non-success status, error payloads,
    /// unparseable bodies, and empty feature sets.
    async fn query_endpoint(
        &self,
        endpoint: &str,
        coord: Coordinate,
    ) -> Option<HashMap<String, Value>> {
        let url = point_query_url(endpoint, coord);

        let body = match self.client.get(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(endpoint = %endpoint, error = %e, "endpoint failed, trying next");
                return None;
            }
        };

        let set = match parse_feature_set(&body) {
            Ok(set) => set,
            Err(e) => {
                warn!(endpoint = %endpoint, error = %e, "unusable response, trying next");
                return None;
            }
        };

        debug!(
            endpoint = %endpoint,
            feature_count = set.features.len(),
            "feature-service response"
        );

        set.features.into_iter().next().map(|f| f.attributes)
    }
}
