//! GIS point-in-polygon resolution
//!
//! This module answers "which city polygon and which county polygon contain
//! this coordinate" by querying external ArcGIS-style feature services.
//!
//! # Endpoint Fallback
//!
//! Each lookup walks an ordered list of endpoints (primary TxDOT feature
//! service, a TxDOT map-server fallback, a Census TIGERweb backup) and stops
//! at the first endpoint that returns usable data. Any single endpoint
//! failure - network error, non-success status, error payload, empty
//! feature set, or a feature with no recognizable name field - is logged
//! and silently skipped. There is no retry-with-backoff; fallback is the
//! only resilience mechanism.
//!
//! # Schema Normalization
//!
//! The data providers disagree on attribute schemas, so extracted names are
//! searched across an ordered list of candidate field names and then
//! normalized (state suffixes, "City of" prefixes, known aliases) before
//! being matched against the contact directory.

mod config;
mod error;
mod fields;
mod http;
mod normalize;
mod query;
mod resolver;
mod response;

pub use config::{
    ResolverConfig, CENSUS_COUNTIES_URL, CENSUS_PLACES_URL, FALLBACK_CITIES_URL,
    FALLBACK_COUNTIES_URL, TXDOT_CITIES_URL, TXDOT_COUNTIES_URL,
};
pub use error::GisError;
pub use fields::{CITY_COUNTY_FIELDS, CITY_NAME_FIELDS, COUNTY_NAME_FIELDS};
pub use http::{HttpClient, ReqwestClient};
pub use normalize::{clean_city_name, clean_county_name};
pub use query::point_query_url;
pub use resolver::GisResolver;
pub use response::{Feature, FeatureSet, QueryError};

#[cfg(test)]
pub use http::tests::MockHttpClient;
