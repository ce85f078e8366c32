//! Attribute field search across heterogeneous provider schemas.
//!
//! TxDOT feature services, TxDOT map servers, and Census TIGERweb all name
//! their columns differently. Each list below is the canonical search
//! order; the first field holding a non-empty string wins.

use serde_json::Value;
use std::collections::HashMap;

/// Candidate fields carrying a city name.
pub const CITY_NAME_FIELDS: &[&str] = &[
    "CITY_NM",
    "NAME",
    "CITY_NAME",
    "City",
    "CITYNAME",
    "NAMELSAD",
    "NAME10",
    "GEONAME",
    "CITY_FIPS",
    "PLACE_NAME",
    "FULLNAME",
];

/// Candidate fields carrying a county name within a city feature.
pub const CITY_COUNTY_FIELDS: &[&str] = &[
    "CNTY_NM",
    "COUNTY",
    "COUNTY_NAME",
    "County",
    "COUNTYNAME",
    "COUNTYFP",
    "CNTY_FIPS",
    "STATEFP",
];

/// Candidate fields carrying a county name in a county feature.
pub const COUNTY_NAME_FIELDS: &[&str] = &[
    "CNTY_NM",
    "NAME",
    "COUNTY_NAME",
    "County",
    "COUNTYNAME",
    "NAMELSAD",
    "NAME10",
    "GEONAME",
    "FULLNAME",
    "COUNTY_FIPS",
];

/// Returns the first non-empty string value among the candidate fields.
///
/// Numeric and null attribute values are skipped; only string-typed values
/// count, matching how the upstream schemas mix name and FIPS columns.
pub fn first_string_field<'a>(
    attributes: &'a HashMap<String, Value>,
    fields: &[&str],
) -> Option<&'a str> {
    fields.iter().find_map(|field| {
        attributes
            .get(*field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    })
}
