//! Web-search suggestions for manual contact lookup.
//!
//! When synthesized contacts are not good enough, callers can hand these
//! query strings to a search engine or a human operator.

use crate::directory::area_code_for_county;
use serde::Serialize;

/// Suggested search queries for finding a police department's contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSuggestions {
    /// Queries targeting a phone number.
    pub phone_search: Vec<String>,
    /// Queries targeting the official website.
    pub website_search: Vec<String>,
    /// Broader queries.
    pub general_search: Vec<String>,
}

/// Builds search suggestions for a city/county pair.
///
/// Phone queries include the county's representative area code to bias
/// results toward the right region.
pub fn search_suggestions(city_name: &str, county_name: &str) -> SearchSuggestions {
    let area_code = area_code_for_county(county_name);

    SearchSuggestions {
        phone_search: vec![
            format!("\"{city_name} Texas police department phone\""),
            format!("\"{city_name} police {area_code}\""),
            format!("\"{city_name} city hall phone {area_code}\""),
            format!("\"{city_name} {county_name} police\""),
        ],
        website_search: vec![
            format!("\"{city_name} Texas police department\""),
            format!("\"city of {city_name} police\""),
            format!("\"{city_name} TX police department\""),
            format!("site:gov \"{city_name}\" police"),
        ],
        general_search: vec![
            format!("\"{city_name} Texas police non emergency\""),
            format!("\"{city_name} {county_name} law enforcement\""),
            format!("\"{city_name} police chief\" contact"),
            format!("\"{city_name} TX police report\""),
        ],
    }
}
