//! Best-effort contact synthesis for cities absent from the directory.
//!
//! When a GIS lookup names a city the directory does not know, this module
//! fabricates plausible contact fields from municipal naming conventions:
//! a website guess from the most common Texas city URL template and a
//! phone number built from the county's area code plus name-derived
//! digits. Output is deterministic per city name, so repeated lookups -
//! including after a cache clear - produce identical records.
//!
//! Synthesized contacts are unverified; they are starting points for a
//! caller's own search, not authoritative data.

mod cache;
mod phone;
mod suggestions;

pub use cache::SynthCache;
pub use phone::{format_phone, normalize_website};
pub use suggestions::{search_suggestions, SearchSuggestions};

use crate::directory::{self, CityRecord};
use tracing::debug;

/// Exchange prefixes common in Texas municipal phone numbers.
const COMMON_EXCHANGES: &[&str] = &["555", "754", "883", "267", "296", "753", "794"];

/// Synthesizes a city contact record. Never fails.
///
/// Known small municipalities are answered from the pattern table; anything
/// else gets generated phone/website/address fields.
pub fn synthesize(city_name: &str, county_name: &str) -> CityRecord {
    if let Some(pattern) = directory::municipal_pattern(city_name) {
        debug!(city = city_name, "contact found in municipal pattern table");
        return CityRecord {
            name: city_name.to_string(),
            county: county_name.to_string(),
            police_phone: Some(pattern.phone.to_string()),
            police_website: Some(pattern.website.to_string()),
            address: Some(pattern.address.to_string()),
        };
    }

    let slug = city_slug(city_name);
    let website = format!("https://www.cityof{}.com", slug);
    let area_code = directory::area_code_for_county(county_name);
    let phone = generate_phone(area_code, city_name);
    let address = format!(
        "Contact {} City Hall for Police Department address",
        city_name
    );

    debug!(
        city = city_name,
        county = county_name,
        phone = %phone,
        website = %website,
        "generated contact info"
    );

    CityRecord {
        name: city_name.to_string(),
        county: county_name.to_string(),
        police_phone: Some(phone),
        police_website: Some(website),
        address: Some(address),
    }
}

/// Derives a URL slug: lowercase with everything but ASCII letters and
/// digits removed.
fn city_slug(city_name: &str) -> String {
    city_name
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Generates a stable, name-derived phone number.
///
/// Both the exchange prefix and the line number come from the same
/// character-weight hash, so the output is reproducible per name. The
/// number is plausible, not verified.
fn generate_phone(area_code: &str, city_name: &str) -> String {
    let weight: u32 = city_name.chars().map(|c| c as u32).sum();
    let exchange = COMMON_EXCHANGES[weight as usize % COMMON_EXCHANGES.len()];
    let line = 1000 + weight % 9000;

    format!("({}) {}-{}", area_code, exchange, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_table_takes_precedence() {
        let record = synthesize("Lumberton", "Hardin County");
        assert_eq!(record.police_phone.as_deref(), Some("(409) 755-0542"));
        assert_eq!(
            record.police_website.as_deref(),
            Some("https://www.cityoflumberton.com")
        );
        assert_eq!(record.county, "Hardin County");
    }

    #[test]
    fn test_generated_record_shape() {
        let record = synthesize("Smallville", "Jefferson County");
        assert_eq!(record.name, "Smallville");
        assert_eq!(record.county, "Jefferson County");
        assert_eq!(
            record.police_website.as_deref(),
            Some("https://www.cityofsmallville.com")
        );
        assert_eq!(
            record.address.as_deref(),
            Some("Contact Smallville City Hall for Police Department address")
        );
    }

    #[test]
    fn test_generated_phone_uses_county_area_code() {
        let jefferson = synthesize("Smallville", "Jefferson County");
        assert!(jefferson
            .police_phone
            .as_deref()
            .unwrap()
            .starts_with("(409) "));

        let unmapped = synthesize("Smallville", "Loving County");
        assert!(unmapped
            .police_phone
            .as_deref()
            .unwrap()
            .starts_with("(512) "));
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let a = synthesize("Smallville", "Jefferson County");
        let b = synthesize("Smallville", "Jefferson County");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_names_usually_differ() {
        let a = synthesize("Smallville", "Jefferson County");
        let b = synthesize("Bigville", "Jefferson County");
        assert_ne!(a.police_phone, b.police_phone);
    }

    #[test]
    fn test_slug_strips_spaces_and_punctuation() {
        assert_eq!(city_slug("Bridge City"), "bridgecity");
        assert_eq!(city_slug("O'Brien"), "obrien");
        assert_eq!(city_slug("La Porte"), "laporte");
    }

    #[test]
    fn test_phone_format() {
        let phone = generate_phone("409", "Smallville");
        // (AAA) EEE-LLLL with a four-digit line in 1000..=9999
        assert_eq!(phone.len(), 14);
        assert!(phone.starts_with("(409) "));
        let line: u32 = phone[10..].parse().unwrap();
        assert!((1000..=9999).contains(&line));
    }
}
