//! End-to-end jurisdiction lookups against a scripted HTTP client.
//!
//! These tests drive the full pipeline - query construction, endpoint
//! fallback, attribute extraction, normalization, directory lookup,
//! synthesis, aggregation - with canned feature-service responses routed
//! by URL.

use texjuris::gis::{GisError, HttpClient, ResolverConfig};
use texjuris::{Jurisdiction, JurisdictionService};

/// Scripted HTTP client: the first route whose pattern appears in the
/// request URL answers. Unrouted URLs fail like a dead endpoint.
struct RouteClient {
    routes: Vec<(&'static str, Result<Vec<u8>, GisError>)>,
}

impl HttpClient for RouteClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, GisError> {
        for (pattern, response) in &self.routes {
            if url.contains(pattern) {
                return response.clone();
            }
        }
        Err(GisError::Http(format!("no route for {}", url)))
    }
}

fn test_config() -> ResolverConfig {
    ResolverConfig {
        city_endpoints: vec![
            "https://city-primary.test/query".to_string(),
            "https://city-fallback.test/query".to_string(),
        ],
        county_endpoints: vec![
            "https://county-primary.test/query".to_string(),
            "https://county-fallback.test/query".to_string(),
        ],
    }
}

fn feature(attribute_json: &str) -> Result<Vec<u8>, GisError> {
    Ok(format!(r#"{{"features":[{{"attributes":{attribute_json}}}]}}"#).into_bytes())
}

fn http_500(host: &str) -> Result<Vec<u8>, GisError> {
    Err(GisError::Status {
        status: 500,
        url: format!("https://{}/query", host),
    })
}

fn service(routes: Vec<(&'static str, Result<Vec<u8>, GisError>)>) -> JurisdictionService<RouteClient> {
    JurisdictionService::with_client_and_config(RouteClient { routes }, test_config())
}

#[tokio::test]
async fn known_city_yields_city_jurisdiction() {
    let service = service(vec![
        (
            "city-primary.test",
            feature(r#"{"CITY_NM":"Port Arthur","CNTY_NM":"Jefferson"}"#),
        ),
        ("county-primary.test", feature(r#"{"CNTY_NM":"Jefferson"}"#)),
    ]);

    let result = service
        .jurisdiction_by_coordinates(29.8850, -93.9400)
        .await
        .unwrap();

    assert_eq!(result.jurisdiction, Jurisdiction::City);
    assert_eq!(result.primary_agency.name, "Port Arthur Police Department");
    assert_eq!(
        result.primary_agency.phone.as_deref(),
        Some("(409) 983-8600")
    );
    assert_eq!(
        result.primary_agency.address.as_deref(),
        Some("645 4th St, Port Arthur, TX 77640")
    );

    let city = result.city.unwrap();
    assert_eq!(city.county, "Jefferson County");
    assert_eq!(result.county.name, "Jefferson County");
    assert_eq!(result.county.sheriff_phone.as_deref(), Some("(409) 835-8411"));
}

#[tokio::test]
async fn census_style_place_name_normalizes_to_directory_record() {
    // TIGERweb reports places as "City of X, TX" in NAMELSAD
    let service = service(vec![
        (
            "city-primary.test",
            feature(r#"{"NAMELSAD":"City of Port Arthur, TX"}"#),
        ),
        ("county-primary.test", feature(r#"{"CNTY_NM":"Jefferson"}"#)),
    ]);

    let result = service
        .jurisdiction_by_coordinates(29.8850, -93.9400)
        .await
        .unwrap();

    let city = result.city.unwrap();
    assert_eq!(city.name, "Port Arthur");
    assert_eq!(city.police_phone.as_deref(), Some("(409) 983-8600"));
}

#[tokio::test]
async fn no_city_match_yields_county_jurisdiction() {
    let service = service(vec![
        ("city-primary.test", Ok(br#"{"features":[]}"#.to_vec())),
        ("city-fallback.test", Ok(br#"{"features":[]}"#.to_vec())),
        ("county-primary.test", feature(r#"{"CNTY_NM":"Travis"}"#)),
    ]);

    let result = service
        .jurisdiction_by_coordinates(30.4, -97.9)
        .await
        .unwrap();

    assert_eq!(result.jurisdiction, Jurisdiction::County);
    assert!(result.city.is_none());
    assert_eq!(result.primary_agency.name, "Travis County Sheriff's Office");
    assert_eq!(
        result.primary_agency.phone.as_deref(),
        Some("(512) 854-9770")
    );
}

#[tokio::test]
async fn failing_primary_endpoint_falls_back_transparently() {
    let with_failing_primary = service(vec![
        ("city-primary.test", http_500("city-primary.test")),
        (
            "city-fallback.test",
            feature(r#"{"NAME":"Beaumont"}"#),
        ),
        ("county-primary.test", http_500("county-primary.test")),
        ("county-fallback.test", feature(r#"{"NAME":"Jefferson County"}"#)),
    ]);

    let fallback_only = service(vec![
        ("city-primary.test", feature(r#"{"NAME":"Beaumont"}"#)),
        ("county-primary.test", feature(r#"{"NAME":"Jefferson County"}"#)),
    ]);

    let degraded = with_failing_primary
        .jurisdiction_by_coordinates(30.08, -94.12)
        .await
        .unwrap();
    let direct = fallback_only
        .jurisdiction_by_coordinates(30.08, -94.12)
        .await
        .unwrap();

    // A failing endpoint is invisible in the result
    assert_eq!(degraded, direct);
    assert_eq!(degraded.primary_agency.name, "Beaumont Police Department");
}

#[tokio::test]
async fn total_exhaustion_degrades_to_texas_dps() {
    let service = service(vec![]);

    let result = service
        .jurisdiction_by_coordinates(31.0, -100.0)
        .await
        .unwrap();

    assert_eq!(result.jurisdiction, Jurisdiction::County);
    assert_eq!(result.county.name, "Texas");
    assert_eq!(
        result.county.sheriff_website.as_deref(),
        Some("https://www.dps.texas.gov")
    );
    assert_eq!(result.primary_agency.name, "Texas Sheriff's Office");
}

#[tokio::test]
async fn unknown_city_synthesis_uses_county_area_code_and_is_stable() {
    let service = service(vec![
        (
            "city-primary.test",
            feature(r#"{"NAME":"Smallville","COUNTY":"Jefferson County"}"#),
        ),
        ("county-primary.test", feature(r#"{"CNTY_NM":"Jefferson"}"#)),
    ]);

    let first = service
        .jurisdiction_by_coordinates(29.9, -94.0)
        .await
        .unwrap();
    let city = first.city.clone().unwrap();

    // Jefferson County maps to 409, not the 512 default
    let phone = city.police_phone.clone().unwrap();
    assert!(phone.starts_with("(409) "), "{phone}");
    assert_eq!(
        city.police_website.as_deref(),
        Some("https://www.cityofsmallville.com")
    );

    // Idempotent while cached
    let second = service
        .jurisdiction_by_coordinates(29.9, -94.0)
        .await
        .unwrap();
    assert_eq!(first.city, second.city);

    // Deterministic generation: clearing the cache changes nothing
    service.clear_search_cache();
    let third = service
        .jurisdiction_by_coordinates(29.9, -94.0)
        .await
        .unwrap();
    assert_eq!(first.city, third.city);
}

#[tokio::test]
async fn cache_only_holds_synthesized_records() {
    let service = service(vec![
        (
            "city-primary.test",
            feature(r#"{"CITY_NM":"Houston","CNTY_NM":"Harris"}"#),
        ),
        ("county-primary.test", feature(r#"{"CNTY_NM":"Harris"}"#)),
    ]);

    let result = service
        .jurisdiction_by_coordinates(29.76, -95.37)
        .await
        .unwrap();
    assert_eq!(result.jurisdiction, Jurisdiction::City);

    // Directory hits bypass synthesis entirely
    assert_eq!(service.cache_stats().size, 0);
}

#[tokio::test]
async fn small_municipality_pattern_beats_generation() {
    let service = service(vec![
        (
            "city-primary.test",
            feature(r#"{"NAME":"Lumberton","COUNTY":"Hardin County"}"#),
        ),
        ("county-primary.test", Ok(br#"{"features":[]}"#.to_vec())),
    ]);

    let result = service
        .jurisdiction_by_coordinates(30.26, -94.2)
        .await
        .unwrap();

    let city = result.city.unwrap();
    assert_eq!(city.police_phone.as_deref(), Some("(409) 755-0542"));
    assert_eq!(
        city.police_website.as_deref(),
        Some("https://www.cityoflumberton.com")
    );
}

#[tokio::test]
async fn error_payload_endpoint_is_skipped() {
    let service = service(vec![
        (
            "city-primary.test",
            Ok(br#"{"error":{"code":499,"message":"Token Required"},"features":[]}"#.to_vec()),
        ),
        ("city-fallback.test", feature(r#"{"CITY_NM":"Austin"}"#)),
        ("county-primary.test", feature(r#"{"CNTY_NM":"Travis"}"#)),
    ]);

    let result = service
        .jurisdiction_by_coordinates(30.27, -97.74)
        .await
        .unwrap();

    assert_eq!(result.primary_agency.name, "Austin Police Department");
}

#[tokio::test]
async fn invalid_coordinates_reject_the_whole_call() {
    let service = service(vec![]);

    assert!(service.jurisdiction_by_coordinates(91.0, 0.0).await.is_err());
    assert!(service
        .jurisdiction_by_coordinates(30.0, -200.0)
        .await
        .is_err());
}
