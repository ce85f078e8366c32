//! Name normalization for extracted GIS attributes.

/// Cleans a raw city name extracted from feature attributes.
///
/// Strips trailing `", TX"` / `", Texas"` state suffixes and a leading
/// `"City of "` prefix. Any variant containing "port arthur" collapses to
/// the canonical `"Port Arthur"` (the TIGERweb place name carries extra
/// qualifiers for it).
pub fn clean_city_name(raw: &str) -> String {
    let mut name = raw.trim();
    name = name.strip_suffix(", TX").unwrap_or(name);
    name = name.strip_suffix(", Texas").unwrap_or(name);
    name = name.strip_prefix("City of ").unwrap_or(name);
    let name = name.trim();

    if name.to_lowercase().contains("port arthur") {
        return "Port Arthur".to_string();
    }

    name.to_string()
}

/// Cleans a raw county name extracted from feature attributes.
///
/// Strips state suffixes and a trailing `" County"`, then re-appends
/// `" County"` when the remaining name does not already contain it, so
/// `"Jefferson"`, `"Jefferson County"`, and `"Jefferson County, Texas"` all
/// normalize to `"Jefferson County"`.
pub fn clean_county_name(raw: &str) -> String {
    let mut name = raw.trim();
    name = name.strip_suffix(", TX").unwrap_or(name);
    name = name.strip_suffix(", Texas").unwrap_or(name);
    name = name.strip_suffix(" County").unwrap_or(name);
    let name = name.trim();

    if name.to_lowercase().contains("county") {
        name.to_string()
    } else {
        format!("{} County", name)
    }
}
