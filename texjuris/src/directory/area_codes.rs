//! County to telephone area code mapping.

use super::counties::county_slug;

/// Fallback area code when a county has no mapping (Austin).
pub const DEFAULT_AREA_CODE: &str = "512";

/// Most common area code per county, keyed by county slug.
const AREA_CODES: &[(&str, &str)] = &[
    ("jefferson", "409"),
    ("harris", "713"),
    ("dallas", "214"),
    ("tarrant", "817"),
    ("bexar", "210"),
    ("travis", "512"),
    ("collin", "972"),
    ("denton", "940"),
    ("fort_bend", "281"),
    ("williamson", "512"),
    ("el_paso", "915"),
    ("nueces", "361"),
    ("lubbock", "806"),
    ("galveston", "409"),
    ("montgomery", "936"),
    ("brazoria", "979"),
    ("bell", "254"),
    ("mclennan", "254"),
    ("cameron", "956"),
    ("webb", "956"),
    ("hidalgo", "956"),
    ("orange", "409"),
    ("smith", "903"),
    ("brazos", "979"),
];

/// Returns the representative area code for a county name.
///
/// Accepts any casing, with or without the `" County"` suffix. Unmapped
/// counties fall back to [`DEFAULT_AREA_CODE`].
pub fn area_code_for_county(county_name: &str) -> &'static str {
    let slug = county_slug(county_name);
    AREA_CODES
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(_, code)| *code)
        .unwrap_or(DEFAULT_AREA_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mapped_code_is_three_digits() {
        for (_, code) in AREA_CODES {
            assert_eq!(code.len(), 3);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_lookup_with_and_without_suffix() {
        assert_eq!(area_code_for_county("El Paso County"), "915");
        assert_eq!(area_code_for_county("el paso"), "915");
    }
}
