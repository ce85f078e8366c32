//! Phone number and website normalization helpers.

/// Formats a raw phone string as `"(AAA) BBB-CCCC"`.
///
/// Accepts 10-digit numbers and 11-digit numbers with a leading country
/// code `1`; everything else returns `None`.
pub fn format_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let national = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        _ => return None,
    };

    Some(format!(
        "({}) {}-{}",
        &national[..3],
        &national[3..6],
        &national[6..]
    ))
}

/// Normalizes a website string to an absolute https URL.
///
/// Prepends `https://` when no scheme is present and validates the result
/// parses as a URL.
pub fn normalize_website(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let url = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    reqwest::Url::parse(&url).ok().map(|_| url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ten_digits() {
        assert_eq!(
            format_phone("4099838600").as_deref(),
            Some("(409) 983-8600")
        );
        assert_eq!(
            format_phone("409-983-8600").as_deref(),
            Some("(409) 983-8600")
        );
        assert_eq!(
            format_phone("(409) 983 8600").as_deref(),
            Some("(409) 983-8600")
        );
    }

    #[test]
    fn test_format_eleven_digits_with_country_code() {
        assert_eq!(
            format_phone("1-409-983-8600").as_deref(),
            Some("(409) 983-8600")
        );
    }

    #[test]
    fn test_format_rejects_wrong_lengths() {
        assert!(format_phone("983-8600").is_none());
        assert!(format_phone("").is_none());
        assert!(format_phone("2-409-983-8600").is_none());
    }

    #[test]
    fn test_website_scheme_added() {
        assert_eq!(
            normalize_website("www.portarthurtx.gov").as_deref(),
            Some("https://www.portarthurtx.gov")
        );
    }

    #[test]
    fn test_website_existing_scheme_kept() {
        assert_eq!(
            normalize_website("http://example.com").as_deref(),
            Some("http://example.com")
        );
    }

    #[test]
    fn test_website_empty_rejected() {
        assert!(normalize_website("").is_none());
        assert!(normalize_website("   ").is_none());
    }
}
