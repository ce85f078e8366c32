//! Session cache for synthesized city records.

use crate::directory::CityRecord;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// In-memory cache of synthesized contact records.
///
/// Keyed by the normalized (city, county) pair. Only successful synthesis
/// outcomes are stored - there are no negative entries. Entries live for
/// the process lifetime with no eviction; [`SynthCache::clear`] resets the
/// cache to empty.
#[derive(Debug, Default)]
pub struct SynthCache {
    entries: Mutex<HashMap<(String, String), CityRecord>>,
}

impl SynthCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn key(city_name: &str, county_name: &str) -> (String, String) {
        (city_name.to_lowercase(), county_name.to_lowercase())
    }

    /// Returns the cached record for a (city, county) pair, if present.
    pub fn get(&self, city_name: &str, county_name: &str) -> Option<CityRecord> {
        let entries = self.entries.lock().unwrap();
        entries.get(&Self::key(city_name, county_name)).cloned()
    }

    /// Stores a synthesized record.
    pub fn insert(&self, city_name: &str, county_name: &str, record: CityRecord) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(Self::key(city_name, county_name), record);
    }

    /// Removes every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        let dropped = entries.len();
        entries.clear();
        debug!(dropped, "synthesis cache cleared");
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cache keys as `"city-county"` strings, for diagnostics.
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.lock().unwrap();
        entries
            .keys()
            .map(|(city, county)| format!("{}-{}", city, county))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CityRecord {
        CityRecord {
            name: name.to_string(),
            county: "Jefferson County".to_string(),
            police_phone: Some("(409) 555-1234".to_string()),
            police_website: None,
            address: None,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let cache = SynthCache::new();
        assert!(cache.is_empty());

        cache.insert("Smallville", "Jefferson County", record("Smallville"));
        assert_eq!(cache.len(), 1);

        let hit = cache.get("Smallville", "Jefferson County").unwrap();
        assert_eq!(hit.name, "Smallville");
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let cache = SynthCache::new();
        cache.insert("Smallville", "Jefferson County", record("Smallville"));

        assert!(cache.get("SMALLVILLE", "jefferson county").is_some());
    }

    #[test]
    fn test_county_distinguishes_entries() {
        let cache = SynthCache::new();
        cache.insert("Riverside", "Walker County", record("Riverside"));

        assert!(cache.get("Riverside", "Harris County").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let cache = SynthCache::new();
        cache.insert("Smallville", "Jefferson County", record("Smallville"));
        cache.insert("Bigville", "Harris County", record("Bigville"));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("Smallville", "Jefferson County").is_none());
    }

    #[test]
    fn test_keys_format() {
        let cache = SynthCache::new();
        cache.insert("Smallville", "Jefferson County", record("Smallville"));

        let keys = cache.keys();
        assert_eq!(keys, vec!["smallville-jefferson county".to_string()]);
    }
}
