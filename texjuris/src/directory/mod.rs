//! Static reference tables of Texas law-enforcement contacts.
//!
//! Process-wide read-only data loaded into the binary: county sheriff
//! records, city police records, a secondary table of small-municipality
//! contacts used by the synthesizer, and a county-to-area-code map. None of
//! these tables are mutated at runtime; the only mutable state in the
//! library is the synthesis cache in [`crate::synth`].
//!
//! Lookup keys are normalized slugs:
//!
//! - County: lowercase, `" county"` suffix stripped, spaces replaced with
//!   underscores (`"Fort Bend County"` -> `"fort_bend"`).
//! - City: lowercase name (`"Port Arthur"` -> `"port arthur"`).

mod area_codes;
mod cities;
mod counties;
mod municipal;
mod types;

pub use area_codes::{area_code_for_county, DEFAULT_AREA_CODE};
pub use cities::city_by_name;
pub use counties::{county_by_slug, county_slug, statewide_fallback};
pub use municipal::municipal_pattern;
pub use types::{CityRecord, ContactPattern, CountyRecord};
