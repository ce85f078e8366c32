//! TexJuris - law-enforcement jurisdiction lookup for Texas
//!
//! This library determines which agency (municipal police department or
//! county sheriff's office) is responsible for a WGS84 coordinate in Texas,
//! and returns a jurisdiction record with contact details.
//!
//! # High-Level API
//!
//! For most use cases, the [`jurisdiction`] module provides a simplified facade:
//!
//! ```ignore
//! use texjuris::JurisdictionService;
//!
//! let service = JurisdictionService::new()?;
//! let result = service.jurisdiction_by_coordinates(29.8850, -93.9400).await?;
//! println!("{}", result.primary_agency.name);
//! ```
//!
//! # Resolution Pipeline
//!
//! A lookup runs two independent resolutions against external GIS feature
//! services (city boundaries and county boundaries), each trying an ordered
//! list of endpoints until one returns usable data:
//!
//! - [`gis`] - point-in-polygon queries, attribute extraction, name normalization
//! - [`directory`] - static reference tables of known agencies
//! - [`synth`] - best-effort contact synthesis for cities absent from the tables
//! - [`jurisdiction`] - combines both resolutions with city-takes-precedence

pub mod coord;
pub mod directory;
pub mod gis;
pub mod jurisdiction;
pub mod logging;
pub mod synth;

pub use coord::{Coordinate, CoordError};
pub use directory::{CityRecord, CountyRecord};
pub use jurisdiction::{
    Agency, AgencyKind, Jurisdiction, JurisdictionError, JurisdictionResult, JurisdictionService,
};
pub use synth::SearchSuggestions;

/// Version of the TexJuris library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
