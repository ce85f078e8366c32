//! Jurisdiction aggregation
//!
//! Combines an optional city resolution and an always-present county
//! resolution into a single jurisdiction decision. The rule is
//! city-takes-precedence: inside municipal limits the police department is
//! the primary agency; everywhere else the county sheriff's office is.
//!
//! The [`JurisdictionService`] facade is the public entry point consumed by
//! UI layers:
//!
//! ```ignore
//! let service = JurisdictionService::new()?;
//! let result = service.jurisdiction_by_coordinates(29.885, -93.94).await?;
//! match result.jurisdiction {
//!     Jurisdiction::City => println!("call {}", result.primary_agency.name),
//!     Jurisdiction::County => println!("call the sheriff"),
//! }
//! ```

mod error;
mod service;
mod types;

pub use error::JurisdictionError;
pub use service::{CacheStats, JurisdictionService};
pub use types::{Agency, AgencyKind, Jurisdiction, JurisdictionResult};
