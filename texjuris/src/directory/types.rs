//! Record types for the contact directory.

use serde::Serialize;

/// Sheriff contact record for a Texas county.
///
/// Contact fields are optional: counties resolved by GIS but absent from the
/// directory carry a name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountyRecord {
    /// Full county name, e.g. `"Jefferson County"`
    pub name: String,
    /// Sheriff's office non-emergency phone
    pub sheriff_phone: Option<String>,
    /// Sheriff's office website
    pub sheriff_website: Option<String>,
    /// Sheriff's office street address
    pub address: Option<String>,
}

/// Police contact record for a Texas city.
///
/// Records come from the directory table or, for unknown cities, from the
/// contact synthesizer; synthesized fields are best-effort and unverified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityRecord {
    /// City name, e.g. `"Port Arthur"`
    pub name: String,
    /// County the city sits in, e.g. `"Jefferson County"`
    pub county: String,
    /// Police department non-emergency phone
    pub police_phone: Option<String>,
    /// Police department website
    pub police_website: Option<String>,
    /// Police department street address
    pub address: Option<String>,
}

/// A known small-municipality contact pattern.
///
/// The synthesizer consults these before generating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPattern {
    /// Non-emergency phone
    pub phone: &'static str,
    /// City website
    pub website: &'static str,
    /// City hall / police street address
    pub address: &'static str,
}
