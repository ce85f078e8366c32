//! Jurisdiction result types.

use crate::coord::Coordinate;
use crate::directory::{CityRecord, CountyRecord};
use serde::Serialize;
use std::fmt;

/// Which level of government holds jurisdiction at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    /// Inside municipal limits; the city police department is primary.
    City,
    /// Unincorporated territory; the county sheriff's office is primary.
    County,
}

/// The kind of agency named in a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgencyKind {
    #[serde(rename = "Police Department")]
    PoliceDepartment,
    #[serde(rename = "Sheriff's Office")]
    SheriffsOffice,
}

impl fmt::Display for AgencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgencyKind::PoliceDepartment => write!(f, "Police Department"),
            AgencyKind::SheriffsOffice => write!(f, "Sheriff's Office"),
        }
    }
}

/// The primary agency responsible for a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agency {
    /// Display name, e.g. `"Port Arthur Police Department"`
    pub name: String,
    /// Agency kind
    pub kind: AgencyKind,
    /// Non-emergency phone
    pub phone: Option<String>,
    /// Website
    pub website: Option<String>,
    /// Street address
    pub address: Option<String>,
}

/// Complete result of one jurisdiction lookup. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JurisdictionResult {
    /// The queried coordinate
    pub coordinates: Coordinate,
    /// City record when the coordinate falls inside municipal limits
    pub city: Option<CityRecord>,
    /// County record; never absent (statewide fallback guarantees it)
    pub county: CountyRecord,
    /// Which agency level is primary
    pub jurisdiction: Jurisdiction,
    /// The agency to contact
    pub primary_agency: Agency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jurisdiction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Jurisdiction::City).unwrap(),
            "\"city\""
        );
        assert_eq!(
            serde_json::to_string(&Jurisdiction::County).unwrap(),
            "\"county\""
        );
    }

    #[test]
    fn test_agency_kind_display_strings() {
        assert_eq!(AgencyKind::PoliceDepartment.to_string(), "Police Department");
        assert_eq!(AgencyKind::SheriffsOffice.to_string(), "Sheriff's Office");
    }

    #[test]
    fn test_agency_kind_serializes_display_string() {
        assert_eq!(
            serde_json::to_string(&AgencyKind::SheriffsOffice).unwrap(),
            "\"Sheriff's Office\""
        );
    }
}
