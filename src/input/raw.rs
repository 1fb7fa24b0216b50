//! JSON wire shape of a report file.
//!
//! Everything that validation checks is kept as a plain string here so a
//! bad code becomes a collected validation error instead of a parse failure
//! that hides every other problem in the file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::report::{Encounter, Reported, Settlement};

/// Schema tag every report file must carry.
pub const SCHEMA_VERSION: &str = "clanmap/report-v1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawReport {
    pub schema: String,
    pub game: String,
    pub turn: String,
    pub clan: String,
    pub clans: Vec<RawClan>,
    pub specials: Vec<RawSpecial>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawClan {
    pub id: String,
    pub units: Vec<RawUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawUnit {
    pub id: String,
    pub location: String,
    pub moves: Vec<RawMove>,
    pub scouts: Vec<RawMove>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMove {
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStep {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<RawObservation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawObservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<String>,
    /// Edge direction code to border code.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub borders: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    pub resources: Reported<String>,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    pub settlements: Reported<Settlement>,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    pub encounters: Reported<Encounter>,
    #[serde(skip_serializing_if = "Reported::is_absent")]
    pub sightings: Reported<RawSighting>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub visited: bool,
    pub scouted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSighting {
    pub bearing: String,
    pub terrain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSpecial {
    pub id: String,
    pub name: String,
}
