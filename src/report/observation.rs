//! What a unit reported about one hex.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::reported::Reported;
use crate::coords::{Bearing, Direction};

/// A feature running along one edge of a hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Border {
    Canal,
    Ford,
    Pass,
    River,
    StoneRoad,
}

impl Border {
    /// Returns the report code for this border.
    pub const fn code(self) -> &'static str {
        match self {
            Border::Canal => "canal",
            Border::Ford => "ford",
            Border::Pass => "pass",
            Border::River => "river",
            Border::StoneRoad => "stone-road",
        }
    }

    /// Parses a border from its report code.
    pub fn from_code(code: &str) -> Option<Border> {
        match code {
            "canal" => Some(Border::Canal),
            "ford" => Some(Border::Ford),
            "pass" => Some(Border::Pass),
            "river" => Some(Border::River),
            "stone-road" => Some(Border::StoneRoad),
            _ => None,
        }
    }
}

/// A named settlement seen in a hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settlement {
    pub name: String,
}

impl Settlement {
    pub fn new(name: impl Into<String>) -> Self {
        Settlement { name: name.into() }
    }
}

/// Another unit met in a hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Encounter {
    pub unit: String,
}

/// Terrain seen on the far horizon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sighting {
    pub bearing: Bearing,
    pub terrain: String,
}

/// Everything reported about the hex a step ended in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Observation {
    /// Terrain code; `None` or empty means the report did not say.
    pub terrain: Option<String>,
    /// Borders keyed by the edge they run along. Edges not listed were not
    /// reported on.
    pub borders: BTreeMap<Direction, Border>,
    pub resources: Reported<String>,
    pub settlements: Reported<Settlement>,
    pub encounters: Reported<Encounter>,
    pub sightings: Reported<Sighting>,
    pub notes: Vec<String>,
    pub visited: bool,
    pub scouted: bool,
}

impl Observation {
    /// Returns the terrain code when it carries information.
    pub fn terrain_code(&self) -> Option<&str> {
        self.terrain.as_deref().filter(|t| !t.is_empty())
    }
}
