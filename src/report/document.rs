//! The validated report tree.
//!
//! One `Report` per input file: a turn's worth of clans, their units, and
//! the steps those units took. Locations are already converted to map
//! coordinates and every code has been checked, so nothing downstream of
//! here can fail.

use super::observation::Observation;
use super::turn::TurnId;
use crate::coords::MapCoords;

/// One turn's observations for one game, as loaded from a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// File the report was loaded from, for diagnostics.
    pub source: String,
    pub game: String,
    pub turn: TurnId,
    /// The clan that requested this report.
    pub clan: String,
    pub clans: Vec<Clan>,
    pub specials: Vec<SpecialLocation>,
}

/// A faction and the units it moved this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clan {
    pub id: String,
    pub units: Vec<Unit>,
}

/// A unit's movement for the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: String,
    /// Where the unit ended the turn.
    pub location: MapCoords,
    pub moves: Vec<Move>,
    /// Scouting runs; every step in them counts as scouted.
    pub scouts: Vec<Move>,
}

/// An ordered run of steps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Move {
    pub steps: Vec<Step>,
}

/// One step of a move and what was seen at its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub location: MapCoords,
    pub observation: Option<Observation>,
}

/// An entry in the special-location registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialLocation {
    pub id: String,
    pub name: String,
}

impl Unit {
    /// Iterates every step with a flag telling whether it came from a
    /// scouting run. Moves come first, then scouting runs, each in order.
    pub fn steps(&self) -> impl Iterator<Item = (&Step, bool)> {
        let moved = self.moves.iter().flat_map(|m| m.steps.iter().map(|s| (s, false)));
        let scouted = self.scouts.iter().flat_map(|m| m.steps.iter().map(|s| (s, true)));
        moved.chain(scouted)
    }
}
