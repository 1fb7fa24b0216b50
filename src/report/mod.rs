//! Observation model.
//!
//! Immutable, typed records produced by validating loaded input: a report
//! per file, owning its clans, units, moves, steps and observations.

pub mod document;
pub mod observation;
pub mod reported;
pub mod turn;

pub use document::{Clan, Move, Report, SpecialLocation, Step, Unit};
pub use observation::{Border, Encounter, Observation, Settlement, Sighting};
pub use reported::Reported;
pub use turn::{TurnError, TurnId};
