//! Up-front validation of loaded reports.
//!
//! Every document is checked before anything is merged, and every problem
//! is collected rather than stopping at the first. Only when nothing is
//! wrong do the raw documents become typed `Report`s, so the later stages
//! never see a bad location or an unknown code.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::debug;

use super::load::RawDocument;
use super::raw::{RawMove, RawObservation, RawReport, RawStep, RawUnit, SCHEMA_VERSION};
use crate::coords::{Bearing, CoordError, Direction, GridCoords, MapCoords};
use crate::report::{
    Border, Clan, Move, Observation, Report, SpecialLocation, Step, TurnError, TurnId, Unit,
};
use crate::report::{Reported, Sighting};

/// What is wrong with one field of one document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    #[error("unknown schema version '{found}', expected '{expected}'")]
    UnknownSchema { found: String, expected: &'static str },

    #[error("missing {0} id")]
    MissingId(&'static str),

    #[error("malformed turn id '{value}': {reason}")]
    MalformedTurn { value: String, reason: TurnError },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidLocation {
        field: &'static str,
        value: String,
        reason: CoordError,
    },

    #[error("unknown edge direction '{0}'")]
    UnknownDirection(String),

    #[error("unknown border '{0}'")]
    UnknownBorder(String),

    #[error("unknown compass bearing '{0}'")]
    UnknownBearing(String),

    #[error("game id '{found}' does not match '{expected}'")]
    GameMismatch { expected: String, found: String },
}

/// A validation failure located in a source file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{file}{}: {kind}", .context.as_ref().map(|c| format!(" [{}]", c)).unwrap_or_default())]
pub struct ValidationError {
    pub file: String,
    /// The offending unit and step, when the problem is inside one.
    pub context: Option<String>,
    pub kind: ValidationErrorKind,
}

/// Every validation failure found in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.0.len())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks every document and converts them to typed reports.
///
/// The first non-empty game id seen sets the expected game for the batch.
pub fn validate(docs: &[RawDocument]) -> Result<Vec<Report>, ValidationErrors> {
    let mut errors = Vec::new();
    let expected_game = docs
        .iter()
        .map(|d| d.report.game.as_str())
        .find(|g| !g.is_empty());

    let reports: Vec<Option<Report>> = docs
        .iter()
        .map(|doc| {
            let mut v = Validator {
                file: &doc.source,
                errors: &mut errors,
            };
            v.report(&doc.report, expected_game)
        })
        .collect();

    debug!(documents = docs.len(), errors = errors.len(), "reports.validated");
    if errors.is_empty() {
        Ok(reports.into_iter().flatten().collect())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Collects errors for one document while converting it.
struct Validator<'a> {
    file: &'a str,
    errors: &'a mut Vec<ValidationError>,
}

impl Validator<'_> {
    fn push(&mut self, context: Option<&str>, kind: ValidationErrorKind) {
        self.errors.push(ValidationError {
            file: self.file.to_string(),
            context: context.map(str::to_string),
            kind,
        });
    }

    fn require_id(&mut self, context: Option<&str>, what: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(context, ValidationErrorKind::MissingId(what));
            false
        } else {
            true
        }
    }

    fn report(&mut self, raw: &RawReport, expected_game: Option<&str>) -> Option<Report> {
        let before = self.errors.len();

        if raw.schema != SCHEMA_VERSION {
            self.push(
                None,
                ValidationErrorKind::UnknownSchema {
                    found: raw.schema.clone(),
                    expected: SCHEMA_VERSION,
                },
            );
        }

        if self.require_id(None, "game", &raw.game) {
            if let Some(expected) = expected_game {
                if raw.game != expected {
                    self.push(
                        None,
                        ValidationErrorKind::GameMismatch {
                            expected: expected.to_string(),
                            found: raw.game.clone(),
                        },
                    );
                }
            }
        }

        let turn = if self.require_id(None, "turn", &raw.turn) {
            match TurnId::parse(&raw.turn) {
                Ok(t) => Some(t),
                Err(reason) => {
                    self.push(
                        None,
                        ValidationErrorKind::MalformedTurn {
                            value: raw.turn.clone(),
                            reason,
                        },
                    );
                    None
                }
            }
        } else {
            None
        };

        self.require_id(None, "clan", &raw.clan);

        let mut clans = Vec::with_capacity(raw.clans.len());
        for (i, clan) in raw.clans.iter().enumerate() {
            let clan_ctx = format!("clan #{}", i + 1);
            self.require_id(Some(clan_ctx.as_str()), "clan", &clan.id);
            let units: Vec<Option<Unit>> = clan
                .units
                .iter()
                .enumerate()
                .map(|(j, unit)| self.unit(&clan.id, j, unit))
                .collect();
            clans.push(Clan {
                id: clan.id.clone(),
                units: units.into_iter().flatten().collect(),
            });
        }

        let mut specials = Vec::with_capacity(raw.specials.len());
        for (i, special) in raw.specials.iter().enumerate() {
            let ctx = format!("special #{}", i + 1);
            if self.require_id(Some(ctx.as_str()), "special location name", &special.name) {
                specials.push(SpecialLocation {
                    id: special.id.clone(),
                    name: special.name.clone(),
                });
            }
        }

        if self.errors.len() > before {
            return None;
        }
        Some(Report {
            source: self.file.to_string(),
            game: raw.game.clone(),
            turn: turn?,
            clan: raw.clan.clone(),
            clans,
            specials,
        })
    }

    fn unit(&mut self, clan: &str, index: usize, raw: &RawUnit) -> Option<Unit> {
        let ctx = if raw.id.is_empty() {
            format!("clan {}, unit #{}", clan, index + 1)
        } else {
            format!("clan {}, unit {}", clan, raw.id)
        };
        let has_id = self.require_id(Some(ctx.as_str()), "unit", &raw.id);
        let location = self.location(&ctx, "ending location", &raw.location);
        let moves = self.moves(&ctx, "move", &raw.moves);
        let scouts = self.moves(&ctx, "scout", &raw.scouts);

        if !has_id {
            return None;
        }
        Some(Unit {
            id: raw.id.clone(),
            location: location?,
            moves: moves?,
            scouts: scouts?,
        })
    }

    fn moves(&mut self, unit_ctx: &str, label: &str, raw: &[RawMove]) -> Option<Vec<Move>> {
        let moves: Vec<Option<Move>> = raw
            .iter()
            .enumerate()
            .map(|(i, mv)| {
                let steps: Vec<Option<Step>> = mv
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(j, step)| {
                        let ctx = format!("{}, {} {} step {}", unit_ctx, label, i + 1, j + 1);
                        self.step(&ctx, step)
                    })
                    .collect();
                let steps: Option<Vec<Step>> = steps.into_iter().collect();
                steps.map(|steps| Move { steps })
            })
            .collect();
        moves.into_iter().collect()
    }

    fn step(&mut self, ctx: &str, raw: &RawStep) -> Option<Step> {
        let location = self.location(ctx, "step location", &raw.location);
        let observation = match &raw.observation {
            Some(obs) => Some(self.observation(ctx, obs)?),
            None => None,
        };
        Some(Step {
            location: location?,
            observation,
        })
    }

    fn location(&mut self, ctx: &str, field: &'static str, value: &str) -> Option<MapCoords> {
        match GridCoords::parse(value) {
            Ok(grid) => Some(grid.to_map()),
            Err(reason) => {
                self.push(
                    Some(ctx),
                    ValidationErrorKind::InvalidLocation {
                        field,
                        value: value.to_string(),
                        reason,
                    },
                );
                None
            }
        }
    }

    fn observation(&mut self, ctx: &str, raw: &RawObservation) -> Option<Observation> {
        let before = self.errors.len();

        let mut borders = BTreeMap::new();
        for (dir, border) in &raw.borders {
            let d = Direction::from_code(dir);
            if d.is_none() {
                self.push(Some(ctx), ValidationErrorKind::UnknownDirection(dir.clone()));
            }
            let b = Border::from_code(border);
            if b.is_none() {
                self.push(Some(ctx), ValidationErrorKind::UnknownBorder(border.clone()));
            }
            if let (Some(d), Some(b)) = (d, b) {
                borders.insert(d, b);
            }
        }

        for sighting in raw.sightings.iter() {
            if Bearing::from_code(&sighting.bearing).is_none() {
                self.push(
                    Some(ctx),
                    ValidationErrorKind::UnknownBearing(sighting.bearing.clone()),
                );
            }
        }

        if self.errors.len() > before {
            return None;
        }

        // Every bearing parsed above; unknown ones have already returned.
        let sightings: Reported<Sighting> = match &raw.sightings {
            Reported::Absent => Reported::Absent,
            Reported::Empty => Reported::Empty,
            Reported::Values(v) => Reported::Values(
                v.iter()
                    .filter_map(|s| {
                        Bearing::from_code(&s.bearing).map(|bearing| Sighting {
                            bearing,
                            terrain: s.terrain.clone(),
                        })
                    })
                    .collect(),
            ),
        };

        Some(Observation {
            terrain: raw.terrain.clone(),
            borders,
            resources: raw.resources.clone(),
            settlements: raw.settlements.clone(),
            encounters: raw.encounters.clone(),
            sightings,
            notes: raw.notes.clone(),
            visited: raw.visited,
            scouted: raw.scouted,
        })
    }
}
