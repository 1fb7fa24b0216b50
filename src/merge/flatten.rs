//! Flattening the report tree into observation events.

use rayon::prelude::*;

use crate::coords::MapCoords;
use crate::report::{Observation, Report, TurnId};

/// One observation of one hex, with who saw it and when.
///
/// Borrows from the reports it was flattened out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationEvent<'a> {
    pub turn: TurnId,
    pub clan: &'a str,
    pub unit: &'a str,
    pub location: MapCoords,
    pub observation: &'a Observation,
    pub visited: bool,
    pub scouted: bool,
}

/// Emits one event per step that carries an observation.
///
/// Reports are walked in parallel; the output keeps report order and,
/// within a report, clan, unit and step order.
pub fn flatten(reports: &[Report]) -> Vec<ObservationEvent<'_>> {
    reports.par_iter().flat_map_iter(report_events).collect()
}

/// Events for a single report, in tree order.
pub fn report_events(report: &Report) -> impl Iterator<Item = ObservationEvent<'_>> {
    let turn = report.turn;
    report.clans.iter().flat_map(move |clan| {
        clan.units.iter().flat_map(move |unit| {
            unit.steps().filter_map(move |(step, from_scouting)| {
                step.observation.as_ref().map(|obs| ObservationEvent {
                    turn,
                    clan: &clan.id,
                    unit: &unit.id,
                    location: step.location,
                    observation: obs,
                    visited: obs.visited,
                    scouted: obs.scouted || from_scouting,
                })
            })
        })
    })
}
