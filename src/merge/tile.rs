//! Folding sorted events into one state per hex.
//!
//! Each field has its own override rule:
//!
//! - terrain is replaced only by a present, non-empty code;
//! - visited and scouted only ever turn on;
//! - borders are replaced edge by edge, untouched edges keep their value;
//! - resources, settlements, encounters and sightings are replaced
//!   wholesale when reported (even with an empty list) and kept when absent;
//! - notes accumulate.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use super::flatten::ObservationEvent;
use crate::coords::{Direction, MapCoords};
use crate::report::{Border, Encounter, Reported, Settlement, Sighting, TurnId};
use crate::specials::SpecialFeature;

/// Everything known about one hex after merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileState {
    pub location: MapCoords,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<String>,
    pub borders: BTreeMap<Direction, Border>,
    pub resources: Vec<String>,
    pub settlements: Vec<Settlement>,
    pub specials: Vec<SpecialFeature>,
    pub encounters: Vec<Encounter>,
    pub sightings: Vec<Sighting>,
    pub notes: Vec<String>,
    pub visited: bool,
    pub scouted: bool,
    pub first_seen: TurnId,
    pub last_seen: TurnId,
    pub observed_by: BTreeSet<String>,
}

/// Final merged state, keyed and ordered by location.
pub type TileMap = BTreeMap<MapCoords, TileState>;

impl TileState {
    /// Creates an empty tile first seen in `turn`.
    pub fn new(location: MapCoords, turn: TurnId) -> Self {
        TileState {
            location,
            terrain: None,
            borders: BTreeMap::new(),
            resources: Vec::new(),
            settlements: Vec::new(),
            specials: Vec::new(),
            encounters: Vec::new(),
            sightings: Vec::new(),
            notes: Vec::new(),
            visited: false,
            scouted: false,
            first_seen: turn,
            last_seen: turn,
            observed_by: BTreeSet::new(),
        }
    }

    /// Applies one event on top of the current state.
    pub fn apply(&mut self, event: &ObservationEvent<'_>) {
        let obs = event.observation;

        if let Some(code) = obs.terrain_code() {
            if let Some(previous) = self.terrain.as_deref() {
                if previous != code && event.turn == self.last_seen {
                    debug!(
                        location = %self.location,
                        turn = %event.turn,
                        previous,
                        replacement = code,
                        clan = event.clan,
                        unit = event.unit,
                        "terrain.conflict"
                    );
                }
            }
            self.terrain = Some(code.to_string());
        }

        self.visited |= event.visited;
        self.scouted |= event.scouted;

        for (direction, border) in &obs.borders {
            self.borders.insert(*direction, *border);
        }

        replace(&mut self.resources, &obs.resources);
        replace(&mut self.settlements, &obs.settlements);
        replace(&mut self.encounters, &obs.encounters);
        replace(&mut self.sightings, &obs.sightings);

        self.notes.extend(obs.notes.iter().cloned());

        self.first_seen = self.first_seen.min(event.turn);
        self.last_seen = self.last_seen.max(event.turn);
        self.observed_by.insert(event.clan.to_string());
    }
}

/// Replaces `current` when the field was reported; keeps it when absent.
fn replace<T: Clone>(current: &mut Vec<T>, incoming: &Reported<T>) {
    if let Some(values) = incoming.as_slice() {
        *current = values.to_vec();
    }
}

/// Accumulates tile state from events applied in merge order.
#[derive(Debug, Default)]
pub struct TileMerger {
    tiles: TileMap,
    events: usize,
}

impl TileMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event, creating the tile on first sight.
    pub fn apply(&mut self, event: &ObservationEvent<'_>) {
        self.events += 1;
        self.tiles
            .entry(event.location)
            .or_insert_with(|| TileState::new(event.location, event.turn))
            .apply(event);
    }

    /// Number of tiles touched so far.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Finishes merging and returns the tiles.
    pub fn finish(self) -> TileMap {
        debug!(events = self.events, tiles = self.tiles.len(), "tiles.merged");
        self.tiles
    }
}

/// Merges events that are already in merge order.
pub fn merge_events(events: &[ObservationEvent<'_>]) -> TileMap {
    let mut merger = TileMerger::new();
    for event in events {
        merger.apply(event);
    }
    merger.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::GridCoords;
    use crate::report::Observation;

    fn at(s: &str) -> MapCoords {
        GridCoords::parse(s).unwrap().to_map()
    }

    fn event<'a>(turn: &str, clan: &'a str, obs: &'a Observation) -> ObservationEvent<'a> {
        ObservationEvent {
            turn: turn.parse().unwrap(),
            clan,
            unit: clan,
            location: at("AB 1005"),
            observation: obs,
            visited: obs.visited,
            scouted: obs.scouted,
        }
    }

    fn terrain(code: &str) -> Observation {
        Observation {
            terrain: Some(code.to_string()),
            ..Observation::default()
        }
    }

    fn settlements(names: Option<&[&str]>) -> Observation {
        Observation {
            settlements: names
                .map(|n| n.iter().map(|s| Settlement::new(*s)).collect::<Vec<_>>())
                .into(),
            ..Observation::default()
        }
    }

    #[test]
    fn terrain_last_writer_wins() {
        let a = terrain("PR");
        let b = terrain("SW");
        let tiles = merge_events(&[event("0901-01", "0331", &a), event("0901-02", "0331", &b)]);
        assert_eq!(tiles[&at("AB 1005")].terrain.as_deref(), Some("SW"));
    }

    #[test]
    fn missing_or_empty_terrain_never_erases() {
        let a = terrain("PR");
        let b = Observation::default();
        let c = terrain("");
        let tiles = merge_events(&[
            event("0901-01", "0331", &a),
            event("0901-02", "0331", &b),
            event("0901-03", "0331", &c),
        ]);
        assert_eq!(tiles[&at("AB 1005")].terrain.as_deref(), Some("PR"));
    }

    #[test]
    fn absent_keeps_and_empty_clears_settlements() {
        let a = settlements(Some(&["Foo"][..]));
        let b = settlements(None);
        let c = settlements(Some(&[][..]));

        let tiles = merge_events(&[event("0901-01", "0331", &a), event("0901-02", "0331", &b)]);
        assert_eq!(tiles[&at("AB 1005")].settlements, vec![Settlement::new("Foo")]);

        let tiles = merge_events(&[
            event("0901-01", "0331", &a),
            event("0901-02", "0331", &b),
            event("0901-03", "0331", &c),
        ]);
        assert!(tiles[&at("AB 1005")].settlements.is_empty());
    }

    #[test]
    fn reported_lists_replace_wholesale() {
        let a = Observation {
            resources: vec!["Coal".to_string(), "Iron Ore".to_string()].into(),
            encounters: vec![Encounter { unit: "0249e1".to_string() }].into(),
            ..Observation::default()
        };
        let b = Observation {
            resources: vec!["Salt".to_string()].into(),
            ..Observation::default()
        };
        let tiles = merge_events(&[event("0901-01", "0331", &a), event("0901-02", "0331", &b)]);
        let tile = &tiles[&at("AB 1005")];
        assert_eq!(tile.resources, vec!["Salt".to_string()]);
        assert_eq!(tile.encounters, vec![Encounter { unit: "0249e1".to_string() }]);
    }

    #[test]
    fn borders_merge_per_edge() {
        let a = Observation {
            borders: BTreeMap::from([(Direction::North, Border::River), (Direction::South, Border::Pass)]),
            ..Observation::default()
        };
        let b = Observation {
            borders: BTreeMap::from([(Direction::North, Border::Ford)]),
            ..Observation::default()
        };
        let tiles = merge_events(&[event("0901-01", "0331", &a), event("0901-02", "0331", &b)]);
        let borders = &tiles[&at("AB 1005")].borders;
        assert_eq!(borders.get(&Direction::North), Some(&Border::Ford));
        assert_eq!(borders.get(&Direction::South), Some(&Border::Pass));
        assert_eq!(borders.len(), 2);
    }

    #[test]
    fn flags_are_sticky_and_notes_accumulate() {
        let a = Observation {
            visited: true,
            notes: vec!["tracks".to_string()],
            ..Observation::default()
        };
        let b = Observation {
            scouted: true,
            notes: vec!["smoke".to_string()],
            ..Observation::default()
        };
        let c = Observation::default();
        let tiles = merge_events(&[
            event("0901-01", "0331", &a),
            event("0901-02", "0249", &b),
            event("0901-03", "0331", &c),
        ]);
        let tile = &tiles[&at("AB 1005")];
        assert!(tile.visited);
        assert!(tile.scouted);
        assert_eq!(tile.notes, vec!["tracks".to_string(), "smoke".to_string()]);
        assert_eq!(tile.first_seen.to_string(), "0901-01");
        assert_eq!(tile.last_seen.to_string(), "0901-03");
        assert_eq!(tile.observed_by.iter().collect::<Vec<_>>(), vec!["0249", "0331"]);
    }

    #[test]
    fn one_tile_per_location() {
        let a = terrain("PR");
        let mut e1 = event("0901-01", "0331", &a);
        let mut e2 = e1;
        e2.location = at("AB 1006");
        e1.location = at("AB 1005");
        let e3 = e1;
        let tiles = merge_events(&[e1, e2, e3]);
        assert_eq!(tiles.len(), 2);
        assert!(tiles.values().all(|t| tiles[&t.location] == *t));
    }
}
