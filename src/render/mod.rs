//! Adapting merged tiles to the renderer's hex records.

pub mod writer;

pub use writer::{JsonMapWriter, MapWriter, WriteError};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::coords::{Direction, MapCoords};
use crate::layout::{Bounds, Layout};
use crate::merge::{TileMap, TileState};
use crate::report::{Border, Encounter, Settlement, Sighting};
use crate::specials::SpecialFeature;

/// One hex as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexRecord {
    /// Grid notation of the hex, e.g. `"AB 1005"`.
    pub coords: String,
    /// Column relative to the render offset.
    pub column: u32,
    /// Row relative to the render offset.
    pub row: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub borders: BTreeMap<Direction, Border>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub settlements: Vec<Settlement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specials: Vec<SpecialFeature>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub encounters: Vec<Encounter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sightings: Vec<Sighting>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub visited: bool,
    pub scouted: bool,
}

impl HexRecord {
    fn from_tile(tile: &TileState, layout: &Layout) -> HexRecord {
        let (column, row) = layout.position(tile.location);
        HexRecord {
            coords: tile.location.to_string(),
            column,
            row,
            terrain: tile.terrain.clone(),
            borders: tile.borders.clone(),
            resources: tile.resources.clone(),
            settlements: tile.settlements.clone(),
            specials: tile.specials.clone(),
            encounters: tile.encounters.clone(),
            sightings: tile.sightings.clone(),
            notes: tile.notes.clone(),
            visited: tile.visited,
            scouted: tile.scouted,
        }
    }
}

/// The full map handed to a `MapWriter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    pub offset: MapCoords,
    pub hexes: Vec<HexRecord>,
}

impl RenderMap {
    /// Builds one record per tile, in location order.
    pub fn build(tiles: &TileMap, layout: &Layout) -> RenderMap {
        RenderMap {
            bounds: layout.bounds,
            offset: layout.offset,
            hexes: tiles.values().map(|t| HexRecord::from_tile(t, layout)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }
}
