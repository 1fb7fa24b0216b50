//! Render bounds and the alignment-corrected offset.
//!
//! The renderer draws a window around the observed tiles. Its top-left
//! corner must sit on an odd local column and an odd local row so the
//! hex stagger lines up with the grid artwork.

use serde::Serialize;

use crate::coords::{Direction, MapCoords};
use crate::merge::TileMap;

/// Blank hexes kept around the observed area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub columns: u32,
    pub rows: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin { columns: 4, rows: 4 }
    }
}

/// Smallest rectangle of map coordinates covering every tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub upper_left: MapCoords,
    pub lower_right: MapCoords,
}

impl Bounds {
    /// Scans tile locations for the covering rectangle. `None` when there
    /// are no tiles.
    pub fn from_tiles(tiles: &TileMap) -> Option<Bounds> {
        let mut locations = tiles.keys();
        let first = *locations.next()?;
        let mut bounds = Bounds {
            upper_left: first,
            lower_right: first,
        };
        for loc in locations {
            bounds.upper_left.column = bounds.upper_left.column.min(loc.column);
            bounds.upper_left.row = bounds.upper_left.row.min(loc.row);
            bounds.lower_right.column = bounds.lower_right.column.max(loc.column);
            bounds.lower_right.row = bounds.lower_right.row.max(loc.row);
        }
        Some(bounds)
    }

    pub fn columns(&self) -> u32 {
        self.lower_right.column - self.upper_left.column + 1
    }

    pub fn rows(&self) -> u32 {
        self.lower_right.row - self.upper_left.row + 1
    }
}

/// Backs the upper-left corner off by the margin (never past the world
/// edge) and aligns the result.
pub fn render_offset(bounds: &Bounds, margin: Margin) -> MapCoords {
    let ul = bounds.upper_left;
    let corner = MapCoords {
        column: if ul.column > margin.columns { ul.column - margin.columns } else { 0 },
        row: if ul.row > margin.rows { ul.row - margin.rows } else { 0 },
    };
    align_corner(corner)
}

/// Moves a corner onto an odd local column and odd local row: north when
/// the local row is even, then northwest when the local column is even.
pub fn align_corner(mut corner: MapCoords) -> MapCoords {
    // An even local row or column is never the first in its grid.
    if corner.to_grid().row % 2 == 0 {
        corner = corner
            .step(Direction::North)
            .expect("even local row is never on the world edge");
    }
    if corner.to_grid().column % 2 == 0 {
        corner = corner
            .step(Direction::NorthWest)
            .expect("even local column is never on the world edge");
    }
    corner
}

/// Where the merged tiles land in the rendered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub bounds: Option<Bounds>,
    pub margin: Margin,
    pub offset: MapCoords,
}

impl Layout {
    /// Computes bounds and offset for the tiles. An empty map gets no
    /// bounds and a zero offset.
    pub fn from_tiles(tiles: &TileMap, margin: Margin) -> Layout {
        let bounds = Bounds::from_tiles(tiles);
        let offset = match &bounds {
            Some(b) => render_offset(b, margin),
            None => MapCoords { column: 0, row: 0 },
        };
        Layout { bounds, margin, offset }
    }

    /// Position of a location relative to the offset corner.
    pub fn position(&self, location: MapCoords) -> (u32, u32) {
        (
            location.column.saturating_sub(self.offset.column),
            location.row.saturating_sub(self.offset.row),
        )
    }
}
