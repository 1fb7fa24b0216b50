//! Absolute zero-based map coordinates.
//!
//! Map coordinates address every hex of the world in one flat space:
//! column 0 is the west edge of the `?A` grids and row 0 the north edge of
//! the `A?` grids. Neighbor vectors depend on the parity of the map column;
//! odd map columns sit half a hex lower than even ones.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::cube::CubeCoords;
use super::direction::{Direction, ALL_DIRECTIONS};
use super::grid::{CoordError, GridCoords, GRIDS_PER_SIDE, GRID_COLUMNS, GRID_ROWS};

/// Total hex columns across the world.
pub const MAP_COLUMNS: u32 = GRIDS_PER_SIDE as u32 * GRID_COLUMNS as u32;

/// Total hex rows down the world.
pub const MAP_ROWS: u32 = GRIDS_PER_SIDE as u32 * GRID_ROWS as u32;

/// A hex location in absolute map space.
///
/// Serializes as grid notation so dumps stay readable. Ordering is
/// row-major (north to south, then west to east).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MapCoords {
    pub column: u32,
    pub row: u32,
}

impl MapCoords {
    /// Creates map coordinates, or `None` if they fall outside the world.
    pub fn new(column: u32, row: u32) -> Option<Self> {
        (column < MAP_COLUMNS && row < MAP_ROWS).then_some(MapCoords { column, row })
    }

    /// Converts back to grid notation.
    pub fn to_grid(self) -> GridCoords {
        debug_assert!(
            self.column < MAP_COLUMNS && self.row < MAP_ROWS,
            "map coordinates {:?} outside the world",
            self
        );
        let cols = GRID_COLUMNS as u32;
        let rows = GRID_ROWS as u32;
        GridCoords {
            grid_row: (self.row / rows + 1) as u8,
            grid_column: (self.column / cols + 1) as u8,
            column: (self.column % cols + 1) as u8,
            row: (self.row % rows + 1) as u8,
        }
    }

    /// Returns true when this hex is in an odd (zero-based) map column.
    pub const fn is_odd_column(self) -> bool {
        self.column % 2 == 1
    }

    /// Returns the neighboring hex in the given direction, or `None` at the
    /// edge of the world.
    pub fn step(self, direction: Direction) -> Option<MapCoords> {
        let (dc, dr) = if self.is_odd_column() {
            direction.odd_column_delta()
        } else {
            direction.even_column_delta()
        };
        let column = self.column as i64 + dc;
        let row = self.row as i64 + dr;
        if column < 0 || row < 0 {
            return None;
        }
        MapCoords::new(column as u32, row as u32)
    }

    /// Returns every on-map neighbor together with the direction to it.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, MapCoords)> {
        ALL_DIRECTIONS
            .into_iter()
            .filter_map(move |d| self.step(d).map(|n| (d, n)))
    }

    /// Converts to cube coordinates (odd columns shifted down).
    pub fn to_cube(self) -> CubeCoords {
        let q = self.column as i32;
        let r = self.row as i32 - (q - (q & 1)) / 2;
        CubeCoords { q, r, s: -q - r }
    }

    /// Converts from cube coordinates, or `None` if off the map.
    pub fn from_cube(cube: CubeCoords) -> Option<MapCoords> {
        let column = cube.q;
        let row = cube.r + (cube.q - (cube.q & 1)) / 2;
        if column < 0 || row < 0 {
            return None;
        }
        MapCoords::new(column as u32, row as u32)
    }

    /// Number of hex steps between two locations.
    pub fn distance(self, other: MapCoords) -> u32 {
        self.to_cube().distance(other.to_cube())
    }
}

impl Ord for MapCoords {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.column).cmp(&(other.row, other.column))
    }
}

impl PartialOrd for MapCoords {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MapCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_grid(), f)
    }
}

impl From<GridCoords> for MapCoords {
    fn from(grid: GridCoords) -> Self {
        grid.to_map()
    }
}

impl From<MapCoords> for String {
    fn from(coords: MapCoords) -> Self {
        coords.to_string()
    }
}

impl TryFrom<String> for MapCoords {
    type Error = CoordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        GridCoords::parse(&s).map(GridCoords::to_map)
    }
}
