//! Coordinate system.
//!
//! Converts between grid notation (`"AA 0101"`), absolute map coordinates,
//! and cube coordinates, and defines the hex edge directions and compass
//! bearings used by reports.

pub mod cube;
pub mod direction;
pub mod grid;
pub mod map;

pub use cube::CubeCoords;
pub use direction::{Bearing, Direction, ALL_DIRECTIONS};
pub use grid::{CoordError, GridCoords, GRIDS_PER_SIDE, GRID_COLUMNS, GRID_ROWS};
pub use map::{MapCoords, MAP_COLUMNS, MAP_ROWS};
