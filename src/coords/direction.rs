//! Hex edge directions and compass bearings.
//!
//! Hexes are flat-topped, so each one has six edges: north and south plus
//! the four diagonals. Far-horizon sightings use a finer twelve-point
//! compass that includes east and west.

use serde::{Deserialize, Serialize};

/// One of the six edges of a flat-topped hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "NW")]
    NorthWest,
}

/// All six directions, clockwise from north.
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::NorthWest,
];

impl Direction {
    /// Returns the report code for this direction.
    pub const fn code(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
        }
    }

    /// Parses a direction from its report code.
    pub fn from_code(code: &str) -> Option<Direction> {
        match code {
            "N" => Some(Direction::North),
            "NE" => Some(Direction::NorthEast),
            "SE" => Some(Direction::SouthEast),
            "S" => Some(Direction::South),
            "SW" => Some(Direction::SouthWest),
            "NW" => Some(Direction::NorthWest),
            _ => None,
        }
    }

    /// Returns the direction pointing back across the same edge.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Column/row delta for a step out of a hex in an odd map column.
    pub(crate) const fn odd_column_delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::NorthWest => (-1, 0),
        }
    }

    /// Column/row delta for a step out of a hex in an even map column.
    pub(crate) const fn even_column_delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::SouthEast => (1, 0),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// A twelve-point compass bearing used for far-horizon sightings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bearing {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NNE")]
    NorthNorthEast,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "SSE")]
    SouthSouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SSW")]
    SouthSouthWest,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NW")]
    NorthWest,
    #[serde(rename = "NNW")]
    NorthNorthWest,
}

impl Bearing {
    /// Returns the report code for this bearing.
    pub const fn code(self) -> &'static str {
        match self {
            Bearing::North => "N",
            Bearing::NorthNorthEast => "NNE",
            Bearing::NorthEast => "NE",
            Bearing::East => "E",
            Bearing::SouthEast => "SE",
            Bearing::SouthSouthEast => "SSE",
            Bearing::South => "S",
            Bearing::SouthSouthWest => "SSW",
            Bearing::SouthWest => "SW",
            Bearing::West => "W",
            Bearing::NorthWest => "NW",
            Bearing::NorthNorthWest => "NNW",
        }
    }

    /// Parses a bearing from its report code.
    pub fn from_code(code: &str) -> Option<Bearing> {
        match code {
            "N" => Some(Bearing::North),
            "NNE" => Some(Bearing::NorthNorthEast),
            "NE" => Some(Bearing::NorthEast),
            "E" => Some(Bearing::East),
            "SE" => Some(Bearing::SouthEast),
            "SSE" => Some(Bearing::SouthSouthEast),
            "S" => Some(Bearing::South),
            "SSW" => Some(Bearing::SouthSouthWest),
            "SW" => Some(Bearing::SouthWest),
            "W" => Some(Bearing::West),
            "NW" => Some(Bearing::NorthWest),
            "NNW" => Some(Bearing::NorthNorthWest),
            _ => None,
        }
    }
}
