//! Human-facing grid notation.
//!
//! The world is tiled by 26×26 named grids, `AA` through `ZZ`. The first
//! letter names the grid row and the second the grid column. Each grid is 30
//! hexes wide and 21 tall, and a hex within it is written as a four-digit
//! column-then-row pair, so `"AB 0912"` is column 9, row 12 of the grid in
//! the first grid row and second grid column. All parts are one-based.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::map::MapCoords;

/// Number of grids along each side of the world.
pub const GRIDS_PER_SIDE: u8 = 26;

/// Hex columns in one grid.
pub const GRID_COLUMNS: u8 = 30;

/// Hex rows in one grid.
pub const GRID_ROWS: u8 = 21;

/// Errors that can occur when parsing or building grid coordinates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("expected 'LL CCRR', got '{0}'")]
    Malformed(String),

    #[error("invalid grid id '{0}'")]
    InvalidGrid(String),

    #[error("column {0} out of range 01-30")]
    ColumnOutOfRange(u8),

    #[error("row {0} out of range 01-21")]
    RowOutOfRange(u8),
}

/// A hex location in grid notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoords {
    pub grid_row: u8,
    pub grid_column: u8,
    pub column: u8,
    pub row: u8,
}

impl GridCoords {
    /// Builds grid coordinates, checking every part is in range.
    pub fn new(grid_row: u8, grid_column: u8, column: u8, row: u8) -> Result<Self, CoordError> {
        if !(1..=GRIDS_PER_SIDE).contains(&grid_row) || !(1..=GRIDS_PER_SIDE).contains(&grid_column) {
            return Err(CoordError::InvalidGrid(format!("{}/{}", grid_row, grid_column)));
        }
        if !(1..=GRID_COLUMNS).contains(&column) {
            return Err(CoordError::ColumnOutOfRange(column));
        }
        if !(1..=GRID_ROWS).contains(&row) {
            return Err(CoordError::RowOutOfRange(row));
        }
        Ok(GridCoords { grid_row, grid_column, column, row })
    }

    /// Parses `"LL CCRR"` notation, e.g. `"AA 0101"`.
    pub fn parse(s: &str) -> Result<Self, CoordError> {
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[2] != b' ' {
            return Err(CoordError::Malformed(s.to_string()));
        }

        let grid_row = grid_letter(bytes[0]).ok_or_else(|| CoordError::InvalidGrid(s[..2].to_string()))?;
        let grid_column = grid_letter(bytes[1]).ok_or_else(|| CoordError::InvalidGrid(s[..2].to_string()))?;
        let column = two_digits(&bytes[3..5]).ok_or_else(|| CoordError::Malformed(s.to_string()))?;
        let row = two_digits(&bytes[5..7]).ok_or_else(|| CoordError::Malformed(s.to_string()))?;

        GridCoords::new(grid_row, grid_column, column, row)
    }

    fn in_range(self) -> bool {
        (1..=GRIDS_PER_SIDE).contains(&self.grid_row)
            && (1..=GRIDS_PER_SIDE).contains(&self.grid_column)
            && (1..=GRID_COLUMNS).contains(&self.column)
            && (1..=GRID_ROWS).contains(&self.row)
    }

    /// Converts to absolute zero-based map coordinates.
    pub fn to_map(self) -> MapCoords {
        debug_assert!(self.in_range(), "grid coordinates {:?} out of range", self);
        MapCoords {
            column: (self.grid_column as u32 - 1) * GRID_COLUMNS as u32 + (self.column as u32 - 1),
            row: (self.grid_row as u32 - 1) * GRID_ROWS as u32 + (self.row as u32 - 1),
        }
    }

    /// Returns the two-letter grid id, e.g. `"AB"`.
    pub fn grid_id(self) -> String {
        debug_assert!(self.in_range(), "grid coordinates {:?} out of range", self);
        let mut id = String::with_capacity(2);
        id.push((b'A' + self.grid_row - 1) as char);
        id.push((b'A' + self.grid_column - 1) as char);
        id
    }
}

impl fmt::Display for GridCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}{:02}", self.grid_id(), self.column, self.row)
    }
}

impl FromStr for GridCoords {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridCoords::parse(s)
    }
}

fn grid_letter(b: u8) -> Option<u8> {
    b.is_ascii_uppercase().then(|| b - b'A' + 1)
}

fn two_digits(bytes: &[u8]) -> Option<u8> {
    if bytes.iter().all(u8::is_ascii_digit) {
        Some((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn hand_built_zero_column_panics() {
        let g = GridCoords { grid_row: 1, grid_column: 1, column: 0, row: 1 };
        let _ = g.to_map();
    }

    #[test]
    fn parse_origin() {
        let g = GridCoords::parse("AA 0101").unwrap();
        assert_eq!(g, GridCoords { grid_row: 1, grid_column: 1, column: 1, row: 1 });
        assert_eq!(g.to_map(), MapCoords { column: 0, row: 0 });
    }

    #[test]
    fn parse_uses_row_letter_first() {
        let g = GridCoords::parse("BC 0912").unwrap();
        assert_eq!(g.grid_row, 2);
        assert_eq!(g.grid_column, 3);
        let m = g.to_map();
        assert_eq!(m.column, 2 * 30 + 8);
        assert_eq!(m.row, 21 + 11);
    }

    #[test]
    fn display_is_canonical() {
        let g = GridCoords::new(26, 26, 30, 21).unwrap();
        assert_eq!(g.to_string(), "ZZ 3021");
        assert_eq!("ZZ 3021".parse::<GridCoords>().unwrap(), g);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(GridCoords::parse(""), Err(CoordError::Malformed(_))));
        assert!(matches!(GridCoords::parse("AA0101"), Err(CoordError::Malformed(_))));
        assert!(matches!(GridCoords::parse("AA 01O1"), Err(CoordError::Malformed(_))));
        assert!(matches!(GridCoords::parse("aa 0101"), Err(CoordError::InvalidGrid(_))));
        assert!(matches!(GridCoords::parse("N/A 0101"), Err(CoordError::Malformed(_))));
    }

    #[test]
    fn rejects_out_of_range_hexes() {
        assert_eq!(GridCoords::parse("AA 0001"), Err(CoordError::ColumnOutOfRange(0)));
        assert_eq!(GridCoords::parse("AA 3101"), Err(CoordError::ColumnOutOfRange(31)));
        assert_eq!(GridCoords::parse("AA 0100"), Err(CoordError::RowOutOfRange(0)));
        assert_eq!(GridCoords::parse("AA 0122"), Err(CoordError::RowOutOfRange(22)));
    }
}
