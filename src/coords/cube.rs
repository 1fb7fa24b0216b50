//! Cube coordinates for distance arithmetic.

use super::direction::Direction;

/// A hex in cube space; `q + r + s == 0` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeCoords {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl CubeCoords {
    /// Unit vector for a flat-topped hex edge.
    pub const fn unit(direction: Direction) -> CubeCoords {
        let (q, r, s) = match direction {
            Direction::North => (0, -1, 1),
            Direction::NorthEast => (1, -1, 0),
            Direction::SouthEast => (1, 0, -1),
            Direction::South => (0, 1, -1),
            Direction::SouthWest => (-1, 1, 0),
            Direction::NorthWest => (-1, 0, 1),
        };
        CubeCoords { q, r, s }
    }

    /// Returns the adjacent cube in the given direction.
    pub fn step(self, direction: Direction) -> CubeCoords {
        let d = CubeCoords::unit(direction);
        CubeCoords {
            q: self.q + d.q,
            r: self.r + d.r,
            s: self.s + d.s,
        }
    }

    /// Number of hex steps between two cubes.
    pub fn distance(self, other: CubeCoords) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = (self.s - other.s).unsigned_abs();
        dq.max(dr).max(ds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::direction::ALL_DIRECTIONS;

    #[test]
    fn units_keep_the_cube_invariant() {
        for d in ALL_DIRECTIONS {
            let u = CubeCoords::unit(d);
            assert_eq!(u.q + u.r + u.s, 0);
            assert_eq!(u.step(d.opposite()), CubeCoords { q: 0, r: 0, s: 0 });
        }
    }

    #[test]
    fn distance_counts_steps() {
        let origin = CubeCoords { q: 0, r: 0, s: 0 };
        let far = origin
            .step(Direction::North)
            .step(Direction::North)
            .step(Direction::SouthEast);
        assert_eq!(origin.distance(far), 2);
        assert_eq!(far.distance(origin), 2);
        assert_eq!(origin.distance(origin), 0);
    }
}
