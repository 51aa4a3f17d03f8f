use std::fmt;

/// Discrete world coordinate: grid position plus vertical plane.
///
/// Distance is Chebyshev distance over (x, y); the plane never contributes
/// to distance and is compared explicitly where it matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl Tile {
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Chebyshev distance on the (x, y) grid, ignoring the plane.
    pub fn distance_to(self, other: Tile) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// True when `other` is this tile or one of its eight neighbours.
    pub fn is_adjacent_to(self, other: Tile) -> bool {
        self.distance_to(other) <= 1
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_chebyshev() {
        let a = Tile::new(10, 10, 0);
        assert_eq!(a.distance_to(Tile::new(13, 11, 0)), 3);
        assert_eq!(a.distance_to(Tile::new(10, 10, 0)), 0);
        assert_eq!(a.distance_to(Tile::new(7, 14, 0)), 4);
    }

    #[test]
    fn distance_ignores_plane() {
        let a = Tile::new(5, 5, 0);
        let b = Tile::new(5, 6, 2);
        assert_eq!(a.distance_to(b), 1);
        assert!(a.is_adjacent_to(b));
    }

    #[test]
    fn adjacency_includes_self_and_diagonals() {
        let a = Tile::new(0, 0, 0);
        assert!(a.is_adjacent_to(a));
        assert!(a.is_adjacent_to(Tile::new(1, 1, 0)));
        assert!(!a.is_adjacent_to(Tile::new(2, 0, 0)));
    }
}
