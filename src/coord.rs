//! Grid coordinates and the adjacency modes that connect them.

use std::fmt;

/// A `(row, col)` position inside a grid.
///
/// Coordinates are unsigned, so a step off the top or left edge simply
/// has no representation (see [`Coord::offset`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a `(d_row, d_col)` step, returning `None` if it would go negative.
    #[inline]
    #[must_use]
    pub fn offset(self, (d_row, d_col): (isize, isize)) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// True when `other` is one king step (or one rook step, in orthogonal
    /// mode) away from `self`.
    #[must_use]
    pub fn is_adjacent(self, other: Coord, mode: AdjacencyMode) -> bool {
        let d_row = self.row.abs_diff(other.row);
        let d_col = self.col.abs_diff(other.col);
        match mode {
            AdjacencyMode::Orthogonal => d_row + d_col == 1,
            AdjacencyMode::OrthogonalPlusDiagonal => {
                d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
            }
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 4 rook steps, in reading order: up, left, right, down.
pub const ORTHOGONAL_STEPS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// The 8 king steps, in reading order of the surrounding 3x3 window.
pub const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Which cells count as connected when walking a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdjacencyMode {
    /// Up, down, left, right.
    #[default]
    Orthogonal,
    /// Orthogonal steps plus the four diagonal corners.
    OrthogonalPlusDiagonal,
}

impl AdjacencyMode {
    #[must_use]
    pub fn from_diagonal(diagonal: bool) -> Self {
        if diagonal {
            AdjacencyMode::OrthogonalPlusDiagonal
        } else {
            AdjacencyMode::Orthogonal
        }
    }

    #[must_use]
    pub fn is_diagonal(self) -> bool {
        self == AdjacencyMode::OrthogonalPlusDiagonal
    }

    /// Step offsets for this mode, in the order neighbors are explored.
    #[must_use]
    pub fn steps(self) -> &'static [(isize, isize)] {
        match self {
            AdjacencyMode::Orthogonal => &ORTHOGONAL_STEPS,
            AdjacencyMode::OrthogonalPlusDiagonal => &KING_STEPS,
        }
    }
}

impl fmt::Display for AdjacencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = if self.is_diagonal() { "ON" } else { "OFF" };
        write!(f, "diagonal {s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_rejects_negative() {
        let c = Coord::new(0, 2);
        assert_eq!(c.offset((-1, 0)), None);
        assert_eq!(c.offset((0, -1)), Some(Coord::new(0, 1)));
        assert_eq!(c.offset((1, 1)), Some(Coord::new(1, 3)));
    }

    #[test]
    fn test_step_counts() {
        assert_eq!(AdjacencyMode::Orthogonal.steps().len(), 4);
        assert_eq!(AdjacencyMode::OrthogonalPlusDiagonal.steps().len(), 8);
        assert!(!KING_STEPS.contains(&(0, 0)));
    }

    #[test]
    fn test_is_adjacent() {
        let a = Coord::new(1, 1);
        assert!(a.is_adjacent(Coord::new(0, 1), AdjacencyMode::Orthogonal));
        assert!(!a.is_adjacent(Coord::new(0, 0), AdjacencyMode::Orthogonal));
        assert!(a.is_adjacent(Coord::new(0, 0), AdjacencyMode::OrthogonalPlusDiagonal));
        assert!(!a.is_adjacent(a, AdjacencyMode::OrthogonalPlusDiagonal));
        assert!(!a.is_adjacent(Coord::new(1, 3), AdjacencyMode::OrthogonalPlusDiagonal));
    }

    #[test]
    fn test_from_diagonal() {
        assert_eq!(AdjacencyMode::from_diagonal(true), AdjacencyMode::OrthogonalPlusDiagonal);
        assert_eq!(AdjacencyMode::from_diagonal(false), AdjacencyMode::Orthogonal);
        assert_eq!(AdjacencyMode::default(), AdjacencyMode::Orthogonal);
    }
}
