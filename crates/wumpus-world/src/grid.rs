//! Square grid geometry: bounds, stepping, neighbours and straight rays.
//!
//! The grid never wraps. Every helper here clips to `[0, size)` on both
//! axes, so callers never see an out-of-range [`Position`].

use wumpus_types::{Direction, Position};

use crate::error::WorldError;

/// Smallest supported grid side length.
pub const MIN_GRID_SIZE: u8 = 4;

/// Largest supported grid side length.
pub const MAX_GRID_SIZE: u8 = 10;

/// A square `size` x `size` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    size: u8,
}

impl Grid {
    /// Wrap a side length without range checks.
    ///
    /// Use this for sizes that already came from a validated session.
    pub const fn new(size: u8) -> Self {
        Self { size }
    }

    /// Wrap a side length, rejecting anything outside
    /// [`MIN_GRID_SIZE`]..=[`MAX_GRID_SIZE`].
    pub const fn checked(size: u8) -> Result<Self, WorldError> {
        if size < MIN_GRID_SIZE || size > MAX_GRID_SIZE {
            return Err(WorldError::InvalidGridSize {
                size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Side length.
    pub const fn size(self) -> u8 {
        self.size
    }

    /// Whether `pos` lies on the grid.
    pub const fn contains(self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// The cell one step from `from` in direction `dir`, or `None` at a wall.
    pub fn step(self, from: Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.delta();
        let x = from.x.checked_add_signed(dx)?;
        let y = from.y.checked_add_signed(dy)?;
        let next = Position::new(x, y);
        self.contains(next).then_some(next)
    }

    /// Orthogonal neighbours of `pos` that lie on the grid.
    pub fn neighbors(self, pos: Position) -> impl Iterator<Item = Position> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(pos, dir))
    }

    /// Whether `a` and `b` are orthogonally adjacent.
    pub fn adjacent(self, a: Position, b: Position) -> bool {
        self.neighbors(a).any(|n| n == b)
    }

    /// Every cell strictly beyond `from` in direction `dir`, nearest first,
    /// stopping at the wall.
    pub fn ray(self, from: Position, dir: Direction) -> impl Iterator<Item = Position> {
        core::iter::successors(self.step(from, dir), move |pos| self.step(*pos, dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_supported_range() {
        for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            assert!(Grid::checked(size).is_ok());
        }
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert!(matches!(
            Grid::checked(3),
            Err(WorldError::InvalidGridSize { size: 3, .. })
        ));
        assert!(Grid::checked(11).is_err());
        assert!(Grid::checked(0).is_err());
    }

    #[test]
    fn step_stops_at_walls() {
        let grid = Grid::new(4);
        assert_eq!(grid.step(Position::ORIGIN, Direction::South), None);
        assert_eq!(grid.step(Position::ORIGIN, Direction::West), None);
        assert_eq!(grid.step(Position::new(3, 3), Direction::North), None);
        assert_eq!(grid.step(Position::new(3, 3), Direction::East), None);
        assert_eq!(
            grid.step(Position::ORIGIN, Direction::North),
            Some(Position::new(0, 1))
        );
        assert_eq!(
            grid.step(Position::ORIGIN, Direction::East),
            Some(Position::new(1, 0))
        );
    }

    #[test]
    fn corner_has_two_neighbors() {
        let grid = Grid::new(4);
        let n: Vec<Position> = grid.neighbors(Position::ORIGIN).collect();
        assert_eq!(n.len(), 2);
        assert!(n.contains(&Position::new(0, 1)));
        assert!(n.contains(&Position::new(1, 0)));
    }

    #[test]
    fn interior_cell_has_four_neighbors() {
        let grid = Grid::new(5);
        assert_eq!(grid.neighbors(Position::new(2, 2)).count(), 4);
    }

    #[test]
    fn adjacency_excludes_diagonals_and_self() {
        let grid = Grid::new(4);
        let centre = Position::new(1, 1);
        assert!(grid.adjacent(centre, Position::new(1, 2)));
        assert!(!grid.adjacent(centre, Position::new(2, 2)));
        assert!(!grid.adjacent(centre, centre));
    }

    #[test]
    fn adjacency_does_not_wrap() {
        let grid = Grid::new(4);
        assert!(!grid.adjacent(Position::new(0, 0), Position::new(3, 0)));
        assert!(!grid.adjacent(Position::new(0, 0), Position::new(0, 3)));
    }

    #[test]
    fn ray_runs_to_wall() {
        let grid = Grid::new(4);
        let cells: Vec<Position> = grid.ray(Position::ORIGIN, Direction::East).collect();
        assert_eq!(
            cells,
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0)
            ]
        );
        assert_eq!(grid.ray(Position::ORIGIN, Direction::South).count(), 0);
    }
}
