//! Random cave generation.
//!
//! A cave is a [`WorldLayout`]: the entrance at `(0, 0)`, one wumpus, one
//! piece of gold and a handful of pits. Placement is uniform over the grid
//! with rejection sampling: each draw that lands on an already-excluded cell
//! is thrown away and redrawn.
//!
//! # Placement order
//!
//! | Step | Entity | Excluded cells |
//! |------|--------|----------------|
//! | 1 | wumpus | entrance |
//! | 2 | gold | entrance, wumpus |
//! | 3..  | each pit | entrance, wumpus, gold, earlier pits |
//!
//! # Termination
//!
//! There is no retry cap. The exclusion set never holds more than
//! `3 + pit_count(n)` cells, which is at most 13 of 100 on the largest grid
//! and 6 of 16 on the smallest, so every draw succeeds with probability at
//! least 0.6 and the loop ends almost surely after a few attempts.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;
use wumpus_types::Position;

use crate::error::WorldError;
use crate::grid::Grid;

/// Divisor applied to the cell count when sizing the pit set.
///
/// `n * n / 5` is `floor(n^2 * 0.2)` in integer arithmetic.
const PIT_DENSITY_DIVISOR: u16 = 5;

/// Number of pits for an `n` x `n` grid: `clamp(floor(n^2 * 0.2), 1, n)`.
pub fn pit_count(grid_size: u8) -> usize {
    let n = u16::from(grid_size);
    let by_density = n.saturating_mul(n) / PIT_DENSITY_DIVISOR;
    usize::from(by_density.clamp(1, n.max(1)))
}

/// A complete placement of entrance, hazards and gold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldLayout {
    /// Side length of the grid.
    pub grid_size: u8,
    /// Player start, always the entrance.
    pub start: Position,
    /// Wumpus cell.
    pub wumpus: Position,
    /// Gold cell.
    pub gold: Position,
    /// Pit cells.
    pub pits: BTreeSet<Position>,
}

impl WorldLayout {
    /// Validate a hand-authored layout against the placement invariants.
    ///
    /// The pit count is not forced to follow [`pit_count`]; fixed layouts
    /// may use any number of pits, including none.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidGridSize`] for an unsupported size,
    /// [`WorldError::OutOfBounds`] if anything is off the grid, and
    /// [`WorldError::Overlap`] if the wumpus, gold or a pit shares a cell
    /// it must not.
    pub fn fixed(
        grid_size: u8,
        wumpus: Position,
        gold: Position,
        pits: impl IntoIterator<Item = Position>,
    ) -> Result<Self, WorldError> {
        let grid = Grid::checked(grid_size)?;
        let pits: BTreeSet<Position> = pits.into_iter().collect();

        check_bounds(grid, "wumpus", wumpus)?;
        check_bounds(grid, "gold", gold)?;
        for pit in &pits {
            check_bounds(grid, "pit", *pit)?;
        }

        if wumpus == Position::ORIGIN {
            return Err(overlap("wumpus", wumpus, "entrance"));
        }
        if gold == Position::ORIGIN {
            return Err(overlap("gold", gold, "entrance"));
        }
        if gold == wumpus {
            return Err(overlap("gold", gold, "wumpus"));
        }
        for pit in &pits {
            let other = if *pit == Position::ORIGIN {
                Some("entrance")
            } else if *pit == wumpus {
                Some("wumpus")
            } else if *pit == gold {
                Some("gold")
            } else {
                None
            };
            if let Some(other) = other {
                return Err(overlap("pit", *pit, other));
            }
        }

        Ok(Self {
            grid_size,
            start: Position::ORIGIN,
            wumpus,
            gold,
            pits,
        })
    }
}

/// Generate a random cave on an `grid_size` x `grid_size` grid.
///
/// The RNG is injected so callers can pass a seeded generator for
/// reproducible caves.
///
/// # Errors
///
/// Returns [`WorldError::InvalidGridSize`] if `grid_size` is outside the
/// supported range.
pub fn generate(grid_size: u8, rng: &mut impl Rng) -> Result<WorldLayout, WorldError> {
    let grid = Grid::checked(grid_size)?;
    let start = Position::ORIGIN;

    let mut excluded = BTreeSet::from([start]);

    let wumpus = random_position(grid, &excluded, rng);
    excluded.insert(wumpus);

    let gold = random_position(grid, &excluded, rng);
    excluded.insert(gold);

    let target = pit_count(grid_size);
    let mut pits = BTreeSet::new();
    while pits.len() < target {
        let pit = random_position(grid, &excluded, rng);
        excluded.insert(pit);
        pits.insert(pit);
    }

    debug!(
        grid_size,
        pit_count = pits.len(),
        "Cave generated"
    );

    Ok(WorldLayout {
        grid_size,
        start,
        wumpus,
        gold,
        pits,
    })
}

/// Draw uniform cells until one falls outside `excluded`.
fn random_position(grid: Grid, excluded: &BTreeSet<Position>, rng: &mut impl Rng) -> Position {
    loop {
        let candidate = Position::new(
            rng.random_range(0..grid.size()),
            rng.random_range(0..grid.size()),
        );
        if !excluded.contains(&candidate) {
            return candidate;
        }
    }
}

fn check_bounds(grid: Grid, entity: &'static str, position: Position) -> Result<(), WorldError> {
    if grid.contains(position) {
        Ok(())
    } else {
        Err(WorldError::OutOfBounds {
            entity,
            position,
            grid_size: grid.size(),
        })
    }
}

const fn overlap(entity: &'static str, position: Position, other: &'static str) -> WorldError {
    WorldError::Overlap {
        entity,
        position,
        other,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::grid::{MAX_GRID_SIZE, MIN_GRID_SIZE};

    #[test]
    fn pit_count_follows_density_formula() {
        // floor(16 * 0.2) = 3
        assert_eq!(pit_count(4), 3);
        // floor(25 * 0.2) = 5, clamped to n = 5
        assert_eq!(pit_count(5), 5);
        // floor(36 * 0.2) = 7, clamped to 6
        assert_eq!(pit_count(6), 6);
        assert_eq!(pit_count(10), 10);
    }

    #[test]
    fn generated_worlds_satisfy_placement_invariants() {
        for seed in 0..200_u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
                let layout = generate(size, &mut rng);
                assert!(layout.is_ok());
                let Ok(layout) = layout else { continue };
                let grid = Grid::new(layout.grid_size);

                assert_eq!(layout.start, Position::ORIGIN);
                assert_ne!(layout.wumpus, Position::ORIGIN);
                assert_ne!(layout.gold, Position::ORIGIN);
                assert_ne!(layout.gold, layout.wumpus);
                assert_eq!(layout.pits.len(), pit_count(size));
                assert!(!layout.pits.contains(&Position::ORIGIN));
                assert!(!layout.pits.contains(&layout.wumpus));
                assert!(!layout.pits.contains(&layout.gold));

                assert!(grid.contains(layout.wumpus));
                assert!(grid.contains(layout.gold));
                assert!(layout.pits.iter().all(|p| grid.contains(*p)));
            }
        }
    }

    #[test]
    fn same_seed_same_cave() {
        let a = generate(6, &mut StdRng::seed_from_u64(7));
        let b = generate(6, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn generate_rejects_bad_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(3, &mut rng).is_err());
        assert!(generate(11, &mut rng).is_err());
    }

    #[test]
    fn fixed_layout_accepts_valid_placement() {
        let layout = WorldLayout::fixed(
            4,
            Position::new(1, 0),
            Position::new(2, 2),
            [Position::new(3, 3)],
        );
        assert!(layout.is_ok());
    }

    #[test]
    fn fixed_layout_rejects_wumpus_on_entrance() {
        let err = WorldLayout::fixed(4, Position::ORIGIN, Position::new(2, 2), []);
        assert!(matches!(
            err,
            Err(WorldError::Overlap {
                entity: "wumpus",
                ..
            })
        ));
    }

    #[test]
    fn fixed_layout_rejects_pit_on_gold() {
        let err = WorldLayout::fixed(
            4,
            Position::new(1, 0),
            Position::new(2, 2),
            [Position::new(2, 2)],
        );
        assert!(matches!(
            err,
            Err(WorldError::Overlap {
                entity: "pit",
                other: "gold",
                ..
            })
        ));
    }

    #[test]
    fn fixed_layout_rejects_out_of_bounds() {
        let err = WorldLayout::fixed(4, Position::new(4, 0), Position::new(2, 2), []);
        assert!(matches!(err, Err(WorldError::OutOfBounds { .. })));
    }
}
