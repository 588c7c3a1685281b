//! Movement of a single falling particle.

#[cfg(test)]
mod tests;

use arrayvec::ArrayVec;

use crate::{Cell, Grid, Point};

/// Candidate moves, in the order they are attempted.
pub const MOVES: [Point; 3] = [Point::new(0, 1), Point::new(-1, 1), Point::new(1, 1)];

/// Classification of a position a particle might move into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// In bounds and not occupied.
    Free,
    /// In bounds and occupied by rock or sand.
    Blocked,
    /// Outside of the grid.
    OutOfBounds,
}

/// Classify the given position.
#[inline]
pub fn probe(grid: &Grid<Cell>, pos: Point) -> Probe {
    match grid.try_get(pos) {
        Some(cell) if cell.is_free() => Probe::Free,
        Some(_) => Probe::Blocked,
        None => Probe::OutOfBounds,
    }
}

/// A single transition of a falling particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move to the given position and keep falling.
    Move(Point),
    /// Every candidate is blocked.
    Rest,
    /// Nothing is free and at least one candidate is outside of the grid.
    Escape,
}

/// Compute the next transition of a particle at `pos`.
pub fn step(grid: &Grid<Cell>, pos: Point) -> Step {
    let mut probes = ArrayVec::<Probe, 3>::new();

    for offset in MOVES {
        let to = pos + offset;

        match probe(grid, to) {
            Probe::Free => return Step::Move(to),
            other => probes.push(other),
        }
    }

    if probes.iter().all(|p| *p == Probe::Blocked) {
        Step::Rest
    } else {
        Step::Escape
    }
}

/// The outcome of dropping a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fall {
    /// The particle came to rest at the given position.
    Rested(Point),
    /// The particle left the grid.
    Escaped,
}

/// Drop a particle from `source` and follow it until it rests or escapes.
///
/// The grid is not modified, marking the rest position is up to the caller.
///
/// # Examples
///
/// ```
/// use reservoir::{fall, Cell, Grid, Point};
/// use reservoir::fall::Fall;
///
/// let mut grid = Grid::<Cell>::new(5, 3);
///
/// for x in 0..5 {
///     grid.set(Point::new(x, 2), Cell::Rock);
/// }
///
/// let source = Point::new(2, 0);
///
/// for expected in [Point::new(2, 1), Point::new(1, 1), Point::new(3, 1)] {
///     assert_eq!(fall::drop(source, &grid), Fall::Rested(expected));
///     grid.set(expected, Cell::Sand);
/// }
///
/// // Probes above the source are never made, so it's now buried.
/// assert_eq!(fall::drop(source, &grid), Fall::Rested(source));
/// ```
pub fn drop(source: Point, grid: &Grid<Cell>) -> Fall {
    let mut pos = source;

    // Every move increases y, so this always reaches a bound.
    loop {
        match step(grid, pos) {
            Step::Move(to) => pos = to,
            Step::Rest => return Fall::Rested(pos),
            Step::Escape => return Fall::Escaped,
        }
    }
}
