use super::{drop, probe, step, Fall, Probe, Step, MOVES};
use crate::{Cell, Grid, Point};

/// A 5x4 grid with a rock floor along the bottom row.
fn floored() -> Grid<Cell> {
    let mut grid = Grid::new(5, 4);

    for x in 0..5 {
        grid.set(Point::new(x, 3), Cell::Rock);
    }

    grid
}

#[test]
fn test_probe_classification() {
    let mut grid = Grid::<Cell>::new(3, 3);
    grid.set(Point::new(0, 0), Cell::Rock);
    grid.set(Point::new(1, 0), Cell::Sand);
    grid.set(Point::new(2, 0), Cell::Source);

    assert_eq!(probe(&grid, Point::new(0, 0)), Probe::Blocked);
    assert_eq!(probe(&grid, Point::new(1, 0)), Probe::Blocked);
    assert_eq!(probe(&grid, Point::new(2, 0)), Probe::Free);
    assert_eq!(probe(&grid, Point::new(1, 1)), Probe::Free);
    assert_eq!(probe(&grid, Point::new(3, 0)), Probe::OutOfBounds);
    assert_eq!(probe(&grid, Point::new(1, -1)), Probe::OutOfBounds);
}

#[test]
fn test_straight_down_preferred() {
    // Every diagonal is free too, straight down must still win.
    let grid = Grid::<Cell>::new(5, 5);
    assert_eq!(step(&grid, Point::new(2, 1)), Step::Move(Point::new(2, 2)));
}

#[test]
fn test_left_before_right() {
    let mut grid = Grid::<Cell>::new(5, 5);
    grid.set(Point::new(2, 2), Cell::Rock);
    assert_eq!(step(&grid, Point::new(2, 1)), Step::Move(Point::new(1, 2)));

    grid.set(Point::new(1, 2), Cell::Sand);
    assert_eq!(step(&grid, Point::new(2, 1)), Step::Move(Point::new(3, 2)));

    grid.set(Point::new(3, 2), Cell::Sand);
    assert_eq!(step(&grid, Point::new(2, 1)), Step::Rest);
}

#[test]
fn test_free_source_cell_does_not_block() {
    let mut grid = floored();
    grid.set(Point::new(2, 2), Cell::Source);
    assert_eq!(drop(Point::new(2, 0), &grid), Fall::Rested(Point::new(2, 2)));
}

#[test]
fn test_escape_through_bottom() {
    let grid = Grid::<Cell>::new(3, 3);
    assert_eq!(drop(Point::new(1, 0), &grid), Fall::Escaped);
}

#[test]
fn test_escape_off_the_side() {
    // Straight down is blocked at the edge, the left diagonal leaves the grid.
    let mut grid = floored();
    grid.set(Point::new(0, 2), Cell::Sand);
    grid.set(Point::new(1, 2), Cell::Sand);

    assert_eq!(step(&grid, Point::new(0, 1)), Step::Escape);
    assert_eq!(drop(Point::new(0, 0), &grid), Fall::Escaped);
}

#[test]
fn test_rest_and_escape_conditions() {
    let mut grid = floored();
    let source = Point::new(2, 0);

    loop {
        let rest = match drop(source, &grid) {
            Fall::Rested(rest) => rest,
            Fall::Escaped => break,
        };

        for offset in MOVES {
            assert_eq!(probe(&grid, rest + offset), Probe::Blocked, "{rest}");
        }

        grid.set(rest, Cell::Sand);

        if rest == source {
            break;
        }
    }

    // Whatever terminated the pile, the last drop must either be the buried
    // source or correspond to a probe leaving the grid.
    match drop(source, &grid) {
        Fall::Rested(rest) => assert_eq!(rest, source),
        Fall::Escaped => {}
    }
}

#[test]
fn test_drop_is_deterministic() {
    let mut grid = floored();
    grid.set(Point::new(2, 2), Cell::Sand);
    grid.set(Point::new(1, 2), Cell::Rock);

    let first = drop(Point::new(2, 0), &grid);

    for _ in 0..16 {
        assert_eq!(drop(Point::new(2, 0), &grid), first);
    }

    assert_eq!(first, Fall::Rested(Point::new(3, 2)));
}

#[test]
fn test_drop_does_not_mutate() {
    let grid = floored();
    let before = grid.clone();
    let _ = drop(Point::new(2, 0), &grid);
    assert_eq!(grid, before);
}
