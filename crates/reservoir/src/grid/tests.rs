use super::Grid;
use crate::{Cell, Point};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::<Cell>::new(5, 4);

    assert!(grid.iter().all(|(_, &c)| c == Cell::Empty));
    assert_eq!(grid.iter().count(), 20);
}

#[test]
fn test_out_of_bounds_probe() {
    let grid = Grid::<Cell>::new(5, 4);

    for pos in [
        Point::new(-1, 0),
        Point::new(0, -1),
        Point::new(5, 0),
        Point::new(0, 4),
        Point::new(i32::MAX, i32::MAX),
        Point::new(i32::MIN, 0),
    ] {
        assert_eq!(grid.try_get(pos), None, "{pos}");
        assert!(!grid.contains(pos), "{pos}");
    }

    assert!(grid.contains(Point::new(4, 3)));
}

#[test]
fn test_set_out_of_bounds_is_noop() {
    let mut grid = Grid::<Cell>::new(3, 3);
    let before = grid.clone();

    assert!(!grid.set(Point::new(3, 0), Cell::Rock));
    assert!(!grid.set(Point::new(0, -1), Cell::Rock));
    assert_eq!(grid, before);
}

#[test]
fn test_row_major_layout() {
    let mut grid = Grid::<Cell>::new(3, 2);
    grid.set(Point::new(1, 0), Cell::Rock);
    grid.set(Point::new(0, 1), Cell::Sand);

    assert_eq!(grid.row(0), Some(&[Cell::Empty, Cell::Rock, Cell::Empty][..]));
    assert_eq!(grid.row(1), Some(&[Cell::Sand, Cell::Empty, Cell::Empty][..]));
    assert_eq!(grid.row(2), None);

    let occupied = grid
        .iter()
        .filter(|(_, &c)| c != Cell::Empty)
        .map(|(p, _)| p)
        .collect::<Vec<_>>();

    assert_eq!(occupied, [Point::new(1, 0), Point::new(0, 1)]);
}

#[test]
fn test_is_occupied() {
    let mut grid = Grid::<Cell>::new(2, 2);
    grid.set(Point::new(0, 0), Cell::Source);

    assert!(grid.is_occupied(Point::new(0, 0)));
    assert!(!grid.is_occupied(Point::new(1, 1)));
    assert!(!grid.is_occupied(Point::new(2, 2)));
}

#[test]
fn test_zero_sized() {
    let grid = Grid::<Cell>::new(0, 0);
    assert_eq!(grid.rows().count(), 0);
    assert_eq!(grid.try_get(Point::new(0, 0)), None);
}
