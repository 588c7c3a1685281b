use super::{rasterize, Path};
use crate::{Cell, Grid, Point};

fn rocks(grid: &Grid<Cell>) -> Vec<Point> {
    grid.iter()
        .filter(|(_, &c)| c == Cell::Rock)
        .map(|(p, _)| p)
        .collect()
}

#[test]
fn test_segment_marks_exact_span() {
    let cases = [
        (Point::new(2, 3), Point::new(7, 3)),
        (Point::new(7, 3), Point::new(2, 3)),
        (Point::new(4, 1), Point::new(4, 8)),
        (Point::new(4, 8), Point::new(4, 1)),
        (Point::new(5, 5), Point::new(5, 5)),
    ];

    for (a, b) in cases {
        let mut grid = Grid::<Cell>::new(10, 10);
        rasterize(&Path::new(vec![a, b]), &mut grid);

        let mut expected = Vec::new();

        for y in a.y.min(b.y)..=a.y.max(b.y) {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                expected.push(Point::new(x, y));
            }
        }

        assert_eq!(rocks(&grid), expected, "{a} -> {b}");
    }
}

#[test]
fn test_degenerate_paths_draw_nothing() {
    let mut grid = Grid::<Cell>::new(4, 4);

    assert_eq!(rasterize(&Path::new(vec![]), &mut grid), 0);
    assert_eq!(rasterize(&Path::new(vec![Point::new(1, 1)]), &mut grid), 0);
    assert!(rocks(&grid).is_empty());
}

#[test]
fn test_rasterize_is_idempotent() {
    let path = Path::new(vec![
        Point::new(498, 4),
        Point::new(498, 6),
        Point::new(496, 6),
    ]);

    let mut once = Grid::<Cell>::new(510, 12);
    rasterize(&path, &mut once);

    let mut twice = once.clone();
    rasterize(&path, &mut twice);

    assert_eq!(once, twice);
    assert_eq!(
        rocks(&once),
        [
            Point::new(498, 4),
            Point::new(498, 5),
            Point::new(496, 6),
            Point::new(497, 6),
            Point::new(498, 6),
        ]
    );
}

#[test]
fn test_out_of_bounds_cells_are_skipped() {
    let mut grid = Grid::<Cell>::new(3, 3);
    let written = rasterize(
        &Path::new(vec![Point::new(-2, 1), Point::new(4, 1)]),
        &mut grid,
    );

    assert_eq!(written, 3);
    assert_eq!(
        rocks(&grid),
        [Point::new(0, 1), Point::new(1, 1), Point::new(2, 1)]
    );
}

#[test]
fn test_translate_and_max_y() {
    let mut path = Path::new(vec![Point::new(-1, 4), Point::new(-1, 9)]);
    assert_eq!(path.max_y(), Some(9));

    path.translate(Point::new(3, 1));
    assert_eq!(path.waypoints(), [Point::new(2, 5), Point::new(2, 10)]);
    assert_eq!(Path::default().max_y(), None);
}
