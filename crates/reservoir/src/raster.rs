//! Drawing of barrier paths onto a grid.

#[cfg(test)]
mod tests;

use crate::{Cell, Grid, Point};

/// An ordered sequence of waypoints. Consecutive waypoints are joined by
/// straight segments.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Construct a new path from waypoints.
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Waypoints of the path.
    #[inline]
    pub fn waypoints(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over every grid position covered by the path, endpoints
    /// included. Positions shared by consecutive segments are produced once
    /// per segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use reservoir::{Path, Point};
    ///
    /// let path = Path::new(vec![Point::new(2, 0), Point::new(2, 2), Point::new(0, 2)]);
    ///
    /// let covered = path.cells().collect::<Vec<_>>();
    ///
    /// assert_eq!(covered, [
    ///     Point::new(2, 0), Point::new(2, 1), Point::new(2, 2),
    ///     Point::new(2, 2), Point::new(1, 2), Point::new(0, 2),
    /// ]);
    /// ```
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.points
            .windows(2)
            .flat_map(|pair| Segment::new(pair[0], pair[1]))
    }

    /// Translate every waypoint by the given offset.
    pub fn translate(&mut self, offset: Point) {
        for point in &mut self.points {
            *point = *point + offset;
        }
    }

    /// Largest `y` among waypoints, if any.
    #[inline]
    pub fn max_y(&self) -> Option<i32> {
        self.points.iter().map(|p| p.y).max()
    }
}

/// Draw `path` onto the grid as rock.
///
/// Paths with fewer than two waypoints draw nothing. Cells falling outside of
/// the grid are skipped. Returns the number of cells written.
pub fn rasterize(path: &Path, grid: &mut Grid<Cell>) -> usize {
    let mut written = 0;

    for pos in path.cells() {
        written += usize::from(grid.set(pos, Cell::Rock));
    }

    written
}

/// Unit-step walk between two points, inclusive of both ends.
struct Segment {
    at: Option<Point>,
    to: Point,
}

impl Segment {
    #[inline]
    fn new(from: Point, to: Point) -> Self {
        Self { at: Some(from), to }
    }
}

impl Iterator for Segment {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        let at = self.at.take()?;

        if at != self.to {
            self.at = Some(at + at.step_towards(self.to));
        }

        Some(at)
    }
}
