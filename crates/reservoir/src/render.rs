use core::fmt;

use crate::{Cell, Frame, Grid};

/// Text rendering of the part of a grid covered by a frame.
///
/// Positions of the frame which fall outside of the grid render as blank.
///
/// # Examples
///
/// ```
/// use reservoir::{Cell, Frame, Grid, Point, Render};
///
/// let mut grid = Grid::<Cell>::new(4, 3);
/// grid.set(Point::new(1, 0), Cell::Source);
/// grid.set(Point::new(1, 1), Cell::Sand);
/// grid.set(Point::new(0, 2), Cell::Rock);
/// grid.set(Point::new(1, 2), Cell::Rock);
///
/// let frame = Frame::new(0, 0, 3, 3);
/// assert_eq!(Render::new(&grid, frame).to_string(), ".+.\n.o.\n##.");
/// ```
pub struct Render<'a> {
    grid: &'a Grid<Cell>,
    frame: Frame,
}

impl<'a> Render<'a> {
    /// Construct a new renderer.
    #[inline]
    pub fn new(grid: &'a Grid<Cell>, frame: Frame) -> Self {
        Self { grid, frame }
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for row in self.frame.rows() {
            if !first {
                writeln!(f)?;
            }

            for pos in row {
                let glyph = self.grid.try_get(pos).map_or(' ', Cell::glyph);
                write!(f, "{glyph}")?;
            }

            first = false;
        }

        Ok(())
    }
}
