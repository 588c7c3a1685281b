//! Bounded two-dimensional storage.

#[cfg(test)]
mod tests;

use crate::Point;

/// A fixed-size grid of values stored row-major in a flat buffer.
///
/// Accesses outside of the grid are not errors. They are reported as `None`
/// from [Grid::try_get] and ignored by [Grid::set], which lets callers use the
/// grid as an in-bounds probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T>
where
    T: Copy + Default,
{
    /// Construct a new grid where every cell holds the default value.
    ///
    /// # Panics
    ///
    /// Panics if either dimension doesn't fit in a [Point] coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use reservoir::{Cell, Grid, Point};
    ///
    /// let grid = Grid::<Cell>::new(4, 3);
    /// assert_eq!(grid.width(), 4);
    /// assert_eq!(grid.height(), 3);
    /// assert_eq!(grid.try_get(Point::new(3, 2)), Some(Cell::Empty));
    /// assert_eq!(grid.try_get(Point::new(4, 2)), None);
    /// ```
    #[track_caller]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "grid of size {width}x{height} out of range"
        );

        let Some(len) = width.checked_mul(height) else {
            panic!("grid of size {width}x{height} out of range");
        };

        Self {
            data: vec![T::default(); len],
            width,
            height,
        }
    }

    /// Get the value at the given position, or `None` if it's out of bounds.
    #[inline]
    pub fn try_get(&self, pos: Point) -> Option<T> {
        self.data.get(self.index(pos)?).copied()
    }

    /// Test if the given position holds anything other than the default
    /// value.
    #[inline]
    pub fn is_occupied(&self, pos: Point) -> bool
    where
        T: PartialEq,
    {
        self.try_get(pos).map_or(false, |value| value != T::default())
    }
}

impl<T> Grid<T> {
    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Test if the given position is inside of the grid.
    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        self.index(pos).is_some()
    }

    /// Get a mutable reference to the value at the given position.
    #[inline]
    pub fn try_get_mut(&mut self, pos: Point) -> Option<&mut T> {
        let index = self.index(pos)?;
        self.data.get_mut(index)
    }

    /// Set the value at the given position.
    ///
    /// Returns `false` and leaves the grid untouched if the position is out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use reservoir::{Cell, Grid, Point};
    ///
    /// let mut grid = Grid::<Cell>::new(2, 2);
    /// assert!(grid.set(Point::new(1, 1), Cell::Rock));
    /// assert!(!grid.set(Point::new(-1, 1), Cell::Rock));
    /// assert_eq!(grid.try_get(Point::new(1, 1)), Some(Cell::Rock));
    /// ```
    #[inline]
    pub fn set(&mut self, pos: Point, value: T) -> bool {
        match self.try_get_mut(pos) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Access the specified row in the grid.
    #[inline]
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }

        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use reservoir::{Cell, Grid, Point};
    ///
    /// let mut grid = Grid::<Cell>::new(3, 2);
    /// grid.set(Point::new(2, 1), Cell::Sand);
    ///
    /// let mut it = grid.rows();
    /// assert_eq!(it.next(), Some(&[Cell::Empty; 3][..]));
    /// assert_eq!(it.next(), Some(&[Cell::Empty, Cell::Empty, Cell::Sand][..]));
    /// assert_eq!(it.next(), None);
    /// ```
    #[inline]
    pub fn rows(&self) -> core::slice::Chunks<'_, T> {
        self.data.chunks(self.width.max(1))
    }

    /// Iterate over every cell together with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, value)| (Point::new(x as i32, y as i32), value))
        })
    }

    /// Translate a position into an index in the flat buffer.
    #[inline]
    fn index(&self, pos: Point) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }
}
