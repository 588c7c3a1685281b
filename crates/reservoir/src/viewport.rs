//! Bounding rectangles over occupied grid cells.


use crate::{Grid, Point};

/// An axis-aligned rectangle on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    /// Construct a new frame.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Grow the frame by the given margin on each side.
    #[inline]
    pub fn expand(self, margin: Margin) -> Self {
        Self {
            x: self.x - margin.left,
            y: self.y - margin.top,
            width: self.width + margin.left + margin.right,
            height: self.height + margin.top + margin.bottom,
        }
    }

    /// Intersect the frame with a grid of the given size, returning `None` if
    /// nothing is left.
    ///
    /// # Examples
    ///
    /// ```
    /// use reservoir::Frame;
    ///
    /// let frame = Frame::new(-2, 1, 6, 3);
    /// assert_eq!(frame.clip(3, 10), Some(Frame::new(0, 1, 3, 3)));
    /// assert_eq!(frame.clip(3, 1), None);
    /// ```
    pub fn clip(self, width: usize, height: usize) -> Option<Self> {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);

        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = (self.x + self.width).min(width);
        let y1 = (self.y + self.height).min(height);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        Some(Self::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// Iterate over rows of positions covered by the frame.
    pub(crate) fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Point>> {
        let Frame {
            x,
            y,
            width,
            height,
        } = *self;

        (y..y + height).map(move |y| (x..x + width).map(move |x| Point::new(x, y)))
    }
}

/// Margin applied around a [Frame].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Margin {
    /// A margin with the same size on every side.
    #[inline]
    pub const fn uniform(n: i32) -> Self {
        Self {
            left: n,
            right: n,
            top: n,
            bottom: n,
        }
    }
}

/// Find the smallest frame enclosing every cell which doesn't hold the
/// default value, or `None` if there are no such cells.
pub fn extract<T>(grid: &Grid<T>) -> Option<Frame>
where
    T: Default + PartialEq,
{
    let empty = T::default();
    let mut bounds: Option<(Point, Point)> = None;

    for (pos, value) in grid.iter() {
        if *value == empty {
            continue;
        }

        bounds = Some(match bounds {
            Some((min, max)) => (
                Point::new(min.x.min(pos.x), min.y.min(pos.y)),
                Point::new(max.x.max(pos.x), max.y.max(pos.y)),
            ),
            None => (pos, pos),
        });
    }

    let (min, max) = bounds?;
    Some(Frame::new(min.x, min.y, max.x - min.x + 1, max.y - min.y + 1))
}
