use core::fmt;
use core::ops::Add;

use serde::Serialize;

/// A position on the grid, with `x` increasing to the right and `y`
/// increasing going down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Construct a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Unit step from `self` towards `to`, one of `-1`, `0` or `1` on each
    /// axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use reservoir::Point;
    ///
    /// assert_eq!(Point::new(4, 2).step_towards(Point::new(4, 9)), Point::new(0, 1));
    /// assert_eq!(Point::new(4, 2).step_towards(Point::new(1, 2)), Point::new(-1, 0));
    /// assert_eq!(Point::new(4, 2).step_towards(Point::new(4, 2)), Point::new(0, 0));
    /// ```
    #[inline]
    pub fn step_towards(self, to: Point) -> Point {
        Point::new((to.x - self.x).signum(), (to.y - self.y).signum())
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
