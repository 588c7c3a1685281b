//! Grid-based sand settling simulation.
//!
//! Rock barriers are drawn onto a bounded [Grid] from waypoint paths, after
//! which particles are dropped one at a time from a source point until either
//! one escapes the grid or the source itself is buried.

mod cell;
pub mod cli;
pub mod fall;
pub mod grid;
pub mod input;
mod point;
pub mod raster;
mod render;
pub mod scenario;
pub mod viewport;

pub use self::cell::Cell;
pub use self::grid::Grid;
pub use self::point::Point;
pub use self::raster::Path;
pub use self::render::Render;
pub use self::viewport::{Frame, Margin};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::fall::{Fall, Probe};
    pub use crate::input::{FromInput, IStr};
    pub use crate::scenario::{Config, Report, Simulation, Termination, Variant};
    pub use crate::{Cell, Frame, Grid, Margin, Path, Point, Render};
    pub use anyhow::{anyhow, bail, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::{BStr, ByteSlice};
}
