//! Repeated particle drops over a grid of rock barriers.


use core::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::fall::{self, Fall};
use crate::raster::{self, Path};
use crate::{viewport, Cell, Frame, Grid, Margin, Point, Render};

/// Largest grid we are willing to allocate.
const MAX_CELLS: i64 = 1 << 28;

/// Errors raised while setting up or running a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("no termination after {limit} drops ({rested} units of sand at rest)")]
    Exhausted { limit: usize, rested: usize },
    #[error("grid of size {width}x{height} is too large")]
    Oversized { width: i64, height: i64 },
}

/// Which kind of cave is being simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Nothing below the lowest barrier, particles eventually fall out.
    Void,
    /// An infinite floor two rows below the lowest barrier.
    Floor,
}

impl Variant {
    /// Both variants, in order.
    pub const ALL: [Variant; 2] = [Variant::Void, Variant::Floor];

    /// Puzzle part number of the variant.
    #[inline]
    pub fn part(self) -> u32 {
        match self {
            Variant::Void => 1,
            Variant::Floor => 2,
        }
    }

    /// Margin applied around the displayed frame unless configured.
    #[inline]
    pub fn default_margin(self) -> Margin {
        match self {
            Variant::Void => Margin::default(),
            Variant::Floor => Margin {
                left: 8,
                right: 10,
                top: 0,
                bottom: 2,
            },
        }
    }

    /// Test if a particle resting at `rest` ends the run.
    #[inline]
    fn stops_at(self, rest: Point, source: Point) -> bool {
        match self {
            Variant::Void => false,
            Variant::Floor => rest == source,
        }
    }
}

/// Simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where particles are emitted.
    pub source: Point,
    /// Upper bound on drops before giving up. Defaults to one more than the
    /// number of cells in the grid.
    pub max_drops: Option<usize>,
    /// Margin around the displayed frame. Defaults to
    /// [Variant::default_margin].
    pub margin: Option<Margin>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Point::new(500, 0),
            max_drops: None,
            margin: None,
        }
    }
}

/// Size and placement of the grid for a given set of paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    /// Offset added to input coordinates to get grid coordinates.
    pub shift: Point,
    /// Floor row in grid coordinates.
    pub floor: Option<i32>,
}

impl Layout {
    /// Fit a grid around `paths` and `source`.
    ///
    /// Without a floor the grid covers every waypoint and the source, with a
    /// free column on either side. With a floor it also covers the widest pile
    /// that can form before the source is buried.
    pub fn fit(variant: Variant, paths: &[Path], source: Point) -> Result<Self, Error> {
        let mut min = (i64::from(source.x), i64::from(source.y));
        let mut max = min;

        for p in paths.iter().flat_map(Path::waypoints) {
            min = (min.0.min(i64::from(p.x)), min.1.min(i64::from(p.y)));
            max = (max.0.max(i64::from(p.x)), max.1.max(i64::from(p.y)));
        }

        let floor = match variant {
            Variant::Void => {
                min.0 -= 1;
                max.0 += 1;
                None
            }
            Variant::Floor => {
                let floor = max.1 + 2;
                let spread = floor - i64::from(source.y);
                min.0 = min.0.min(i64::from(source.x) - spread);
                max.0 = max.0.max(i64::from(source.x) + spread);
                max.1 = floor;
                Some(floor)
            }
        };

        let width = max.0 - min.0 + 1;
        let height = max.1 - min.1 + 1;

        let oversized = Error::Oversized { width, height };

        if width.saturating_mul(height) > MAX_CELLS {
            return Err(oversized);
        }

        let (Ok(shift_x), Ok(shift_y)) = (i32::try_from(-min.0), i32::try_from(-min.1)) else {
            return Err(oversized);
        };

        let floor = match floor {
            Some(floor) => match i32::try_from(floor - min.1) {
                Ok(floor) => Some(floor),
                Err(..) => return Err(oversized),
            },
            None => None,
        };

        Ok(Self {
            width: width as usize,
            height: height as usize,
            shift: Point::new(shift_x, shift_y),
            floor,
        })
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// A particle fell out of the grid.
    Escaped,
    /// A particle came to rest on the source.
    SourceBlocked,
}

/// The result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub variant: Variant,
    pub source: Point,
    /// Particles which came to rest.
    pub rested: usize,
    /// Particles dropped, including one which escaped.
    pub drops: usize,
    pub termination: Termination,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = self.variant.part();
        let rested = self.rested;

        match self.termination {
            Termination::Escaped => write!(
                f,
                "part {part}: {rested} units of sand came to rest before one escaped"
            ),
            Termination::SourceBlocked => write!(
                f,
                "part {part}: {rested} units of sand came to rest, the source was blocked"
            ),
        }
    }
}

/// A cave being filled with sand.
pub struct Simulation {
    variant: Variant,
    grid: Grid<Cell>,
    layout: Layout,
    /// Source in grid coordinates.
    source: Point,
    /// Frame taken before the floor was added.
    frame: Option<Frame>,
    max_drops: usize,
    margin: Margin,
}

impl Simulation {
    /// Set up a new simulation by drawing `paths` onto a fitted grid.
    pub fn new(variant: Variant, config: &Config, paths: &[Path]) -> Result<Self, Error> {
        let layout = Layout::fit(variant, paths, config.source)?;

        log::debug!(
            "part {}: {}x{} grid, shift {}, floor {:?}",
            variant.part(),
            layout.width,
            layout.height,
            layout.shift,
            layout.floor
        );

        let mut grid = Grid::new(layout.width, layout.height);
        let source = config.source + layout.shift;
        grid.set(source, Cell::Source);

        let mut cells = 0;

        for path in paths {
            let mut path = path.clone();
            path.translate(layout.shift);
            cells += raster::rasterize(&path, &mut grid);
        }

        log::debug!("rasterized {} paths covering {cells} cells", paths.len());

        // The floor spans the whole grid, so take the frame before adding it.
        let frame = viewport::extract(&grid);

        if let Some(floor) = layout.floor {
            let right = layout.width as i32 - 1;
            let floor = Path::new(vec![Point::new(0, floor), Point::new(right, floor)]);
            raster::rasterize(&floor, &mut grid);
        }

        Ok(Self {
            variant,
            grid,
            layout,
            source,
            frame,
            max_drops: config.max_drops.unwrap_or(layout.cells() + 1),
            margin: config.margin.unwrap_or_else(|| variant.default_margin()),
        })
    }

    /// Access the underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Access the fitted layout.
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Drop particles until the run terminates.
    ///
    /// Fails with [Error::Exhausted] if neither termination condition is met
    /// within the configured number of drops.
    pub fn run(&mut self) -> Result<Report, Error> {
        let mut rested = 0;

        for drops in 1..=self.max_drops {
            let rest = match fall::drop(self.source, &self.grid) {
                Fall::Rested(rest) => rest,
                Fall::Escaped => return Ok(self.report(rested, drops, Termination::Escaped)),
            };

            self.grid.set(rest, Cell::Sand);
            rested += 1;

            if self.variant.stops_at(rest, self.source) {
                return Ok(self.report(rested, drops, Termination::SourceBlocked));
            }
        }

        Err(Error::Exhausted {
            limit: self.max_drops,
            rested,
        })
    }

    /// The frame to display, expanded by the configured margin and clipped to
    /// the grid.
    pub fn viewport(&self) -> Option<Frame> {
        let frame = match self.variant {
            Variant::Void => viewport::extract(&self.grid)?,
            Variant::Floor => self.frame?,
        };

        let expanded = frame.expand(self.margin);
        let clipped = expanded.clip(self.grid.width(), self.grid.height())?;

        if clipped != expanded {
            log::debug!("viewport {expanded:?} clipped to {clipped:?}");
        }

        Some(clipped)
    }

    /// Render the current viewport.
    #[inline]
    pub fn render(&self) -> Option<Render<'_>> {
        Some(Render::new(&self.grid, self.viewport()?))
    }

    fn report(&self, rested: usize, drops: usize, termination: Termination) -> Report {
        Report {
            variant: self.variant,
            source: self.source + Point::new(-self.layout.shift.x, -self.layout.shift.y),
            rested,
            drops,
            termination,
        }
    }
}
