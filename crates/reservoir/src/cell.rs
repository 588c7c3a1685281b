/// The contents of a single grid cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    /// Immovable barrier.
    Rock,
    /// A particle which came to rest.
    Sand,
    /// The emission point. Doesn't block falling particles.
    Source,
}

impl Cell {
    /// Test if a falling particle can move into this cell.
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, Cell::Empty | Cell::Source)
    }

    /// Display glyph used when rendering the cell.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Rock => '#',
            Cell::Sand => 'o',
            Cell::Source => '+',
        }
    }
}
