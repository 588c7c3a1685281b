//! Input parser.

mod error;

use bstr::{BStr, ByteSlice};

pub use self::error::{ErrorKind, IStrError};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

use crate::{Path, Point};

pub(crate) const NL: u8 = b'\n';

/// Separator between waypoints of a path.
const ARROW: &[u8] = b"->";

/// Helper to parse input.
#[derive(Debug, Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Absolute offset of `data` in the original input.
    index: usize,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'a [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'a BStr {
        BStr::new(self.data)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next non-blank line as `T`, returns `Ok(None)` once the input
    /// is exhausted.
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        while let Some(line) = self.split_once_at(|data| memchr::memchr(NL, data), 1) {
            let mut line = line.trim();

            if line.is_empty() {
                continue;
            }

            return Ok(Some(line.next()?));
        }

        Ok(None)
    }

    /// Split off everything up until the next occurence of `sep` and advance
    /// past it. Returns `None` and leaves the input untouched if `sep` doesn't
    /// occur.
    pub fn split_str(&mut self, sep: &[u8]) -> Option<IStr<'a>> {
        let at = memchr::memmem::find(self.data, sep)?;
        let head = self.slice(0, at)?;
        self.advance(at + sep.len());
        Some(head)
    }

    /// Split into the parts before and after the first `b`, or `None` if it
    /// doesn't occur.
    pub fn split_pair(&self, b: u8) -> Option<(IStr<'a>, IStr<'a>)> {
        let at = memchr::memchr(b, self.data)?;
        let head = self.slice(0, at)?;
        let tail = self.slice(at + 1, self.data.len())?;
        Some((head, tail))
    }

    /// Trim leading and trailing whitespace.
    pub fn trim(&self) -> IStr<'a> {
        let start = self
            .data
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(self.data.len());

        let end = self
            .data
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(start, |n| n + 1);

        self.slice(start, end).unwrap_or(IStr {
            data: &[],
            index: self.index + start,
        })
    }

    /// Byte span covered by the remaining input.
    #[inline]
    pub fn span(&self) -> core::ops::Range<usize> {
        self.index..self.index + self.data.len()
    }

    fn split_once_at<T>(&mut self, find: T, skip: usize) -> Option<IStr<'a>>
    where
        T: FnOnce(&[u8]) -> Option<usize>,
    {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = find(self.data) else {
            let rest = *self;
            self.advance(self.data.len());
            return Some(rest);
        };

        let head = self.slice(0, at)?;
        self.advance(at + skip);
        Some(head)
    }

    /// Take everything remaining.
    #[inline]
    fn take(&mut self) -> IStr<'a> {
        let rest = *self;
        self.advance(self.data.len());
        rest
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index += n;
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, start: usize, end: usize) -> Option<IStr<'a>> {
        Some(Self {
            data: self.data.get(start..end)?,
            index: self.index + start,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind to use when no value is present.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if the input holds nothing
    /// but whitespace.
    fn try_from_input(p: &mut IStr<'_>) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr<'_>) -> Result<Self> {
        let span = p.span();

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(span, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromInput for $ty {
                #[inline]
                fn error_kind() -> ErrorKind {
                    ErrorKind::ExpectedInteger
                }

                #[inline]
                fn try_from_input(p: &mut IStr<'_>) -> Result<Option<Self>> {
                    let word = p.take().trim();

                    if word.is_empty() {
                        return Ok(None);
                    }

                    let Ok(string) = word.data.to_str() else {
                        return Err(IStrError::new(word.span(), ErrorKind::NotUtf8));
                    };

                    let Ok(n) = string.parse() else {
                        return Err(IStrError::new(word.span(), ErrorKind::NotInteger(string.to_owned())));
                    };

                    Ok(Some(n))
                }
            }
        )*
    };
}

integer!(usize, isize, u8, u16, u32, u64, i8, i16, i32, i64);

impl FromInput for Point {
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedPoint
    }

    fn try_from_input(p: &mut IStr<'_>) -> Result<Option<Self>> {
        let token = p.take().trim();

        if token.is_empty() {
            return Ok(None);
        }

        let Some((mut x, mut y)) = token.split_pair(b',') else {
            return Err(IStrError::new(token.span(), ErrorKind::ExpectedPoint));
        };

        Ok(Some(Point::new(x.next()?, y.next()?)))
    }
}

impl FromInput for Path {
    fn try_from_input(p: &mut IStr<'_>) -> Result<Option<Self>> {
        if p.trim().is_empty() {
            return Ok(None);
        }

        let mut points = Vec::new();

        while let Some(mut waypoint) = p.split_str(ARROW) {
            points.push(waypoint.next::<Point>()?);
        }

        points.push(p.next::<Point>()?);
        Ok(Some(Path::new(points)))
    }
}

/// Parse every non-blank line of `data` as a waypoint path.
///
/// # Examples
///
/// ```
/// use reservoir::{input, Path, Point};
///
/// let paths = input::parse_paths(b"498,4 -> 498,6 -> 496,6\n\n503,4 -> 502,4\n")?;
///
/// assert_eq!(paths, [
///     Path::new(vec![Point::new(498, 4), Point::new(498, 6), Point::new(496, 6)]),
///     Path::new(vec![Point::new(503, 4), Point::new(502, 4)]),
/// ]);
///
/// assert!(input::parse_paths(b"498,4 -> 498\n").is_err());
/// # Ok::<_, reservoir::input::IStrError>(())
/// ```
pub fn parse_paths(data: &[u8]) -> Result<Vec<Path>> {
    let mut input = IStr::new(data);
    let mut paths = Vec::new();

    while let Some(path) = input.try_line::<Path>()? {
        paths.push(path);
    }

    Ok(paths)
}
