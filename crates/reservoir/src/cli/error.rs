use core::fmt;
use core::ops::Range;
use std::path::Path;

use crate::input::{IStrError, NL};

/// Associate the location of an input error with it.
pub fn error_context(path: &Path, data: &[u8], error: IStrError) -> anyhow::Error {
    let pos = pos_from(data, error.span());

    let context = ErrorContext {
        path: path.display().to_string(),
        pos,
    };

    anyhow::Error::new(error).context(context)
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Get the position of the start of `span`.
pub(crate) fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    match memchr::memrchr(NL, d) {
        Some(n) => LineCol::new(memchr::memchr_iter(NL, d).count(), span.start - n - 1),
        None => LineCol::new(0, span.start),
    }
}

#[derive(Debug)]
struct ErrorContext {
    path: String,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}
