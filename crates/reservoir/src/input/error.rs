use core::ops::Range;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(String),
    #[error("expected integer")]
    ExpectedInteger,
    #[error("expected coordinate pair `x,y`")]
    ExpectedPoint,
    #[error("not utf-8")]
    NotUtf8,
    #[error("unexpected eof")]
    UnexpectedEof,
}

/// Error raised through string processing.
#[derive(Debug, Error)]
#[error("{kind} (at {span:?})")]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Byte span of the input which caused the error.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
