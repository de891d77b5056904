use core::fmt;

/// Errors from constructing image containers and views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer length does not match the requested dimensions, in cells.
    SizeMismatch { expected: usize, actual: usize },
    /// A view's row stride is smaller than its width.
    InvalidStride,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "buffer holds {actual} cells, dimensions require {expected}")
            }
            Self::InvalidStride => write!(f, "row stride is smaller than the view width"),
        }
    }
}

impl std::error::Error for Error {}
