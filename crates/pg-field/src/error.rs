use std::fmt;

/// Errors from whole-image field assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A row's crossing count is odd, so the medium does not percolate
    /// along it and enclosed runs cannot be paired.
    NonPercolatingRow { row: usize, crossings: usize },
    /// A column has a single crossing, which cannot anchor its top run.
    InsufficientCrossingsColumn { col: usize, crossings: usize },
    /// Two co-indexed grids disagree in shape, as `(width, height)`.
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPercolatingRow { row, crossings } => write!(
                f,
                "medium does not percolate along row {row} ({crossings} boundary crossings)"
            ),
            Self::InsufficientCrossingsColumn { col, crossings } => write!(
                f,
                "column {col} has {crossings} boundary crossing(s), at least two are required"
            ),
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "grid shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl std::error::Error for FieldError {}
