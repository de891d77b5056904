use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The scanline's crossings cannot be consumed in enclosing pairs, so at
    /// least one pore run has no solid boundary on one side.
    NonPercolating { crossings: usize },
    /// The scanline touches a solid boundary but has too few crossings to
    /// anchor its top edge run.
    InsufficientCrossings { crossings: usize },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPercolating { crossings } => {
                write!(
                    f,
                    "medium does not percolate: {crossings} boundary crossings cannot be paired"
                )
            }
            Self::InsufficientCrossings { crossings } => {
                write!(
                    f,
                    "insufficient boundary crossings: got {crossings}, need at least 2"
                )
            }
        }
    }
}

impl std::error::Error for ScanError {}
