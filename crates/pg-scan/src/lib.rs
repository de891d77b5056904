//! 1D scanline primitives for porous-media distance fields.
//!
//! A scanline is one row (x pass) or one transposed column (y pass) of a
//! corrected binary image: pore `0.0`, solid `1.0`. Each transform is a pure
//! function from a scanline to a freshly allocated [`ScanProfile`] holding
//! co-indexed distance and direction values.
//!
//! The two passes deliberately diverge on malformed topology: a row whose
//! crossings cannot be paired is a percolation failure and raises
//! [`ScanError::NonPercolating`], while a column with no crossings is left
//! untouched. A column with a single crossing cannot anchor its top run and
//! raises [`ScanError::InsufficientCrossings`].

pub mod column;
pub mod crossings;
pub mod profile;
pub mod row;
pub mod snap;

mod error;

pub use column::transform_column;
pub use crossings::boundary_crossings;
pub use error::ScanError;
pub use profile::ScanProfile;
pub use row::transform_row;
pub use snap::{SnapPolicy, snap_scanline};
