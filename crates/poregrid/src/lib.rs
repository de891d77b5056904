//! Umbrella crate for the `poregrid` workspace.
//!
//! Re-exports the member crates: image primitives (`pg-core`), the 1D
//! scanline transforms (`pg-scan`), interpolation helpers (`pg-interp`) and
//! whole-image field assembly (`pg-field`).

pub use pg_core::*;
pub use pg_field::*;
pub use pg_interp::*;
pub use pg_scan::*;
