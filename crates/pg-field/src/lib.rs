//! Field assembly: scanline transforms fanned out over a whole image.

pub mod assemble;
pub mod mask;

mod error;

pub use assemble::{FieldConfig, PoreFields, RowPolicy, build_fields};
pub use error::FieldError;
pub use mask::undefined_where_stagnant;
