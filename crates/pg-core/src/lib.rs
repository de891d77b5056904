//! Foundational primitives for porous-media grid processing.
//!
//! ## Images and stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`,
//! which allows borrowed views over padded buffers.
//!
//! ## Phases
//! Binary porous-media images are stored as `f32` with pore `0.0` and solid
//! `1.0`. Values strictly between the two appear only transiently, between
//! interpolated upsampling and boundary correction.

mod error;
mod image;

pub use error::Error;
pub use image::{Image, ImageView, binary_to_f32, transpose};

/// Pore phase value of a corrected binary scanline.
pub const PORE: f32 = 0.0;

/// Solid phase value of a corrected binary scanline.
pub const SOLID: f32 = 1.0;

/// Sentinel for cells that carry no defined field value.
pub const UNDEFINED: f32 = f32::NAN;
