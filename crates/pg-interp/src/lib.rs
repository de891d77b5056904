//! Grid interpolation: integer-factor upsampling and field masking.

pub mod upsample;
pub mod velocity;

pub use upsample::upsample_bilinear_f32;
pub use velocity::mask_solid_velocity;
