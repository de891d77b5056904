//! Velocity fields from an upstream flow solve.

use pg_core::{Error, Image, ImageView, SOLID};

/// Zeroes a velocity component wherever the binary image is solid.
///
/// Flow solvers commonly leave stale or unphysical values inside the solid
/// phase; downstream masking assumes solid cells carry exactly zero
/// velocity. Returns [`Error::SizeMismatch`] when the two grids disagree in
/// shape.
pub fn mask_solid_velocity(
    velocity: &ImageView<'_, f32>,
    binary: &ImageView<'_, f32>,
) -> Result<Image<f32>, Error> {
    if velocity.width() != binary.width() || velocity.height() != binary.height() {
        return Err(Error::SizeMismatch {
            expected: binary.width() * binary.height(),
            actual: velocity.width() * velocity.height(),
        });
    }

    let mut out = Image::new_fill(velocity.width(), velocity.height(), 0.0f32);
    for y in 0..velocity.height() {
        let vel = velocity.row(y);
        let phase = binary.row(y);
        let row = out.row_mut(y);
        for x in 0..row.len() {
            row[x] = if phase[x] == SOLID { 0.0 } else { vel[x] };
        }
    }

    Ok(out)
}
