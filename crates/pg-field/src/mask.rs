//! Post-processing masks tied to an external velocity field.

use pg_core::{Image, ImageView, UNDEFINED};

use crate::error::FieldError;

/// Marks grid cells undefined wherever the velocity component is exactly
/// zero.
///
/// Stagnant cells exert no drag on a tracked particle, so the force model
/// treats them like solid: no defined distance or direction. Velocity inside
/// the solid phase is expected to be zeroed already, which makes this a
/// superset of the solid mask.
pub fn undefined_where_stagnant(
    grid: &mut Image<f32>,
    velocity: &ImageView<'_, f32>,
) -> Result<(), FieldError> {
    if grid.width() != velocity.width() || grid.height() != velocity.height() {
        return Err(FieldError::ShapeMismatch {
            expected: (grid.width(), grid.height()),
            actual: (velocity.width(), velocity.height()),
        });
    }

    for y in 0..velocity.height() {
        let vel = velocity.row(y);
        let row = grid.row_mut(y);
        for (cell, &v) in row.iter_mut().zip(vel) {
            if v == 0.0 {
                *cell = UNDEFINED;
            }
        }
    }

    Ok(())
}
