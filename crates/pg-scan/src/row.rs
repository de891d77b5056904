//! Row-wise (x axis) scanline transform.

use crate::crossings::boundary_crossings;
use crate::error::ScanError;
use crate::profile::{ScanProfile, fill_enclosed_run};

/// Transforms one corrected binary row into its distance/direction profile.
///
/// Crossings are consumed in consecutive pairs; each pair encloses one pore
/// run, filled with the mirrored distance profile and directions `-1` (near
/// the low-index boundary) then `+1`. Pore cells before the first crossing
/// or after the last one stay at their seed values: the x pass handles no
/// open edge runs.
///
/// An odd crossing count means some run is not enclosed by solid on both
/// sides, so the medium does not percolate along this row; the whole row is
/// rejected with [`ScanError::NonPercolating`].
pub fn transform_row(line: &[f32], resolution: f32) -> Result<ScanProfile, ScanError> {
    let bounds = boundary_crossings(line);
    if bounds.len() % 2 != 0 {
        return Err(ScanError::NonPercolating {
            crossings: bounds.len(),
        });
    }

    let mut profile = ScanProfile::seeded(line);
    for pair in bounds.chunks_exact(2) {
        let lbound = pair[0] + 1;
        let rbound = pair[1] + 1;
        fill_enclosed_run(
            &mut profile.distances[lbound..rbound],
            &mut profile.directions[lbound..rbound],
            resolution,
            -1.0,
        );
    }

    Ok(profile)
}
