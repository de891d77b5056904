//! Column-wise (y axis) scanline transform.
//!
//! Operates on one column of the transposed image, so "low index" is the
//! image's top edge. Unlike the row pass, the column pass resolves the two
//! open runs touching the image edges and treats those edges as implicit
//! solid boundaries, and its internal runs carry mirrored direction signs
//! (near side `+1`, far side `-1`).

use crate::crossings::boundary_crossings;
use crate::error::ScanError;
use crate::profile::{ScanProfile, fill_enclosed_run};

/// Transforms one corrected binary column into its distance/direction
/// profile.
///
/// A column with no crossings never touches a solid boundary and is
/// returned at its seed values, untransformed and unflagged — this
/// deliberately diverges from the row pass's percolation failure. A column
/// with exactly one crossing cannot anchor its top run and is rejected with
/// [`ScanError::InsufficientCrossings`].
pub fn transform_column(line: &[f32], resolution: f32) -> Result<ScanProfile, ScanError> {
    let bounds = boundary_crossings(line);
    let mut profile = ScanProfile::seeded(line);

    if bounds.is_empty() {
        return Ok(profile);
    }
    if bounds.len() < 2 {
        return Err(ScanError::InsufficientCrossings {
            crossings: bounds.len(),
        });
    }

    // Top run: bounded above by the image edge, below by the first internal
    // boundary. Distances descend toward the boundary; no split, one solid
    // side only.
    let top_end = bounds[1] + 1;
    for j in 0..top_end {
        profile.distances[j] = (top_end - j) as f32 * resolution;
        profile.directions[j] = -1.0;
    }

    // Internal pore runs. The top run consumed the first two crossings, and
    // each later boundary serves as the lower wall of one run and the upper
    // wall of the next, so pore runs are delimited by the odd-even pairs
    // (b[1], b[2]), (b[3], b[4]), ...
    for pair in bounds[1..].chunks_exact(2) {
        let lbound = pair[0] + 1;
        let rbound = pair[1] + 1;
        fill_enclosed_run(
            &mut profile.distances[lbound..rbound],
            &mut profile.directions[lbound..rbound],
            resolution,
            1.0,
        );
    }

    // Bottom run: from after the last crossing down to the image edge.
    let bottom_start = bounds[bounds.len() - 1] + 1;
    for (steps, j) in (bottom_start..line.len()).enumerate() {
        profile.distances[j] = (steps + 1) as f32 * resolution;
        profile.directions[j] = 1.0;
    }

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::transform_column;
    use crate::error::ScanError;

    #[test]
    fn open_runs_resolve_against_image_edges() {
        // top->bottom: pore, pore, solid, pore, pore; crossings at 1 and 2.
        let line = [0.0f32, 0.0, 1.0, 0.0, 0.0];
        let p = transform_column(&line, 1.0).expect("two crossings");

        assert_eq!(p.distances, vec![3.0, 2.0, 1.0, 1.0, 2.0]);
        assert_eq!(p.directions, vec![-1.0, -1.0, -1.0, 1.0, 1.0]);
    }

    #[test]
    fn scaled_resolution() {
        let line = [0.0f32, 0.0, 1.0, 0.0, 0.0];
        let p = transform_column(&line, 0.25).expect("two crossings");
        assert_eq!(p.distances, vec![0.75, 0.5, 0.25, 0.25, 0.5]);
    }

    #[test]
    fn internal_runs_use_mirrored_signs() {
        // pore, solid, pore, pore, pore, solid, pore: crossings 0,1,4,5.
        let line = [0.0f32, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let p = transform_column(&line, 1.0).expect("four crossings");

        // Top run covers 0..2 (through the first solid cell).
        assert_eq!(&p.distances[0..2], &[2.0, 1.0]);
        assert_eq!(&p.directions[0..2], &[-1.0, -1.0]);
        // Internal run 2..5, odd gap, extra cell near the top.
        assert_eq!(&p.distances[2..5], &[1.0, 2.0, 1.0]);
        assert_eq!(&p.directions[2..5], &[1.0, 1.0, -1.0]);
        // Bottom run 6..7.
        assert_eq!(p.distances[6], 1.0);
        assert_eq!(p.directions[6], 1.0);
    }

    #[test]
    fn bottom_run_ascends_to_the_edge() {
        let line = [0.0f32, 1.0, 1.0, 0.0, 0.0, 0.0];
        let p = transform_column(&line, 1.0).expect("two crossings");

        // Crossings at 0 and 2; top run covers 0..3.
        assert_eq!(&p.distances[0..3], &[3.0, 2.0, 1.0]);
        assert_eq!(&p.directions[0..3], &[-1.0, -1.0, -1.0]);
        assert_eq!(&p.distances[3..6], &[1.0, 2.0, 3.0]);
        assert_eq!(&p.directions[3..6], &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn no_crossings_leaves_the_seed_untouched() {
        let p = transform_column(&[0.0f32; 4], 1.0).expect("no crossings is valid");
        assert_eq!(p.distances, vec![0.0; 4]);
        assert_eq!(p.directions, vec![0.0; 4]);

        let all_solid = transform_column(&[1.0f32; 3], 1.0).expect("no crossings is valid");
        assert!(all_solid.distances.iter().all(|v| v.is_nan()));
        assert!(all_solid.directions.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn single_crossing_is_rejected() {
        let line = [0.0f32, 0.0, 1.0, 1.0];
        let err = transform_column(&line, 1.0).expect_err("top run has no anchor");
        assert_eq!(err, ScanError::InsufficientCrossings { crossings: 1 });
    }

    #[test]
    fn odd_crossing_counts_are_tolerated() {
        // Starts solid, ends pore: three crossings. The last crossing both
        // closes an internal run and anchors the bottom run.
        let line = [1.0f32, 0.0, 1.0, 0.0, 0.0];
        let p = transform_column(&line, 1.0).expect("column pass has no parity rule");

        // Crossings at 0, 1, 2; top run covers 0..2.
        assert_eq!(&p.distances[0..2], &[2.0, 1.0]);
        assert_eq!(&p.distances[3..5], &[1.0, 2.0]);
        assert_eq!(&p.directions[3..5], &[1.0, 1.0]);
    }
}
