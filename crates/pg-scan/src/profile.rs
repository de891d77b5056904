//! Scanline transform output and the shared enclosed-run fill.

use pg_core::{SOLID, UNDEFINED};

/// Co-indexed distance and direction values for one scanline.
///
/// Both vectors share the scanline's length and its undefined mask: the
/// profile is seeded from the corrected line with solid cells undefined and
/// pore cells at zero, and the transforms overwrite only the cells they
/// cover.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanProfile {
    pub distances: Vec<f32>,
    pub directions: Vec<f32>,
}

impl ScanProfile {
    /// Seeds a profile from a corrected binary scanline.
    pub fn seeded(line: &[f32]) -> Self {
        let seed: Vec<f32> = line
            .iter()
            .map(|&v| if v == SOLID { UNDEFINED } else { 0.0 })
            .collect();
        Self {
            distances: seed.clone(),
            directions: seed,
        }
    }
}

/// Fills one pore run enclosed by solid on both sides.
///
/// The run splits at its midpoint into a near (low-index) half of
/// `ceil(gap / 2)` cells and a far half of `gap / 2` cells. Distances ascend
/// `1..=near_len` away from the near boundary, then mirror back down toward
/// the far boundary; an odd gap's extra cell lands on the near side.
/// Directions are `near_sign` on the near half and `-near_sign` on the far
/// half, flipping exactly once at the split point.
pub(crate) fn fill_enclosed_run(
    distances: &mut [f32],
    directions: &mut [f32],
    resolution: f32,
    near_sign: f32,
) {
    debug_assert_eq!(distances.len(), directions.len());

    let gap = distances.len();
    let near_len = gap - gap / 2;
    for j in 0..gap {
        let steps = if j < near_len { j + 1 } else { gap - j };
        distances[j] = steps as f32 * resolution;
        directions[j] = if j < near_len { near_sign } else { -near_sign };
    }
}

#[cfg(test)]
mod tests {
    use super::{ScanProfile, fill_enclosed_run};

    #[test]
    fn seed_masks_solid_and_zeroes_pore() {
        let profile = ScanProfile::seeded(&[1.0, 0.0, 0.0, 1.0]);
        assert!(profile.distances[0].is_nan());
        assert!(profile.distances[3].is_nan());
        assert_eq!(&profile.distances[1..3], &[0.0, 0.0]);
        assert_eq!(
            profile.distances.iter().map(|v| v.is_nan()).collect::<Vec<_>>(),
            profile.directions.iter().map(|v| v.is_nan()).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn even_run_is_a_mirrored_pair() {
        let mut dist = vec![0.0f32; 6];
        let mut dir = vec![0.0f32; 6];
        fill_enclosed_run(&mut dist, &mut dir, 2.0, -1.0);

        assert_eq!(dist, vec![2.0, 4.0, 6.0, 6.0, 4.0, 2.0]);
        assert_eq!(dir, vec![-1.0, -1.0, -1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn odd_run_extra_cell_is_on_the_near_side() {
        let mut dist = vec![0.0f32; 5];
        let mut dir = vec![0.0f32; 5];
        fill_enclosed_run(&mut dist, &mut dir, 1.0, -1.0);

        assert_eq!(dist, vec![1.0, 2.0, 3.0, 2.0, 1.0]);
        assert_eq!(dir, vec![-1.0, -1.0, -1.0, 1.0, 1.0]);
    }

    #[test]
    fn mirrored_signs_for_the_column_pass() {
        let mut dist = vec![0.0f32; 4];
        let mut dir = vec![0.0f32; 4];
        fill_enclosed_run(&mut dist, &mut dir, 1.0, 1.0);

        assert_eq!(dist, vec![1.0, 2.0, 2.0, 1.0]);
        assert_eq!(dir, vec![1.0, 1.0, -1.0, -1.0]);
    }
}
