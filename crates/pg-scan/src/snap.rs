//! Boundary correction for scanlines blurred by interpolated upsampling.
//!
//! Linear interpolation of a binary image produces values strictly between
//! pore and solid around every phase boundary. Snapping all of them to pore
//! would shrink the solid phase by up to one original cell, so the corrector
//! forces a configurable leading fraction of each original cell back to
//! solid before binarizing the rest.

use pg_core::{PORE, SOLID};

/// Named snap rule: how many leading sub-samples of each original cell are
/// forced to the solid phase (half-open `[0, solid_prefix)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapPolicy {
    pub solid_prefix: usize,
}

impl SnapPolicy {
    /// Half-cell rule: the first half of each cell's sub-samples.
    pub fn for_split(split: usize) -> Self {
        Self {
            solid_prefix: split / 2,
        }
    }

    /// Disables the forced prefix; values are only binarized.
    pub fn binarize_only() -> Self {
        Self { solid_prefix: 0 }
    }
}

/// Restores crisp {0, 1} phases on a scanline upsampled by `split`.
///
/// Each original cell spans `split` consecutive sub-samples. Sub-samples in
/// the policy's solid prefix become solid; every other value that is not
/// exactly solid snaps to pore. The output therefore contains only `PORE`
/// and `SOLID`.
pub fn snap_scanline(line: &[f32], split: usize, policy: SnapPolicy) -> Vec<f32> {
    assert!(split > 0, "split must be positive");
    assert!(
        policy.solid_prefix <= split,
        "solid prefix cannot exceed the split factor"
    );

    let mut out = Vec::with_capacity(line.len());
    for (i, &v) in line.iter().enumerate() {
        let sub = i % split;
        let snapped = if sub < policy.solid_prefix || v == SOLID {
            SOLID
        } else {
            PORE
        };
        out.push(snapped);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{SnapPolicy, snap_scanline};
    use pg_core::{PORE, SOLID};

    #[test]
    fn binarize_only_keeps_exact_phases() {
        let line = [1.0f32, 0.75, 0.25, 0.0, 0.0, 1.0];
        let out = snap_scanline(&line, 2, SnapPolicy::binarize_only());
        assert_eq!(out, vec![SOLID, PORE, PORE, PORE, PORE, SOLID]);
    }

    #[test]
    fn solid_prefix_is_forced_per_cell() {
        // split = 4, prefix = 2: sub-samples 0 and 1 of every cell are solid.
        let line = [0.0f32; 8];
        let out = snap_scanline(&line, 4, SnapPolicy::for_split(4));
        assert_eq!(
            out,
            vec![SOLID, SOLID, PORE, PORE, SOLID, SOLID, PORE, PORE]
        );
    }

    #[test]
    fn blurred_boundary_values_snap_to_pore() {
        // Interpolation ramp between a solid and a pore original cell.
        let line = [1.0f32, 0.8, 0.6, 0.4, 0.2, 0.0];
        let out = snap_scanline(&line, 3, SnapPolicy::for_split(3));
        // prefix = 1: sub-sample 0 of each cell forced solid.
        assert_eq!(out, vec![SOLID, PORE, PORE, SOLID, PORE, PORE]);
    }

    #[test]
    fn output_is_strictly_binary() {
        let line: Vec<f32> = (0..24).map(|i| (i as f32) / 23.0).collect();
        let out = snap_scanline(&line, 6, SnapPolicy::for_split(6));
        assert!(out.iter().all(|&v| v == PORE || v == SOLID));
    }
}
