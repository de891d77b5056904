//! Whole-image assembly of the four co-indexed output grids.
//!
//! Every row of the corrected image goes through the row transform; every
//! column goes through the column transform via a transposed copy, and the
//! column results are transposed back. Scanlines are independent, so the
//! fan-out can optionally run on the rayon pool.

use pg_core::{Image, ImageView, transpose};
use pg_scan::{
    ScanError, ScanProfile, SnapPolicy, snap_scanline, transform_column, transform_row,
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::FieldError;

/// What to do with a row whose crossing count is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPolicy {
    /// Fail the whole computation, identifying the row.
    Abort,
    /// Leave the row at its seed values and log a warning.
    Skip,
}

/// Assembly configuration.
///
/// The input image is expected to be upsampled already; `split` is the
/// factor it went through, which fixes the period of the snap rule, and
/// `resolution` is the physical spacing of one upsampled cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Physical spacing of one upsampled cell, in meters.
    pub resolution: f32,
    /// Upsampling factor the input went through.
    pub split: usize,
    /// Boundary correction applied to every scanline before transforming.
    pub snap: SnapPolicy,
    pub row_policy: RowPolicy,
    /// Fan scanlines out over the rayon pool.
    pub parallel: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            resolution: 1.0,
            split: 1,
            snap: SnapPolicy::binarize_only(),
            row_policy: RowPolicy::Abort,
            parallel: false,
        }
    }
}

/// The four co-indexed output grids, all shaped like the input image.
///
/// `gridx`/`gridy` hold per-axis distance to the nearest solid boundary in
/// multiples of the resolution; `vector_x`/`vector_y` hold the matching
/// direction signs. Solid cells are `NAN` in all four grids, uncovered pore
/// cells are `0.0`.
#[derive(Debug, Clone)]
pub struct PoreFields {
    pub gridx: Image<f32>,
    pub gridy: Image<f32>,
    pub vector_x: Image<f32>,
    pub vector_y: Image<f32>,
}

/// Builds the distance and direction fields for a corrected or near-binary
/// porous-media image.
pub fn build_fields(
    img: &ImageView<'_, f32>,
    cfg: &FieldConfig,
) -> Result<PoreFields, FieldError> {
    let w = img.width();
    let h = img.height();

    let rows = x_profiles(img, cfg)?;
    let transposed = transpose(img);
    let cols = y_profiles(&transposed.as_view(), cfg)?;

    let mut gridx = Image::new_fill(w, h, 0.0f32);
    let mut vector_x = Image::new_fill(w, h, 0.0f32);
    for (y, profile) in rows.iter().enumerate() {
        gridx.row_mut(y).copy_from_slice(&profile.distances);
        vector_x.row_mut(y).copy_from_slice(&profile.directions);
    }

    // Column profiles are rows of the transposed image; assemble them in
    // transposed space and flip back once.
    let mut gridy_t = Image::new_fill(h, w, 0.0f32);
    let mut vector_y_t = Image::new_fill(h, w, 0.0f32);
    for (x, profile) in cols.iter().enumerate() {
        gridy_t.row_mut(x).copy_from_slice(&profile.distances);
        vector_y_t.row_mut(x).copy_from_slice(&profile.directions);
    }

    Ok(PoreFields {
        gridx,
        gridy: transpose(&gridy_t.as_view()),
        vector_x,
        vector_y: transpose(&vector_y_t.as_view()),
    })
}

fn x_profiles(
    img: &ImageView<'_, f32>,
    cfg: &FieldConfig,
) -> Result<Vec<ScanProfile>, FieldError> {
    let run = |y: usize| -> Result<ScanProfile, FieldError> {
        let corrected = snap_scanline(img.row(y), cfg.split, cfg.snap);
        match transform_row(&corrected, cfg.resolution) {
            Ok(profile) => Ok(profile),
            Err(ScanError::NonPercolating { crossings }) => match cfg.row_policy {
                RowPolicy::Abort => Err(FieldError::NonPercolatingRow { row: y, crossings }),
                RowPolicy::Skip => {
                    log::warn!(
                        "row {y} does not percolate ({crossings} crossings), left at seed values"
                    );
                    Ok(ScanProfile::seeded(&corrected))
                }
            },
            Err(err @ ScanError::InsufficientCrossings { .. }) => {
                unreachable!("row transform returned {err}")
            }
        }
    };

    if cfg.parallel {
        (0..img.height()).into_par_iter().map(run).collect()
    } else {
        (0..img.height()).map(run).collect()
    }
}

/// `img` is the transposed image, so scanline `y` here is column `y` of the
/// original. Column failures always abort; there is no skip policy for them.
fn y_profiles(
    img: &ImageView<'_, f32>,
    cfg: &FieldConfig,
) -> Result<Vec<ScanProfile>, FieldError> {
    let run = |y: usize| -> Result<ScanProfile, FieldError> {
        let corrected = snap_scanline(img.row(y), cfg.split, cfg.snap);
        match transform_column(&corrected, cfg.resolution) {
            Ok(profile) => Ok(profile),
            Err(ScanError::InsufficientCrossings { crossings }) => {
                Err(FieldError::InsufficientCrossingsColumn { col: y, crossings })
            }
            Err(err @ ScanError::NonPercolating { .. }) => {
                unreachable!("column transform returned {err}")
            }
        }
    };

    if cfg.parallel {
        (0..img.height()).into_par_iter().map(run).collect()
    } else {
        (0..img.height()).map(run).collect()
    }
}
