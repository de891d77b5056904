//! Integer-factor bilinear upsampling on the index lattice.

use pg_core::{Image, ImageView};

/// Upsamples `src` by an integer factor, interpolating bilinearly between
/// the original samples.
///
/// Original samples sit on the output lattice at multiples of `split`, so a
/// `w x h` input produces a `(w - 1) * split + 1` by `(h - 1) * split + 1`
/// output and every original value is reproduced exactly. Values in between
/// are convex combinations of their four lattice neighbours; on a binary
/// phase image this is what smears the boundaries that the snap correction
/// later restores.
///
/// # Panics
/// Panics if `split` is zero or `src` is empty.
pub fn upsample_bilinear_f32(src: &ImageView<'_, f32>, split: usize) -> Image<f32> {
    assert!(split > 0, "split must be positive");
    assert!(
        src.width() > 0 && src.height() > 0,
        "cannot upsample an empty image"
    );

    let out_w = (src.width() - 1) * split + 1;
    let out_h = (src.height() - 1) * split + 1;
    let inv = 1.0 / split as f32;

    let mut out = Image::new_fill(out_w, out_h, 0.0f32);
    for yy in 0..out_h {
        let y0 = yy / split;
        let fy = (yy % split) as f32 * inv;
        // The fractional part is zero on the last lattice line, so the
        // clamped neighbour never contributes there.
        let y1 = (y0 + 1).min(src.height() - 1);
        let r0 = src.row(y0);
        let r1 = src.row(y1);

        let row = out.row_mut(yy);
        for (xx, cell) in row.iter_mut().enumerate() {
            let x0 = xx / split;
            let fx = (xx % split) as f32 * inv;
            let x1 = (x0 + 1).min(src.width() - 1);

            let top = r0[x0] + (r0[x1] - r0[x0]) * fx;
            let bottom = r1[x0] + (r1[x1] - r1[x0]) * fx;
            *cell = top + (bottom - top) * fy;
        }
    }

    out
}
