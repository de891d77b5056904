//! Example: distance/direction fields for a porous-media PNG.
//!
//! Loads a binary PNG (nonzero pixels are solid), upsamples it by an integer
//! split factor, restores crisp phase boundaries, and assembles the four
//! co-indexed output grids. Summary statistics go to a JSON file and each
//! grid is rendered to a grayscale PNG next to the input.
//!
//! Run from the workspace root:
//!   cargo run -p poregrid --example porefields -- --help
//!   cargo run -p poregrid --example porefields -- --input data/porous_0.png

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::{GrayImage, ImageReader};
use poregrid::{
    FieldConfig, Image, RowPolicy, SnapPolicy, binary_to_f32, build_fields,
    upsample_bilinear_f32,
};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Build per-axis distance/direction fields from a porous-media PNG")]
struct Args {
    /// Path to the binary PNG (nonzero pixels are solid)
    #[arg(long, default_value = "data/porous_0.png")]
    input: String,

    /// Integer upsampling factor applied before the transform
    #[arg(long, default_value_t = 4)]
    split: usize,

    /// Physical spacing of one original cell, in meters
    #[arg(long, default_value_t = 1e-6)]
    resolution: f32,

    /// Leave non-percolating rows at their seed values instead of aborting
    #[arg(long, default_value_t = false)]
    skip_rows: bool,

    /// Fan scanlines out over the rayon pool
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Output JSON path (default: <input stem>_fields.json next to input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GridStats {
    name: &'static str,
    min: f32,
    max: f32,
    defined: usize,
    undefined: usize,
}

#[derive(Serialize)]
struct FieldsSummary {
    input: String,
    width: usize,
    height: usize,
    split: usize,
    /// Spacing of one upsampled cell, in meters.
    cell_resolution: f32,
    elapsed_ms: f64,
    grids: Vec<GridStats>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid_stats(name: &'static str, grid: &Image<f32>) -> GridStats {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut defined = 0usize;
    for &v in grid.data() {
        if v.is_nan() {
            continue;
        }
        defined += 1;
        min = min.min(v);
        max = max.max(v);
    }
    GridStats {
        name,
        min,
        max,
        defined,
        undefined: grid.data().len() - defined,
    }
}

/// Renders a grid to grayscale: finite values normalized over their range,
/// undefined cells black.
fn render_grid(grid: &Image<f32>, path: &str) -> Result<()> {
    let stats = grid_stats("", grid);
    let range = (stats.max - stats.min).max(f32::MIN_POSITIVE);

    let png = GrayImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        match grid.get(x as usize, y as usize) {
            Some(&v) if !v.is_nan() => {
                image::Luma([(255.0 * (v - stats.min) / range).round() as u8])
            }
            _ => image::Luma([0u8]),
        }
    });
    png.save(path).with_context(|| format!("writing {path}"))?;
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let img_path = &args.input;
    let p = std::path::Path::new(img_path);
    let stem = p.file_stem().unwrap_or_default().to_string_lossy();
    let dir = p.parent().unwrap_or(std::path::Path::new("."));
    let out_path = args.out.unwrap_or_else(|| {
        dir.join(format!("{stem}_fields.json"))
            .to_string_lossy()
            .into_owned()
    });

    // Load as 8-bit grayscale and threshold to the {0, 1} phase convention.
    let gray = ImageReader::open(img_path)
        .with_context(|| format!("opening {img_path}"))?
        .decode()
        .with_context(|| format!("decoding {img_path}"))?
        .into_luma8();

    let (w, h) = (gray.width() as usize, gray.height() as usize);
    let mask = Image::from_vec(w, h, gray.into_raw()).context("building mask image")?;
    let binary = binary_to_f32(&mask.as_view());

    println!("loaded {img_path}: {w}x{h}, split={}", args.split);

    let upsampled = upsample_bilinear_f32(&binary.as_view(), args.split);
    let cell_resolution = args.resolution / args.split as f32;

    let cfg = FieldConfig {
        resolution: cell_resolution,
        split: args.split,
        snap: SnapPolicy::for_split(args.split),
        row_policy: if args.skip_rows {
            RowPolicy::Skip
        } else {
            RowPolicy::Abort
        },
        parallel: args.parallel,
    };

    let t0 = Instant::now();
    let fields = build_fields(&upsampled.as_view(), &cfg)
        .with_context(|| format!("building fields for {img_path}"))?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    println!(
        "fields built: {}x{}  ({elapsed_ms:.2} ms)",
        fields.gridx.width(),
        fields.gridx.height()
    );

    let grids = [
        ("gridx", &fields.gridx),
        ("gridy", &fields.gridy),
        ("vector_x", &fields.vector_x),
        ("vector_y", &fields.vector_y),
    ];
    let mut stats = Vec::with_capacity(grids.len());
    for (name, grid) in grids {
        let png_path = dir
            .join(format!("{stem}_{name}.png"))
            .to_string_lossy()
            .into_owned();
        render_grid(grid, &png_path)?;
        println!("  {name}: written to {png_path}");
        stats.push(grid_stats(name, grid));
    }

    let summary = FieldsSummary {
        input: img_path.clone(),
        width: fields.gridx.width(),
        height: fields.gridx.height(),
        split: args.split,
        cell_resolution,
        elapsed_ms,
        grids: stats,
    };

    let out_file =
        std::fs::File::create(&out_path).with_context(|| format!("creating {out_path}"))?;
    serde_json::to_writer_pretty(out_file, &summary)
        .with_context(|| format!("writing JSON to {out_path}"))?;

    println!("summary written to {out_path}");
    Ok(())
}
