use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pg_scan::{SnapPolicy, snap_scanline, transform_column, transform_row};

/// Periodic solid/pore scanline: `wall` solid cells then `gap` pore cells.
fn periodic_line(len: usize, wall: usize, gap: usize) -> Vec<f32> {
    (0..len)
        .map(|i| if i % (wall + gap) < wall { 1.0 } else { 0.0 })
        .collect()
}

fn bench_scanline(c: &mut Criterion) {
    let mut line = periodic_line(4096, 3, 13);
    // Close the trailing run so the row percolates.
    line[4095] = 1.0;
    let blurred: Vec<f32> = (0..4096).map(|i| ((i % 7) as f32) / 6.0).collect();

    c.bench_function("snap_scanline 4096 split=4", |b| {
        b.iter(|| snap_scanline(black_box(&blurred), 4, SnapPolicy::for_split(4)))
    });

    c.bench_function("transform_row 4096", |b| {
        b.iter(|| transform_row(black_box(&line), 1e-6))
    });

    c.bench_function("transform_column 4096", |b| {
        b.iter(|| transform_column(black_box(&line), 1e-6))
    });
}

criterion_group!(benches, bench_scanline);
criterion_main!(benches);
