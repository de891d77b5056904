use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pg_core::Image;
use pg_field::{FieldConfig, build_fields};

/// Periodic pore network closed on every border, so both passes resolve.
fn porous_image(w: usize, h: usize) -> Image<f32> {
    let mut data = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let wall = x % 16 == 0 || y % 12 == 0 || x == w - 1 || y == h - 1;
            data[y * w + x] = if wall { 1.0 } else { 0.0 };
        }
    }
    Image::from_vec(w, h, data).expect("dimensions match")
}

fn bench_assemble(c: &mut Criterion) {
    let img = porous_image(512, 512);
    let serial = FieldConfig {
        resolution: 1e-6,
        ..FieldConfig::default()
    };
    let parallel = FieldConfig {
        parallel: true,
        ..serial
    };

    c.bench_function("build_fields 512x512 serial", |b| {
        b.iter(|| build_fields(black_box(&img.as_view()), &serial))
    });

    c.bench_function("build_fields 512x512 parallel", |b| {
        b.iter(|| build_fields(black_box(&img.as_view()), &parallel))
    });
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
