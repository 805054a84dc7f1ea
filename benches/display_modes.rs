use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use window_context::core::{
    filter_modes_by_aspect_ratio, modes_to_resolutions, parse_aspect_ratio,
    pixel_to_aspect_corrected_normalized,
};
use window_context::RefreshMode;

/// Mode list shaped like a real monitor: every resolution at several rates
fn monitor_modes(resolutions: usize) -> Vec<RefreshMode> {
    let mut modes = Vec::with_capacity(resolutions * 4);
    for i in 0..resolutions as u32 {
        let height = 360 + i * 36;
        let width = if i % 3 == 0 { height * 4 / 3 } else { height * 16 / 9 };
        for refresh_rate in [60, 75, 120, 144] {
            modes.push(RefreshMode::new(width, height, refresh_rate));
        }
    }
    modes
}

fn bench_filter_and_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution_catalog");
    let ratio = parse_aspect_ratio("16:9");

    for count in [8, 64, 512] {
        let modes = monitor_modes(count);
        group.bench_with_input(BenchmarkId::new("filter_dedup", count), &modes, |b, modes| {
            b.iter(|| {
                let filtered = filter_modes_by_aspect_ratio(black_box(modes), ratio);
                modes_to_resolutions(&filtered)
            })
        });
    }

    group.finish();
}

fn bench_coordinate_mapping(c: &mut Criterion) {
    c.bench_function("pixel_to_aspect_corrected_normalized", |b| {
        b.iter(|| {
            pixel_to_aspect_corrected_normalized(
                black_box(1234.5),
                black_box(678.25),
                black_box(1920),
                black_box(1080),
            )
        })
    });
}

criterion_group!(benches, bench_filter_and_dedup, bench_coordinate_mapping);
criterion_main!(benches);
