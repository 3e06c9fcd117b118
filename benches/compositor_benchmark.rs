//! Compositor benchmark: Measure full-redraw vs steady-state render cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use patchwork::{
    BitmapSurface, Border, Compositor, FixedCell, Grid, Quilt, Sash, SashLevel, SeededCells,
};

/// Build a representative composition: seeded 8x8 block tiled 5x5 with two
/// borders and double sashing.
fn create_test_quilt(seed: u64) -> Quilt {
    let mut source = SeededCells::new(seed);
    let grid = Grid::random(8, 6, &mut source);
    let mut quilt = Quilt::new(grid, 5, 5);
    for color in ["#aa3355", "#f0e8d8", "#334455", "#ddaa33", "#226644", "#882211"] {
        quilt.palette_mut().push(color).unwrap();
    }
    quilt.add_border(Border::new(2, "#442222")).unwrap();
    quilt.add_border(Border::new(1, "#f0e8d8")).unwrap();
    quilt.set_sash(Sash::new(SashLevel::Double, "#cccccc", "#999999"));
    quilt
}

fn bench_full_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_full");
    for cell in [4u32, 8, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(cell), &cell, |b, &cell| {
            let mut quilt = create_test_quilt(1);
            b.iter(|| {
                let mut compositor = Compositor::new();
                let mut surface = BitmapSurface::new();
                let stats = compositor
                    .render(black_box(&mut quilt), 0, &FixedCell(cell), &mut surface)
                    .unwrap();
                black_box(stats);
            });
        });
    }
    group.finish();
}

fn bench_steady_state(c: &mut Criterion) {
    let mut quilt = create_test_quilt(1);
    let mut compositor = Compositor::new();
    let mut surface = BitmapSurface::new();
    compositor
        .render(&mut quilt, 0, &FixedCell(8), &mut surface)
        .unwrap();

    c.bench_function("render_steady_state", |b| {
        b.iter(|| {
            let stats = compositor
                .render(black_box(&mut quilt), 0, &FixedCell(8), &mut surface)
                .unwrap();
            black_box(stats);
        });
    });
}

fn bench_generation_bump(c: &mut Criterion) {
    let mut quilt = create_test_quilt(1);
    let mut compositor = Compositor::new();
    let mut surface = BitmapSurface::new();
    let mut generation = 0u64;
    compositor
        .render(&mut quilt, generation, &FixedCell(8), &mut surface)
        .unwrap();

    c.bench_function("render_blocks_only", |b| {
        b.iter(|| {
            generation += 1;
            let stats = compositor
                .render(black_box(&mut quilt), generation, &FixedCell(8), &mut surface)
                .unwrap();
            black_box(stats);
        });
    });
}

fn bench_grid_resize_cycle(c: &mut Criterion) {
    c.bench_function("grid_resize_8_12_8", |b| {
        let mut source = SeededCells::new(2);
        let mut grid = Grid::random(8, 6, &mut source);
        b.iter(|| {
            grid.resize(12, 6, &mut source);
            grid.resize(8, 6, &mut source);
            black_box(grid.size());
        });
    });
}

criterion_group!(
    benches,
    bench_full_redraw,
    bench_steady_state,
    bench_generation_bump,
    bench_grid_resize_cycle
);
criterion_main!(benches);
