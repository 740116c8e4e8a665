use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use cellgrid::Grid2d;

fn bench_bulk_set(c: &mut Criterion) {
    let rows: Vec<Vec<u8>> = (0..512)
        .map(|x| (0..512).map(|y| ((x + y) % 256) as u8).collect())
        .collect();

    c.bench_function("grid2d_bulk_set_512", |b| {
        b.iter_batched(
            || (Grid2d::new(512, 512), rows.clone()),
            |(mut grid, rows)| {
                grid.bulk_set(rows).unwrap();
                black_box(grid);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_bulk_set);
criterion_main!(benches);
