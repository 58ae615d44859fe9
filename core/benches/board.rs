use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    for (name, config) in [
        ("beginner", BoardConfig::beginner()),
        ("intermediate", BoardConfig::intermediate()),
        ("expert", BoardConfig::expert()),
    ] {
        let mut generator = RandomMineGenerator::new(42);
        group.bench_function(name, |b| {
            b.iter(|| Board::with_generator(black_box(config), generator.clone()))
        });
        group.bench_function(format!("{name}/layout"), |b| {
            b.iter(|| generator.generate(black_box(config)))
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for size in [16, 64, 255] {
        let config = BoardConfig::new(size, size, 1).unwrap();
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter_batched(
                || {
                    let layout =
                        MineLayout::from_bomb_coords(config.size(), &[(size - 1, size - 1)])
                            .unwrap();
                    Board::from_layout_with_generator(layout, RandomMineGenerator::new(0))
                        .unwrap()
                },
                |mut board| board.reveal(black_box((0, 0))),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, generation, flood_fill);
criterion_main!(benches);
