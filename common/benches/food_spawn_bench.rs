use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use std::hint::black_box;
use snake_common::SessionRng;
use snake_common::snake::{spawn_food, FieldSize, Point};

fn bench_spawn_empty_board(c: &mut Criterion) {
    let field = FieldSize::new(25, 19);
    let occupied: HashSet<Point> = [Point::new(12, 9)].into_iter().collect();
    let mut rng = SessionRng::new(42);

    c.bench_function("spawn_food_empty_board", |b| {
        b.iter(|| spawn_food(black_box(&field), black_box(&occupied), &mut rng))
    });
}

fn bench_spawn_saturated_board(c: &mut Criterion) {
    let field = FieldSize::new(25, 19);
    let free_cells = [Point::new(3, 4), Point::new(20, 17)];
    let occupied: HashSet<Point> = field
        .cells()
        .filter(|cell| !free_cells.contains(cell))
        .collect();
    let mut rng = SessionRng::new(42);

    c.bench_function("spawn_food_saturated_board", |b| {
        b.iter(|| spawn_food(black_box(&field), black_box(&occupied), &mut rng))
    });
}

criterion_group!(benches, bench_spawn_empty_board, bench_spawn_saturated_board);
criterion_main!(benches);
