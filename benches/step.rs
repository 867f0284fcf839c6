use conway_life::{find_form, LifeEngine, Settings};
use criterion::{criterion_group, criterion_main, Criterion};

const SEED: u64 = 42;

fn engine(side: u32) -> LifeEngine {
    LifeEngine::new(Settings {
        rng_seed: Some(SEED),
        ..Settings::with_size(side, side)
    })
    .unwrap()
}

fn dense_board(c: &mut Criterion) {
    let mut life = engine(256);
    life.random_seed(4);
    c.bench_function("step_random_256", |b| {
        b.iter(|| life.step_generation())
    });
}

fn sparse_board(c: &mut Criterion) {
    let mut life = engine(4096);
    if let Some(Ok(gun)) = find_form("Gosper glider gun").map(|f| f.pattern()) {
        life.draw_form(&gun);
    }
    c.bench_function("step_gun_4096", |b| b.iter(|| life.step_generation()));
}

criterion_group!(benches, dense_board, sparse_board);
criterion_main!(benches);
