use criterion::{criterion_group, criterion_main, Criterion};
use gol_grid::TorusField;

fn bench_tick(c: &mut Criterion) {
    const N: usize = 1 << 8;
    let mut field = TorusField::random(N, N, Some(42), 0.3).unwrap();
    c.bench_function("tick_256x256", |b| b.iter(|| field.tick()));
}

fn bench_render(c: &mut Criterion) {
    let field = TorusField::new(164, 48).unwrap();
    c.bench_function("render_164x48", |b| b.iter(|| field.render()));
}

criterion_group!(benches, bench_tick, bench_render);
criterion_main!(benches);
