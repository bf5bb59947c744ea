#[macro_use]
extern crate criterion;
extern crate contourbrot;
extern crate num;

use contourbrot::{escape_time, Axis, ContourSet, EscapeRenderer, SampleGrid};
use criterion::Criterion;
use num::Complex;

fn grid(n: usize) -> SampleGrid {
    SampleGrid::new(Axis::linspace(-2.0, 2.0, n), Axis::linspace(-2.0, 2.0, n))
}

fn escape_benchmark(c: &mut Criterion) {
    c.bench_function("escape_time interior", |b| {
        b.iter(|| escape_time(Complex::new(-0.1, 0.1), 50))
    });

    let renderer = EscapeRenderer::new(grid(100), 50);
    c.bench_function("field_single 100x100", move |b| b.iter(|| renderer.field_single()));

    let renderer = EscapeRenderer::new(grid(100), 50);
    c.bench_function("field 4 threads 100x100", move |b| b.iter(|| renderer.field(4)));

    let g = grid(100);
    let field = EscapeRenderer::new(g.clone(), 50).field_single();
    c.bench_function("contours 100x100x50", move |b| {
        b.iter(|| ContourSet::extract(&field, &g.real, &g.imag, 50).ok())
    });
}

criterion_group!(benches, escape_benchmark);
criterion_main!(benches);
