#[macro_use]
extern crate criterion;
extern crate julia;
extern crate num;

use criterion::Criterion;
use julia::{draw, orbit, Poly};
use num::Complex;

fn quadratic(c: Complex<f64>) -> Poly {
    Poly::new(vec![c, Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)])
}

fn bench_orbit(c: &mut Criterion) {
    let f = quadratic(Complex::new(-1.0, 0.1));
    c.bench_function("orbit near the boundary", move |b| {
        b.iter(|| orbit(&f, Complex::new(0.3, 0.2), 2.0, 500))
    });
}

fn bench_draw(c: &mut Criterion) {
    let f = quadratic(Complex::new(-1.0, 0.1));
    c.bench_function("draw 64x64", move |b| {
        b.iter(|| draw(&f, -2.0, 2.0, -2.0, 2.0, 0.0625))
    });
}

criterion_group!(benches, bench_orbit, bench_draw);
criterion_main!(benches);
