use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hifitime::{Epoch, Unit};

use satloc::{decode, Propagator, TleCatalog};

const LINE1: &str = "1 44714U 19074B   25117.42924319 -.00001157  00000+0 -58773-4 0  9990";
const LINE2: &str = "2 44714  53.0517 166.3609 0001116  99.1558 260.9557 15.06400606301084";

/// Synthetic catalog of `n` copies of STARLINK-1008 under distinct names.
fn synthetic_catalog(n: usize) -> TleCatalog {
    let text: String = (0..n)
        .map(|i| format!("STARLINK-{:05}\n{LINE1}\n{LINE2}\n", i))
        .collect();
    TleCatalog::parse(&text)
}

fn bench_single(c: &mut Criterion) {
    let elements = decode(LINE1, LINE2).unwrap();
    let propagator = Propagator::default();
    let target = elements.epoch() + Unit::Hour * 12.0;

    c.bench_function("propagate/single", |b| {
        b.iter(|| black_box(propagator.propagate(black_box(&elements), black_box(target))))
    });
    c.bench_function("locate/single", |b| {
        b.iter(|| black_box(propagator.locate(black_box(&elements), black_box(target))))
    });
}

fn bench_catalog(c: &mut Criterion) {
    let catalog = synthetic_catalog(1_000);
    let propagator = Propagator::default();
    let target = Epoch::from_gregorian_utc(2025, 4, 28, 15, 8, 0, 0);

    c.bench_function("locate_all/1000_satellites", |b| {
        b.iter(|| black_box(propagator.locate_all(black_box(&catalog), black_box(target))))
    });
}

criterion_group!(benches, bench_single, bench_catalog);
criterion_main!(benches);
