#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use flex_vector::{alloc::Global, capacity::GrowExact, Vector};

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("vector push_back {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                for value in 0..count {
                    buf.push_back(black_box(value));
                }
            });
        });

        c.bench_function(&format!("vector exact push_back {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize, Global, GrowExact>::new();
                for value in 0..count {
                    buf.push_back(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("vector with_capacity({0}) push_back {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vector::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push_back(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("std vec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("std vec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vec::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("vector insert_at front {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vector::<usize>::new();
                for value in 0..count {
                    let _ = buf.insert_at(0, black_box(value));
                }
            });
        });

        c.bench_function(&format!("std vec insert front {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.insert(0, black_box(value));
                }
            });
        });

        c.bench_function(&format!("vector erase_at front {} values", count), |b| {
            b.iter(|| {
                let mut buf: Vector<usize> = (0..count).collect();
                while let Ok(value) = buf.erase_at(0) {
                    black_box(value);
                }
            });
        });

        c.bench_function(&format!("std vec remove front {} values", count), |b| {
            b.iter(|| {
                let mut buf: Vec<usize> = (0..count).collect();
                while !buf.is_empty() {
                    black_box(buf.remove(0));
                }
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
