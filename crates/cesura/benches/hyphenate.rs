// Criterion benchmarks over the English sample fixture.
//
// Run:
//   cargo bench -p cesura

use std::hint::black_box;
use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, Criterion};

fn load_fixture() -> cesura::Dictionary {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join("hyph-en-sample.tex");
    let file = std::fs::File::open(&path).expect("fixture file");
    cesura::tex::load_dictionary("hyph-en-sample", file).expect("fixture dictionary")
}

/// Hyphenate a small mixed corpus against the frozen index.
fn bench_hyphenate(c: &mut Criterion) {
    let dict = load_fixture();
    let words = [
        "hello",
        "computer",
        "algorithm",
        "concatenation",
        "quick",
        "table",
        "hyphenation",
    ];
    c.bench_function("hyphenate_corpus", |b| {
        b.iter(|| {
            for word in &words {
                black_box(dict.hyphenate(black_box(word)));
            }
        })
    });
}

/// Rebuild the dictionary from the fixture on every iteration.
fn bench_load(c: &mut Criterion) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join("hyph-en-sample.tex");
    let data = std::fs::read_to_string(&path).expect("fixture file");
    c.bench_function("load_dictionary", |b| {
        b.iter(|| {
            black_box(
                cesura::tex::load_dictionary("hyph-en-sample", data.as_bytes())
                    .expect("fixture dictionary"),
            )
        })
    });
}

criterion_group!(benches, bench_hyphenate, bench_load);
criterion_main!(benches);
