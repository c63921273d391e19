use std::sync::Arc;

use bake::glob::{brace, parse};
use bake::testing::{FakeEnvironment, FakeFileSystem};
use bake::{Globber, GlobberSettings};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a tree of `width` modules, each with a few source files and a
/// nested test directory.
fn populate(width: usize) -> FakeFileSystem {
    let fs = FakeFileSystem::unix();
    for module in 0..width {
        for name in ["lib.rs", "mod.rs", "README.md"] {
            fs.create_file(&format!("/Working/src/module{module}/{name}"))
                .unwrap();
        }
        fs.create_file(&format!("/Working/src/module{module}/tests/unit.rs"))
            .unwrap();
    }
    fs
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, pattern) in [
        ("simple", "src/*.rs"),
        ("recursive", "/Working/**/tests/*.rs"),
        ("classes", "logs/[a-z]?[!0-9]*.log"),
    ] {
        group.bench_with_input(BenchmarkId::new("pattern", name), &pattern, |b, &pattern| {
            b.iter(|| parse(black_box(pattern), true));
        });
    }

    group.bench_function("brace_expansion", |b| {
        b.iter(|| brace::expand(black_box("src/{app,lib}/**/*.{rs,toml,md}")));
    });

    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("match");
    let settings = GlobberSettings::new();

    for width in [10, 100] {
        let globber = Globber::new(
            Arc::new(populate(width)),
            Arc::new(FakeEnvironment::unix()),
        );

        group.bench_with_input(BenchmarkId::new("single_level", width), &width, |b, _| {
            b.iter(|| globber.match_files(black_box("src/module1/*.rs"), &settings));
        });

        group.bench_with_input(BenchmarkId::new("recursive", width), &width, |b, _| {
            b.iter(|| globber.match_files(black_box("**/tests/*.rs"), &settings));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_match);
criterion_main!(benches);
