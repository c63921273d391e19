use bake::path::{collapse, normalize};
use bake::{DirectoryPath, FilePath, PathComparer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("absolute_path", |b| {
        b.iter(|| normalize::normalize(black_box("/absolute/path/to/file")));
    });

    group.bench_function("relative_path", |b| {
        b.iter(|| normalize::normalize(black_box("./relative/path")));
    });

    // Backslashes and doubled separators
    group.bench_function("windows_path", |b| {
        b.iter(|| normalize::normalize(black_box("C:\\Program Files\\\\dotnet\\")));
    });

    group.bench_function("unc_path", |b| {
        b.iter(|| normalize::normalize(black_box("\\\\server\\share\\folder")));
    });

    group.finish();
}

fn bench_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("collapse");

    for (name, raw) in [
        ("no_dots", "/a/b/c/d/e"),
        ("with_dots", "/a/b/../c/./d"),
        ("many_dots", "/a/b/c/d/../../e/f/../../g"),
        ("above_root", "/hello/../../../../../../temp"),
        ("drive", "c:/a/../b/./c"),
    ] {
        group.bench_with_input(BenchmarkId::new("collapse_str", name), &raw, |b, &raw| {
            b.iter(|| collapse::collapse_str(black_box(raw), '/'));
        });
    }

    let path = DirectoryPath::new("/a/b/../c/./d").unwrap();
    group.bench_function("directory_path", |b| {
        b.iter(|| black_box(&path).collapse());
    });

    group.finish();
}

fn bench_comparer(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparer");

    let upper = FilePath::new("/Users/Test/Projects/Build/Output.DLL").unwrap();
    let lower = FilePath::new("/users/test/projects/build/output.dll").unwrap();

    for (name, case_sensitive) in [("sensitive", true), ("insensitive", false)] {
        let comparer = PathComparer::new(case_sensitive);
        group.bench_function(BenchmarkId::new("equals", name), |b| {
            b.iter(|| comparer.equals(black_box(Some(&upper)), black_box(Some(&lower))));
        });
        group.bench_function(BenchmarkId::new("hash", name), |b| {
            b.iter(|| comparer.hash(black_box(Some(&upper))));
        });
    }

    group.finish();
}

fn bench_relative(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative");

    let from = DirectoryPath::new("/repo/src/app/components").unwrap();
    let sibling = DirectoryPath::new("/repo/src/app/services").unwrap();
    let distant = FilePath::new("/repo/tests/data/fixtures/input.json").unwrap();

    group.bench_function("sibling_directory", |b| {
        b.iter(|| black_box(&from).relative_path_to_directory(black_box(&sibling)));
    });

    group.bench_function("distant_file", |b| {
        b.iter(|| black_box(&from).relative_path_to_file(black_box(&distant)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_collapse,
    bench_comparer,
    bench_relative
);
criterion_main!(benches);
