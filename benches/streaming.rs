//! Benchmarks for the clip serving hot path.
//!
//! Measures range header parsing, path normalization and chunked reads of a
//! byte range from disk.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use http_body_util::BodyExt;
use signbridge::streaming::direct::open_range;
use signbridge::streaming::{locate_asset, parse_range_header, resolve_range, ByteRange};
use signbridge_common::paths::normalize_relative;

fn bench_range_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_header");

    for header in ["bytes=0-", "bytes=200-299", "bytes=1048576-2097151", "bytes=abc-def"] {
        group.bench_function(header, |b| {
            b.iter(|| black_box(parse_range_header(black_box(header))))
        });
    }

    group.bench_function("resolve_clamped", |b| {
        b.iter(|| black_box(resolve_range(black_box(Some("bytes=990-5000")), 1000)))
    });

    group.finish();
}

fn bench_path_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_relative");

    for path in [
        "words/hello.mp4",
        "words/./nested/../hello.mp4",
        "words\\windows\\style.mp4",
        "../../../etc/passwd",
    ] {
        group.bench_function(path, |b| {
            b.iter(|| black_box(normalize_relative(black_box(path))))
        });
    }

    group.finish();
}

fn bench_range_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_read");
    let rt = tokio::runtime::Runtime::new().unwrap();

    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("words")).unwrap();
    std::fs::write(root.path().join("words/clip.mp4"), vec![7u8; 8 * 1024 * 1024]).unwrap();
    let asset = rt
        .block_on(locate_asset(root.path(), "words/clip.mp4"))
        .unwrap();

    for len in [64 * 1024u64, 1024 * 1024, 4 * 1024 * 1024] {
        let range = ByteRange {
            start: 1024,
            end: 1024 + len - 1,
        };
        group.throughput(Throughput::Bytes(len));
        group.bench_function(format!("read_{}", len), |b| {
            b.iter(|| {
                rt.block_on(async {
                    let body = open_range(&asset, range).await.unwrap();
                    black_box(body.collect().await.unwrap().to_bytes())
                })
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_range_parsing,
    bench_path_normalization,
    bench_range_reads
);
criterion_main!(benches);
