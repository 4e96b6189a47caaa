//! Benchmark for the slice-search engine.
//!
//! Compares the random-access KMP scan, the windowed single-pass scan, and
//! the standard library's `windows().position()` over periodic data, where
//! failure-function jumps actually pay off.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqsearch::search::{Direction, UNBOUNDED, find_slice};
use seqsearch::sequence::OnePass;
use std::hint::black_box;

/// Periodic haystack with the needle planted near the end, so every scan
/// walks most of the source before matching.
fn periodic_haystack(size: usize) -> (Vec<u8>, Vec<u8>) {
    let mut haystack: Vec<u8> = (0..size).map(|index| (index % 4) as u8).collect();
    let needle = vec![9u8, 9, 9, 9];
    let at = size - needle.len();
    haystack[at..].copy_from_slice(&needle);
    (haystack, needle)
}

// =============================================================================
// Forward Search Benchmark
// =============================================================================

fn benchmark_forward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("forward_search");

    for size in [1_000, 10_000, 100_000] {
        let (haystack, needle) = periodic_haystack(size);

        group.bench_with_input(BenchmarkId::new("indexed", size), &size, |bencher, _| {
            bencher.iter(|| {
                find_slice(
                    black_box(&haystack[..]),
                    0..UNBOUNDED,
                    black_box(&needle[..]),
                    0..UNBOUNDED,
                    Direction::Forward,
                    |a, b| a == b,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("one_pass", size), &size, |bencher, _| {
            bencher.iter(|| {
                find_slice(
                    OnePass::new(black_box(haystack.iter().copied())),
                    0..UNBOUNDED,
                    black_box(&needle[..]),
                    0..UNBOUNDED,
                    Direction::Forward,
                    |a, b| a == b,
                )
            });
        });

        // Standard library baseline
        group.bench_with_input(BenchmarkId::new("windows", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(&haystack[..])
                    .windows(needle.len())
                    .position(|window| window == needle)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Backward Search Benchmark
// =============================================================================

fn benchmark_backward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("backward_search");

    for size in [1_000, 10_000, 100_000] {
        // Needle at the front, so the backward scan walks most of the range.
        let (mut haystack, needle) = periodic_haystack(size);
        haystack.rotate_right(needle.len());

        group.bench_with_input(BenchmarkId::new("indexed", size), &size, |bencher, _| {
            bencher.iter(|| {
                find_slice(
                    black_box(&haystack[..]),
                    0..UNBOUNDED,
                    black_box(&needle[..]),
                    0..UNBOUNDED,
                    Direction::Backward,
                    |a, b| a == b,
                )
            });
        });

        // The single-pass path has no reverse scan; it enumerates the whole
        // source and keeps the last full match.
        group.bench_with_input(BenchmarkId::new("one_pass", size), &size, |bencher, _| {
            bencher.iter(|| {
                find_slice(
                    OnePass::new(black_box(haystack.iter().copied())),
                    0..UNBOUNDED,
                    black_box(&needle[..]),
                    0..UNBOUNDED,
                    Direction::Backward,
                    |a, b| a == b,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_forward, benchmark_backward);
criterion_main!(benches);
