//! Incremental decode benchmarks across body chunk sizes.
//!
//! Run with: `cargo bench --package arrowget-bench`

use arrowget_bench::{StreamShape, encode_stream, split_chunks};
use arrowget_decode::{CountListener, IpcStreamDecoder};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Typical HTTP body chunk sizes, from tiny TCP segments to large reads.
const CHUNK_SIZES: &[usize] = &[1_460, 16 * 1024, 64 * 1024, 1024 * 1024];

fn decode_benchmark(c: &mut Criterion) {
    let shape = StreamShape::default();
    let data = encode_stream(shape);

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for &chunk_size in CHUNK_SIZES {
        let chunks = split_chunks(&data, chunk_size);
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunks,
            |b, chunks| {
                b.iter(|| {
                    let mut decoder = IpcStreamDecoder::new(CountListener::new());
                    for chunk in chunks {
                        decoder.consume(chunk.clone()).expect("valid stream");
                    }
                    decoder.finish().expect("complete stream");
                    assert_eq!(decoder.listener().num_rows(), shape.total_rows());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, decode_benchmark);
criterion_main!(benches);
