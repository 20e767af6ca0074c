use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hmac_md5::md5_digest;

fn bench_md5(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_digest");
    for size in [0usize, 55, 64, 1024, 64 * 1024] {
        let data = vec![0xa5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| md5_digest(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_md5);
criterion_main!(benches);
