use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hmac_md5::{hmac_md5, hmac_md5_bytes};

fn bench_hmac(c: &mut Criterion) {
    let message = vec![0x5au8; 1024];

    let mut group = c.benchmark_group("hmac_md5_bytes");
    for key_len in [16usize, 64, 128] {
        let key = vec![0x0bu8; key_len];
        group.bench_with_input(BenchmarkId::new("key_len", key_len), &key, |b, key| {
            b.iter(|| hmac_md5_bytes(black_box(key), black_box(&message)))
        });
    }
    group.finish();

    c.bench_function("hmac_md5_hex", |b| {
        b.iter(|| hmac_md5(black_box(b"supersecretkey"), black_box(&message)))
    });
}

criterion_group!(benches, bench_hmac);
criterion_main!(benches);
