use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use helix_codec::{CodecParams, HelixCodec};
use rand::Rng;
use std::hint::black_box;

fn random_bits(bits: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..bits)
        .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let variants = [
        ("default", CodecParams::default()),
        (
            "no-ec",
            CodecParams {
                use_ec: false,
                ..CodecParams::default()
            },
        ),
        (
            "strict",
            CodecParams {
                ell: 2,
                epsilon: 0.03,
                use_ec: true,
            },
        ),
    ];

    let sizes = [64usize, 256, 1024, 4096, 16384];

    for size in sizes {
        let input = random_bits(size);

        let mut group_encode = c.benchmark_group(format!("encode_{size}"));
        group_encode.throughput(Throughput::Bytes((size / 8) as u64));
        for (name, params) in variants {
            let codec = HelixCodec::new(params).unwrap();
            group_encode.bench_with_input(BenchmarkId::new(name, size), &input, |b, i| {
                b.iter(|| codec.encode(black_box(i)).unwrap())
            });
        }
        group_encode.finish();

        let mut group_decode = c.benchmark_group(format!("decode_{size}"));
        group_decode.throughput(Throughput::Bytes((size / 8) as u64));
        for (name, params) in variants {
            let codec = HelixCodec::new(params).unwrap();
            let dna = codec.encode(&input).unwrap();
            group_decode.bench_with_input(BenchmarkId::new(name, size), &dna, |b, d| {
                b.iter(|| codec.decode(black_box(d)).unwrap())
            });
        }
        group_decode.finish();
    }
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
