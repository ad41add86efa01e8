use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_ecc::ecc::HammingCode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BLOCKS: usize = 256;

fn random_bits(rng: &mut StdRng, length: usize) -> Vec<u8> {
    (0..length).map(|_| rng.gen_range(0..=1)).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_encode");
    let mut rng = StdRng::seed_from_u64(42);

    for m in [4, 11, 26, 32] {
        let code = HammingCode::new(m).unwrap();
        let messages = random_bits(&mut rng, m * BLOCKS);
        group.bench_with_input(BenchmarkId::from_parameter(m), &messages, |b, messages| {
            b.iter(|| code.encode_stream(black_box(messages)).unwrap())
        });
    }

    group.finish();
}

fn bench_correct(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_correct");
    let mut rng = StdRng::seed_from_u64(43);

    for m in [4, 11, 26, 32] {
        let code = HammingCode::new(m).unwrap();
        let mut codeword = code.encode(&random_bits(&mut rng, m)).unwrap();
        codeword[m / 2] ^= 1;
        group.bench_with_input(BenchmarkId::from_parameter(m), &codeword, |b, codeword| {
            b.iter(|| code.correct_copy(black_box(codeword)).unwrap())
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_decode");
    let mut rng = StdRng::seed_from_u64(44);

    for m in [4, 11, 26, 32] {
        let code = HammingCode::new(m).unwrap();
        let mut stream = code
            .encode_stream(&random_bits(&mut rng, m * BLOCKS))
            .unwrap();
        let n = code.encoded_length();
        for block in 0..BLOCKS {
            stream[block * n + rng.gen_range(0..n)] ^= 1;
        }
        group.bench_with_input(BenchmarkId::from_parameter(m), &stream, |b, stream| {
            b.iter(|| {
                let mut noisy = stream.clone();
                let total = noisy.len();
                code.decode(black_box(&mut noisy), total).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_correct, bench_decode);
criterion_main!(benches);
