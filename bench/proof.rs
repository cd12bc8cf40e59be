use criterion::{black_box, criterion_group, criterion_main, Criterion};
use merkledrop::{
    build_airdrop_tree, build_unbalanced_airdrop_tree, create_airdrop_tree, proof, Entry, U256,
};

pub fn generate_random_entry() -> Entry {
    Entry::new(rand::random(), U256::from(rand::random::<u64>()))
}

fn bench_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Airdrop Proof Generation");

    let entries: Vec<Entry> = (0..1000).map(|_| generate_random_entry()).collect();
    let balanced = build_airdrop_tree(&entries);
    let unbalanced = build_unbalanced_airdrop_tree(&entries);

    // Benchmark extracting every proof from a prebuilt tree
    group.bench_function("Balanced Tree", |b| {
        b.iter(|| {
            for index in 0..entries.len() {
                black_box(proof::extract(balanced.nodes(), index)).unwrap();
            }
        })
    });

    group.bench_function("Unbalanced Tree", |b| {
        b.iter(|| {
            for index in 0..entries.len() {
                black_box(unbalanced.merkle_proof(index)).unwrap();
            }
        })
    });

    group.finish();
}

fn bench_proof_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("Airdrop Proof Compression");

    let entries: Vec<Entry> = (0..1000).map(|_| generate_random_entry()).collect();
    let unbalanced = build_unbalanced_airdrop_tree(&entries);
    let proofs: Vec<_> = (0..entries.len())
        .map(|index| unbalanced.merkle_proof(index).unwrap())
        .collect();

    group.bench_function("Compress", |b| {
        b.iter(|| {
            for proof in &proofs {
                black_box(proof.compress());
            }
        })
    });

    group.finish();
}

fn bench_create(c: &mut Criterion) {
    let entries: Vec<Entry> = (0..1000).map(|_| generate_random_entry()).collect();
    c.bench_function("Create Airdrop", |b| {
        b.iter(|| black_box(create_airdrop_tree(&entries)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_proof_generation,
    bench_proof_compression,
    bench_create
);
criterion_main!(benches);
