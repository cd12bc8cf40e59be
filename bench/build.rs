use criterion::{criterion_group, criterion_main, Criterion};
use merkledrop::{build_airdrop_tree, build_unbalanced_airdrop_tree, Entry, U256};

pub fn generate_random_entry() -> Entry {
    Entry::new(rand::random(), U256::from(rand::random::<u64>()))
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Airdrop Tree Build");
    // 1000 entries pad to 1024 leaves
    let entries: Vec<Entry> = (0..1000).map(|_| generate_random_entry()).collect();

    // Benchmark balanced tree building
    group.bench_function("Balanced Tree", |b| {
        b.iter(|| build_airdrop_tree(&entries))
    });

    // Benchmark unbalanced tree building
    group.bench_function("Unbalanced Tree", |b| {
        b.iter(|| build_unbalanced_airdrop_tree(&entries))
    });

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
