use binmerkle::{Blake2b256, Blake3, MerkleTree, TreeOptions, verify_encoded};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, rng};

fn leaves(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("leaf-{i}").into_bytes())
        .collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("build");
        for size in [1_000usize, 10_000, 100_000] {
            let input = leaves(size);
            group.bench_with_input(BenchmarkId::new("blake2b256", size), &input, |b, input| {
                b.iter(|| MerkleTree::build(input).expect("build"));
            });
            group.bench_with_input(
                BenchmarkId::new("blake2b256 sequential", size),
                &input,
                |b, input| {
                    b.iter(|| {
                        MerkleTree::build_with_options(Blake2b256, input, &TreeOptions::sequential())
                            .unwrap()
                            .expect("build")
                    });
                },
            );
            group.bench_with_input(BenchmarkId::new("blake3", size), &input, |b, input| {
                b.iter(|| MerkleTree::build_with_provider(Blake3, input).expect("build"));
            });
        }
    }

    c.bench_function("proof for leaf", |b| {
        let input = leaves(100_000);
        let tree = MerkleTree::build(&input).expect("build");
        let mut rng = rng();
        b.iter(|| {
            let index = rng.random_range(0..input.len());
            tree.proof_for_leaf(&input[index]).expect("proof")
        });
    });

    c.bench_function("verify encoded", |b| {
        let input = leaves(100_000);
        let tree = MerkleTree::build(&input).expect("build");
        let root = tree.root_digest();
        let mut rng = rng();
        let proofs: Vec<_> = (0..10_000)
            .map(|_| {
                let index = rng.random_range(0..input.len());
                (index, tree.proof_for_index(index).expect("proof").to_bytes())
            })
            .collect();
        b.iter(|| {
            let (index, proof) = &proofs[rng.random_range(0..proofs.len())];
            assert!(verify_encoded(&Blake2b256, &root, proof, &input[*index]));
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
);
criterion_main!(benches);
