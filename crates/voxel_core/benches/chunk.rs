use criterion::{criterion_group, criterion_main, Criterion};
use voxel_core::{chunk, Chunk, Voxel};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("get", |b| {
        let chunk = filled();
        b.iter(|| {
            std::hint::black_box(chunk.get(8, 8, 8));
        });
    });

    c.bench_function("add then remove", |b| {
        let mut chunk = Chunk::<u32>::new(0, 0, 0);
        b.iter(|| {
            chunk.add(4, 4, 4, Voxel::new(1));
            std::hint::black_box(chunk.remove(4, 4, 4));
        });
    });

    c.bench_function("bbox", |b| {
        let chunk = filled();
        b.iter(|| {
            std::hint::black_box(chunk.bbox());
        });
    });
}

fn filled() -> Chunk<u32> {
    let mut chunk = Chunk::new(0, 0, 0);
    for (x, y, z) in chunk::voxels() {
        if (x + y + z) % 3 == 0 {
            chunk.add(x, y, z, Voxel::new(1));
        }
    }
    chunk
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
