use criterion::{criterion_group, criterion_main, Criterion};
use voxel_core::{chunk, Chunk, ChunkLookup, Palette, Voxel};
use voxel_meshing::light::VertexLight;
use voxel_meshing::{FaceRecord, FaceWriter, Mesher, MesherConfig, MesherWorkspace, MeshingError, Shape};

struct StonePalette;

impl Palette for StonePalette {
    fn atlas_index(&self, _voxel: Voxel) -> u16 {
        0
    }

    fn is_transparent(&self, _voxel: Voxel) -> bool {
        false
    }
}

struct EmptyWorld;

impl<H> ChunkLookup<H> for EmptyWorld {
    fn resolve(&self, _handle: H) -> Option<&Chunk<H>> {
        None
    }
}

struct FlatShape {
    palette: StonePalette,
    world: EmptyWorld,
}

impl Shape<u32> for FlatShape {
    fn palette(&self) -> &dyn Palette {
        &self.palette
    }

    fn chunk_lookup(&self) -> &dyn ChunkLookup<u32> {
        &self.world
    }

    fn light_or_default(&self, _x: i32, _y: i32, _z: i32, _use_default: bool) -> VertexLight {
        VertexLight::new(15, 0, 0, 0)
    }
}

struct DiscardWriter;

impl FaceWriter for DiscardWriter {
    fn write(&mut self, _record: FaceRecord) -> Result<(), MeshingError> {
        Ok(())
    }

    fn done(&mut self) -> Result<(), MeshingError> {
        Ok(())
    }
}

fn checkerboard_chunk() -> Chunk<u32> {
    let mut chunk = Chunk::new(0, 0, 0);
    for (x, y, z) in chunk::voxels() {
        if (x + y + z) % 2 == 0 {
            chunk.add(x, y, z, Voxel::new(1));
        }
    }
    chunk
}

fn criterion_benchmark(c: &mut Criterion) {
    let chunk = checkerboard_chunk();
    let shape = FlatShape {
        palette: StonePalette,
        world: EmptyWorld,
    };
    let config = MesherConfig::default();

    c.bench_function("emit checkerboard chunk", |b| {
        b.iter(|| {
            let mut opaque = DiscardWriter;
            let mut transparent = DiscardWriter;
            let mut workspace = MesherWorkspace::default();
            Mesher::emit(
                &shape,
                &chunk,
                &config,
                &mut workspace,
                &mut opaque,
                &mut transparent,
            )
            .unwrap();
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
