//! Unifies the two ways the mesher reads a neighbor voxel: through a
//! shape's sparse octree accelerator when present, or by walking the
//! 26-direction neighbor graph via [`voxel_core::sampler`].
//!
//! The base spec's original implementation branches on "is there an octree"
//! at every single neighbor read. Replacing that branch with one trait
//! object chosen once per chunk (see [`crate::mesher::Mesher::emit`]) keeps
//! the hot per-voxel loop free of the check entirely (spec §9 Design Note,
//! "Replacing octree branching").

use voxel_core::{chunk, Chunk, ChunkLookup, Voxel};

/// Narrow interface to a shape's sparse voxel accelerator, indexed in shape
/// (world) space.
pub trait OctreeLookup {
    fn get(&self, x: i32, y: i32, z: i32) -> Option<Voxel>;
}

/// A single way of reading a voxel. Coordinates are always in shape (world)
/// space, never chunk-local — `chunk` is passed only so a local-storage
/// source can translate into its own frame; callers never rebase themselves.
pub trait VoxelSource<H> {
    fn get(&self, chunk: &Chunk<H>, world_x: i32, world_y: i32, world_z: i32) -> Option<Voxel>;
}

/// Reads through a shape's octree, ignoring the chunk entirely — the
/// octree already indexes shape-space coordinates directly.
pub struct OctreeSource<'a>(pub &'a dyn OctreeLookup);

impl<H> VoxelSource<H> for OctreeSource<'_> {
    fn get(&self, _chunk: &Chunk<H>, world_x: i32, world_y: i32, world_z: i32) -> Option<Voxel> {
        self.0.get(world_x, world_y, world_z)
    }
}

/// Reads through [`voxel_core::sampler::sample`], walking into a linked
/// neighbor chunk when the rebased-local coordinate falls outside the
/// chunk. Translates the incoming shape-space coordinate into `chunk`'s
/// local frame via `chunk.pos()` before sampling.
pub struct SamplerSource<'a, H>(pub &'a dyn ChunkLookup<H>);

impl<H: Copy> VoxelSource<H> for SamplerSource<'_, H> {
    fn get(&self, chunk: &Chunk<H>, world_x: i32, world_y: i32, world_z: i32) -> Option<Voxel> {
        let (cx, cy, cz) = chunk.pos();
        let local_x = world_x - cx * chunk::WIDTH as i32;
        let local_y = world_y - cy * chunk::HEIGHT as i32;
        let local_z = world_z - cz * chunk::DEPTH as i32;
        voxel_core::sampler::sample(chunk, local_x, local_y, local_z, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeOctree;
    impl OctreeLookup for FakeOctree {
        fn get(&self, x: i32, y: i32, z: i32) -> Option<Voxel> {
            (x == 5 && y == 5 && z == 5).then(|| Voxel::new(1))
        }
    }

    #[test]
    fn octree_source_ignores_the_chunk_argument() {
        let octree = FakeOctree;
        let source = OctreeSource(&octree);
        let chunk = Chunk::<u32>::new(0, 0, 0);
        assert_eq!(source.get(&chunk, 5, 5, 5), Some(Voxel::new(1)));
        assert_eq!(source.get(&chunk, 0, 0, 0), None);
    }

    #[test]
    fn sampler_source_reads_in_range_voxels_directly() {
        let mut chunk = Chunk::<u32>::new(0, 0, 0);
        chunk.add(2, 2, 2, Voxel::new(9));
        let world: HashMap<u32, Chunk<u32>> = HashMap::new();
        let source = SamplerSource(&world as &dyn ChunkLookup<u32>);
        assert_eq!(source.get(&chunk, 2, 2, 2), Some(Voxel::new(9)));
    }

    #[test]
    fn sampler_source_translates_shape_space_into_the_chunks_local_frame() {
        let mut chunk = Chunk::<u32>::new(1, 0, 0);
        chunk.add(2, 2, 2, Voxel::new(9));
        let world: HashMap<u32, Chunk<u32>> = HashMap::new();
        let source = SamplerSource(&world as &dyn ChunkLookup<u32>);

        let world_x = chunk::WIDTH as i32 + 2;
        assert_eq!(source.get(&chunk, world_x, 2, 2), Some(Voxel::new(9)));
        assert_eq!(source.get(&chunk, 2, 2, 2), None);
    }
}
