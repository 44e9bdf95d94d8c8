//! Bulk installs and removes the 26 neighbor links a chunk needs before it
//! can be meshed.
//!
//! Grounded on the teacher's `update_kind_neighborhoods`/`ChunkNeighborhood`
//! bulk-link pass (`crates/shaping/src/lib.rs`, `crates/core/src/chunk.rs`),
//! generalized from the teacher's 6-way neighborhood to the full 26-way
//! graph and split into an explicit "hello"/"goodbye" pair per spec §4.4.

use itertools::Itertools;
use voxel_core::{Chunk, Direction};

/// Batched neighbor-position lookup the chunk index exposes to
/// [`NeighborLinker`].
///
/// The `reset`/`advance_x`/`advance_y`/`get_z` split lets a real spatial
/// index share work across the 27 cells of a neighborhood: descend once per
/// x-prefix, once per y-prefix from there, and pay for a leaf read only per
/// z offset actually requested (spec §4.4's "≤ 9 sub-tree descents" note).
pub trait ChunkIndex<H> {
    type Root;
    type XPrefix;
    type XyPrefix;

    fn reset(&self, origin: (i32, i32, i32)) -> Self::Root;
    fn advance_x(&self, root: &Self::Root, dx: i32) -> Self::XPrefix;
    fn advance_y(&self, x_prefix: &Self::XPrefix, dy: i32) -> Self::XyPrefix;
    fn get_z(&self, xy_prefix: &Self::XyPrefix, dz: i32) -> Option<H>;
}

/// The subset of a chunk world the linker needs: a batched positional
/// lookup plus mutable access to a chunk behind a handle. A world's own
/// `HashMap<H, Chunk<H>>` storage typically implements both halves
/// directly.
pub trait NeighborWorld<H: Copy> {
    type Index: ChunkIndex<H>;

    fn index(&self) -> &Self::Index;
    fn chunk_mut(&mut self, handle: H) -> Option<&mut Chunk<H>>;
}

pub struct NeighborLinker;

impl NeighborLinker {
    /// The "hello" protocol: wires `handle` (sitting at `pos`) to every
    /// chunk currently occupying one of its 26 neighbor cells, symmetrically
    /// on both ends.
    #[tracing::instrument(skip(world))]
    pub fn install<H, W>(world: &mut W, handle: H, pos: (i32, i32, i32))
    where
        H: Copy + std::fmt::Debug,
        W: NeighborWorld<H>,
    {
        let links = {
            let root = world.index().reset(pos);
            let mut found = Vec::with_capacity(26);
            for dx in -1..=1 {
                let x_prefix = world.index().advance_x(&root, dx);
                for dy in -1..=1 {
                    let xy_prefix = world.index().advance_y(&x_prefix, dy);
                    for dz in -1..=1 {
                        if dx == 0 && dy == 0 && dz == 0 {
                            continue;
                        }
                        if let Some(neighbor) = world.index().get_z(&xy_prefix, dz) {
                            found.push((Direction::from_signs(dx, dy, dz), neighbor));
                        }
                    }
                }
            }
            found
        };

        let linked = links.len();
        for (dir, neighbor) in links {
            if let Some(chunk) = world.chunk_mut(handle) {
                chunk.set_neighbor(dir, Some(neighbor));
            }
            if let Some(neighbor_chunk) = world.chunk_mut(neighbor) {
                neighbor_chunk.set_neighbor(dir.opposite(), Some(handle));
            }
        }
        tracing::trace!(?handle, linked, "installed neighbor links");
    }

    /// The "goodbye" protocol: clears every link currently set on `handle`,
    /// on both ends, restoring the symmetry invariant by construction rather
    /// than leaving the far side dangling.
    #[tracing::instrument(skip(world))]
    pub fn unlink<H, W>(world: &mut W, handle: H)
    where
        H: Copy + std::fmt::Debug,
        W: NeighborWorld<H>,
    {
        let Some(links) = world
            .chunk_mut(handle)
            .map(|chunk| chunk.linked_neighbors().collect_vec())
        else {
            return;
        };

        if let Some(chunk) = world.chunk_mut(handle) {
            for (dir, _) in &links {
                chunk.set_neighbor(*dir, None);
            }
        }
        for (dir, neighbor) in &links {
            if let Some(neighbor_chunk) = world.chunk_mut(*neighbor) {
                neighbor_chunk.set_neighbor(dir.opposite(), None);
            }
        }
        tracing::trace!(?handle, unlinked = links.len(), "unlinked neighbor links");
    }
}
