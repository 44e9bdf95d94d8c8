//! Cross-chunk voxel sampling: reading one step outside a chunk's own
//! bounds by walking into the right neighbor.

use bevy_math::IVec3;

use crate::chunk::{Chunk, DEPTH, HEIGHT, WIDTH};
use crate::direction::Direction;
use crate::math::euclid_rem;
use crate::voxel::Voxel;

/// Resolves a neighbor handle to the chunk it identifies.
///
/// This is the narrow interface [`sample`] needs from whatever owns the
/// actual chunk storage (a world/spatial-index layer, out of scope for this
/// crate). A `HashMap<H, Chunk<H>>` is a trivial implementation.
pub trait ChunkLookup<H> {
    fn resolve(&self, handle: H) -> Option<&Chunk<H>>;
}

impl<H: std::hash::Hash + Eq> ChunkLookup<H> for std::collections::HashMap<H, Chunk<H>> {
    fn resolve(&self, handle: H) -> Option<&Chunk<H>> {
        self.get(&handle)
    }
}

/// Classifies a single axis coordinate as in-range (`0`) or one step past
/// either boundary (`-1` / `1`).
#[inline]
fn axis_sign(coord: i32, size: i32) -> i32 {
    if coord < 0 {
        -1
    } else if coord >= size {
        1
    } else {
        0
    }
}

/// Samples a voxel at `(x, y, z)`, where each coordinate may be one step
/// outside `chunk`'s own `[0..W)`, `[0..H)`, `[0..D)` range.
///
/// When every coordinate is in range this is exactly `chunk.get(x, y, z)`.
/// Otherwise the direction whose sign matches each out-of-range axis is
/// computed, the coordinates are rebased into that neighbor's local frame,
/// and the neighbor (if linked and resolvable) is consulted. This never
/// recurses more than one hop: callers are expected to pass coordinates
/// bounded to one cell past each face, so at most one neighbor is visited.
pub fn sample<H: Copy>(chunk: &Chunk<H>, x: i32, y: i32, z: i32, lookup: &(impl ChunkLookup<H> + ?Sized)) -> Option<Voxel> {
    let sx = axis_sign(x, WIDTH as i32);
    let sy = axis_sign(y, HEIGHT as i32);
    let sz = axis_sign(z, DEPTH as i32);

    if sx == 0 && sy == 0 && sz == 0 {
        return chunk.get(x, y, z);
    }

    let dir = Direction::from_signs(sx, sy, sz);
    let rebased = euclid_rem(
        IVec3::new(x, y, z),
        IVec3::new(WIDTH as i32, HEIGHT as i32, DEPTH as i32),
    );

    let neighbor_handle = chunk.neighbor(dir)?;
    let neighbor = lookup.resolve(neighbor_handle)?;
    neighbor.get(rebased.x, rebased.y, rebased.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::Voxel;
    use std::collections::HashMap;

    #[test]
    fn in_range_coordinates_read_the_chunk_itself() {
        let mut chunk = Chunk::<u32>::new(0, 0, 0);
        chunk.add(3, 3, 3, Voxel::new(5));
        let world: HashMap<u32, Chunk<u32>> = HashMap::new();
        assert_eq!(sample(&chunk, 3, 3, 3, &world), Some(Voxel::new(5)));
    }

    #[test]
    fn out_of_range_with_no_neighbor_is_empty() {
        let chunk = Chunk::<u32>::new(0, 0, 0);
        let world: HashMap<u32, Chunk<u32>> = HashMap::new();
        assert_eq!(sample(&chunk, -1, 0, 0, &world), None);
    }

    #[test]
    fn out_of_range_walks_into_the_linked_neighbor() {
        let mut a = Chunk::<u32>::new(0, 0, 0);
        let mut b = Chunk::<u32>::new(1, 0, 0);
        b.add(0, 0, 0, Voxel::new(9));

        let dir = Direction::from_signs(1, 0, 0);
        a.set_neighbor(dir, Some(1));

        let mut world = HashMap::new();
        world.insert(1u32, b);
        assert_eq!(
            sample(&a, crate::chunk::WIDTH as i32, 0, 0, &world),
            Some(Voxel::new(9))
        );
    }

    #[test]
    fn rebasing_wraps_each_out_of_range_axis_independently() {
        let mut a = Chunk::<u32>::new(0, 0, 0);
        let mut corner = Chunk::<u32>::new(1, 1, 1);
        corner.add(0, 0, 0, Voxel::new(3));

        let dir = Direction::from_signs(1, 1, 1);
        a.set_neighbor(dir, Some(1));

        let mut map = HashMap::new();
        map.insert(1u32, corner);

        let w = crate::chunk::WIDTH as i32;
        let h = crate::chunk::HEIGHT as i32;
        let d = crate::chunk::DEPTH as i32;
        assert_eq!(sample(&a, w, h, d, &map), Some(Voxel::new(3)));
    }
}
