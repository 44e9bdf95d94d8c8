//! The chunk: a dense `W x H x D` grid of optional voxels, its 26 neighbor
//! links, and the handful of O(1) mutators the mesher and its callers use.

use bevy_math::IVec3;

use crate::direction::{Direction, RAW_SLOTS};
use crate::voxel::Voxel;

/// Chunk width along X. A compile-time constant per the base spec's
/// `CHUNK_WIDTH` build-time knob.
pub const WIDTH: usize = 16;
/// Chunk height along Y.
pub const HEIGHT: usize = 16;
/// Chunk depth along Z.
pub const DEPTH: usize = 16;

const BUFFER_SIZE: usize = WIDTH * DEPTH * HEIGHT;

/// Converts local coordinates to a flat buffer index.
///
/// Layout order is `x, z, y`: Z varies before Y so that the inner loop of
/// the mesher's `x` outer / `z` middle / `y` inner traversal walks
/// contiguous memory. This must be preserved verbatim — it is a cache
/// layout decision the mesher's traversal order depends on, not an
/// implementation detail free to change.
#[inline]
fn to_index(x: i32, y: i32, z: i32) -> usize {
    debug_assert!(is_within_bounds(x, y, z));
    (x as usize) * DEPTH * HEIGHT + (z as usize) * HEIGHT + (y as usize)
}

/// Inverse of [`to_index`], used by iteration and tests.
#[inline]
fn from_index(index: usize) -> (i32, i32, i32) {
    let x = index / (DEPTH * HEIGHT);
    let rem = index % (DEPTH * HEIGHT);
    let z = rem / HEIGHT;
    let y = rem % HEIGHT;
    (x as i32, y as i32, z as i32)
}

#[inline]
pub fn is_within_bounds(x: i32, y: i32, z: i32) -> bool {
    (0..WIDTH as i32).contains(&x) && (0..HEIGHT as i32).contains(&y) && (0..DEPTH as i32).contains(&z)
}

/// A kind-agnostic, axis-aligned bounding box of occupied local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: IVec3,
    pub max: IVec3,
}

/// An opaque, non-owning handle to a vertex-buffer arena slot.
///
/// The chunk owns the *slot* (this value) but never the memory it refers
/// to; the arena itself lives entirely outside this crate.
pub type ArenaHandle = u32;

/// Which of the two per-chunk vertex-buffer slots an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VbmaKind {
    Opaque,
    Transparent,
}

/// A `W x H x D` box of voxel slots, its occupancy bookkeeping, its two
/// vertex-buffer arena handles, and its 26 neighbor links.
///
/// `Chunk` is generic over `H`, the non-owning handle type the world's
/// spatial index uses to identify a chunk (see [`crate::NeighborTable`]).
/// It carries no logic for finding those handles — that is
/// `voxel_meshing::NeighborLinker`'s job — only storage for them.
#[derive(Debug, Clone)]
pub struct Chunk<H> {
    pos: (i32, i32, i32),
    blocks: Box<[Option<Voxel>; BUFFER_SIZE]>,
    count: u32,
    dirty: bool,
    neighbors: [Option<H>; RAW_SLOTS],
    vbma_opaque: Option<ArenaHandle>,
    vbma_transparent: Option<ArenaHandle>,
}

impl<H> Default for Chunk<H> {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl<H> PartialEq for Chunk<H> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.blocks == other.blocks
    }
}

impl<H> Chunk<H> {
    /// Creates an empty chunk at the given grid position. `pos` is
    /// immutable for the chunk's lifetime.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            pos: (x, y, z),
            blocks: Box::new([None; BUFFER_SIZE]),
            count: 0,
            dirty: false,
            neighbors: std::array::from_fn(|_| None),
            vbma_opaque: None,
            vbma_transparent: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> (i32, i32, i32) {
        self.pos
    }

    /// Inserts a voxel iff the slot is currently empty. Returns whether the
    /// insertion happened; rejects (without mutating) if the slot is
    /// already occupied.
    pub fn add(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) -> bool {
        debug_assert!(is_within_bounds(x, y, z), "add out of chunk bounds");
        let idx = to_index(x, y, z);
        if self.blocks[idx].is_some() {
            return false;
        }
        self.blocks[idx] = Some(voxel);
        self.count += 1;
        self.dirty = true;
        true
    }

    /// Clears an occupied slot. Returns whether a voxel was actually
    /// removed.
    pub fn remove(&mut self, x: i32, y: i32, z: i32) -> bool {
        debug_assert!(is_within_bounds(x, y, z), "remove out of chunk bounds");
        let idx = to_index(x, y, z);
        if self.blocks[idx].take().is_some() {
            self.count -= 1;
            self.dirty = true;
            true
        } else {
            false
        }
    }

    /// Updates the color of an occupied slot. Returns whether the color
    /// actually changed (a no-op paint that sets the same color leaves
    /// `dirty` untouched and returns `false`).
    pub fn paint(&mut self, x: i32, y: i32, z: i32, color: Voxel) -> bool {
        debug_assert!(is_within_bounds(x, y, z), "paint out of chunk bounds");
        let idx = to_index(x, y, z);
        match &mut self.blocks[idx] {
            Some(existing) if *existing != color => {
                *existing = color;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Reads a slot. Out-of-range coordinates return empty rather than an
    /// error: the mesher's boundary logic is "sample, and if empty, maybe
    /// fall through to the neighbor".
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<Voxel> {
        if is_within_bounds(x, y, z) {
            self.blocks[to_index(x, y, z)]
        } else {
            None
        }
    }

    /// The number of occupied slots. Kept live by `add`/`remove` rather
    /// than recomputed, so callers can cheaply decide whether a chunk is
    /// worth meshing at all.
    #[inline]
    pub fn block_count(&self) -> u32 {
        self.count
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Scans every cell for the axis-aligned bounding box of occupied
    /// coordinates. `None` if the chunk has no voxels at all.
    pub fn bbox(&self) -> Option<BoundingBox> {
        let mut min = IVec3::splat(i32::MAX);
        let mut max = IVec3::splat(i32::MIN);
        let mut any = false;

        for (idx, slot) in self.blocks.iter().enumerate() {
            if slot.is_some() {
                any = true;
                let (x, y, z) = from_index(idx);
                min = min.min(IVec3::new(x, y, z));
                max = max.max(IVec3::new(x, y, z));
            }
        }

        any.then_some(BoundingBox { min, max })
    }

    pub fn attach_vbma(&mut self, kind: VbmaKind, handle: ArenaHandle) {
        match kind {
            VbmaKind::Opaque => self.vbma_opaque = Some(handle),
            VbmaKind::Transparent => self.vbma_transparent = Some(handle),
        }
    }

    pub fn vbma(&self, kind: VbmaKind) -> Option<ArenaHandle> {
        match kind {
            VbmaKind::Opaque => self.vbma_opaque,
            VbmaKind::Transparent => self.vbma_transparent,
        }
    }

    pub fn take_vbma(&mut self, kind: VbmaKind) -> Option<ArenaHandle> {
        match kind {
            VbmaKind::Opaque => self.vbma_opaque.take(),
            VbmaKind::Transparent => self.vbma_transparent.take(),
        }
    }
}

impl<H: Copy> Chunk<H> {
    /// Reads the link currently installed for `dir`.
    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<H> {
        self.neighbors[dir.code() as usize]
    }

    /// Sets or clears the link for `dir`. Only [`crate::NeighborLinker`]
    /// (in `voxel_meshing`) and tests should call this directly; it does
    /// not maintain the symmetry invariant by itself.
    pub fn set_neighbor(&mut self, dir: Direction, handle: Option<H>) {
        self.neighbors[dir.code() as usize] = handle;
    }

    /// Iterates over every currently-installed `(Direction, handle)` link.
    pub fn linked_neighbors(&self) -> impl Iterator<Item = (Direction, H)> + '_ {
        Direction::all().filter_map(move |d| self.neighbor(d).map(|h| (d, h)))
    }
}

/// Iterates every local coordinate of a chunk in `x` outer / `z` middle /
/// `y` inner order — the cache-friendly order the mesher traverses in.
pub fn voxels() -> impl Iterator<Item = (i32, i32, i32)> {
    (0..BUFFER_SIZE).map(from_index)
}
