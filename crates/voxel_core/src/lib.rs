//! Chunk storage, the 26-direction neighbor graph, and one-hop cross-chunk
//! voxel sampling.
//!
//! This crate is the data-and-sampling half of a chunked voxel meshing
//! core; the face-culling + AO + smooth-light pass itself lives in
//! `voxel_meshing`, which depends on this crate.

pub mod chunk;
pub mod direction;
pub mod error;
pub mod math;
pub mod sampler;
pub mod voxel;

pub use chunk::{ArenaHandle, BoundingBox, Chunk, VbmaKind};
pub use direction::Direction;
pub use error::VoxelCoreError;
pub use sampler::ChunkLookup;
pub use voxel::{Classification, Palette, Voxel};
