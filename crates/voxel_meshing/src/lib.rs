//! Face-culling meshing with ambient occlusion and smoothed lighting for
//! chunked voxel storage built on `voxel_core`.
//!
//! This crate owns the mesher's algorithm only: it reads voxels through
//! [`source::VoxelSource`], reads light through [`mesher::Shape`], and
//! writes geometry through [`writer::FaceWriter`]. It has no rendering
//! device code and no spatial index of its own.

pub mod ao;
pub mod error;
pub mod light;
pub mod linker;
pub mod mesher;
pub mod source;
pub mod writer;

pub use error::MeshingError;
pub use linker::{ChunkIndex, NeighborLinker, NeighborWorld};
pub use mesher::{Mesher, MesherConfig, MesherWorkspace, NeighborhoodCache, Shape};
pub use source::{OctreeLookup, OctreeSource, SamplerSource, VoxelSource};
pub use writer::{Face, FaceRecord, FaceWriter, FACES};
