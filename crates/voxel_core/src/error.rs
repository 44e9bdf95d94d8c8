//! Error taxonomy for `voxel_core`.
//!
//! Per the base specification's error-handling design, storage operations
//! (`add`/`remove`/`paint`/`get`) are infallible by construction — occupancy
//! conflicts and out-of-range reads are ordinary return values, not errors.
//! This type is reserved for the one class of genuine failure the ambient
//! stack introduces: a caller-supplied [`crate::ChunkLookup`] or spatial
//! index that cannot resolve a handle it previously handed out.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoxelCoreError {
    #[error("chunk handle did not resolve to a live chunk")]
    DanglingNeighborHandle,
}
