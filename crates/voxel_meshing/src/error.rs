//! Error taxonomy for `voxel_meshing`.
//!
//! Storage and classification stay infallible per `voxel_core`'s taxonomy;
//! this type covers the one boundary call that can genuinely fail — an
//! external [`crate::writer::FaceWriter`] rejecting a write because its
//! backing arena is full.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshingError {
    #[error("face writer rejected a write: arena is full")]
    WriterFull,
}
