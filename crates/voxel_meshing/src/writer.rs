//! The face-record boundary: what the mesher emits, and the narrow trait an
//! external vertex-buffer arena implements to receive it.

use bevy_math::Vec3;
use voxel_core::Direction;

use crate::error::MeshingError;
use crate::light::VertexLight;

/// One of the 6 axis-aligned faces of a voxel.
///
/// Unlike [`Direction`], which spans all 26 neighbor slots, `Face` only ever
/// names the 6 face-adjacent ones a voxel can occlude or expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Left,
    Right,
    Back,
    Front,
    Top,
    Down,
}

/// The 6 faces in the fixed emission order the mesher writes them in.
pub const FACES: [Face; 6] = [
    Face::Left,
    Face::Right,
    Face::Back,
    Face::Front,
    Face::Top,
    Face::Down,
];

impl Face {
    /// The outward unit normal, as per-axis signs.
    pub const fn normal(self) -> (i32, i32, i32) {
        match self {
            Face::Left => (-1, 0, 0),
            Face::Right => (1, 0, 0),
            Face::Back => (0, 0, -1),
            Face::Front => (0, 0, 1),
            Face::Top => (0, 1, 0),
            Face::Down => (0, -1, 0),
        }
    }

    /// The 26-direction slot this face's axial neighbor occupies.
    pub fn direction(self) -> Direction {
        let (x, y, z) = self.normal();
        Direction::from_signs(x, y, z)
    }

    /// Offset of the face's anchor vertex from the voxel's min corner.
    pub fn anchor_offset(self) -> Vec3 {
        match self {
            Face::Left => Vec3::new(0.0, 0.5, 0.5),
            Face::Right => Vec3::new(1.0, 0.5, 0.5),
            Face::Back => Vec3::new(0.5, 0.5, 0.0),
            Face::Front => Vec3::new(0.5, 0.5, 1.0),
            Face::Top => Vec3::new(0.5, 1.0, 0.5),
            Face::Down => Vec3::new(0.5, 0.0, 0.5),
        }
    }
}

/// One visible quad: anchor position, atlas color, and per-corner AO and
/// light, in the fixed winding order [`crate::ao::corners`] produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceRecord {
    pub anchor: Vec3,
    pub atlas_index: u16,
    pub face: Face,
    pub ao: [u8; 4],
    pub vlight: [VertexLight; 4],
}

/// The sink a [`crate::mesher::Mesher`] streams face records into.
///
/// Placement and packing into the actual vertex buffer are entirely opaque
/// to this crate; a real implementation typically lives in a renderer-side
/// arena crate out of scope here.
pub trait FaceWriter {
    fn write(&mut self, record: FaceRecord) -> Result<(), MeshingError>;
    fn done(&mut self) -> Result<(), MeshingError>;
}
