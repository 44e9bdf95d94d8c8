//! Per-corner ambient occlusion: the three-flag formula over a voxel's
//! 3x3x3 neighborhood, and the table wiring each face's 4 corners to the
//! edge/corner directions that feed it.
//!
//! Grounded on the teacher's own `NEIGHBOR_VERTEX_LOOKUP` pattern (a fixed
//! per-face table of ring-neighbor indices reused across every voxel); here
//! the table entries are [`voxel_core::Direction`] values computed from the
//! face's normal and in-plane axes instead of hand-transcribed indices,
//! since this crate's ring has 26 slots addressed by direction rather than
//! a hand-counted 0..26 sequence.

use voxel_core::Direction;

use crate::writer::Face;

/// The two edge-adjacent directions and the corner-diagonal direction that
/// together determine one face corner's AO value.
#[derive(Debug, Clone, Copy)]
pub struct CornerWiring {
    pub edge1: Direction,
    pub edge2: Direction,
    pub corner: Direction,
}

/// Fixed per-face corner order: (u, v) signs on the two in-plane axes, in
/// CCW winding. The same order is used for every face so a chunk's quads
/// wind consistently.
const CORNER_SIGNS: [(i32, i32); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

fn in_plane_axes(face: Face) -> (usize, usize) {
    match face {
        Face::Left | Face::Right => (1, 2), // y, z
        Face::Top | Face::Down => (0, 2),   // x, z
        Face::Back | Face::Front => (0, 1), // x, y
    }
}

fn normal_axis(face: Face) -> usize {
    match face {
        Face::Left | Face::Right => 0,
        Face::Top | Face::Down => 1,
        Face::Back | Face::Front => 2,
    }
}

/// The 4 corners of `face`, in the fixed winding order the mesher emits
/// vertices in.
pub fn corners(face: Face) -> [CornerWiring; 4] {
    let (nx, ny, nz) = face.normal();
    let normal = [nx, ny, nz];
    let n_axis = normal_axis(face);
    let n_sign = normal[n_axis];
    let (u_axis, v_axis) = in_plane_axes(face);

    CORNER_SIGNS.map(|(u, v)| {
        let mut edge1 = [0, 0, 0];
        edge1[n_axis] = n_sign;
        edge1[u_axis] = u;

        let mut edge2 = [0, 0, 0];
        edge2[n_axis] = n_sign;
        edge2[v_axis] = v;

        let mut corner = [0, 0, 0];
        corner[n_axis] = n_sign;
        corner[u_axis] = u;
        corner[v_axis] = v;

        CornerWiring {
            edge1: Direction::from_signs(edge1[0], edge1[1], edge1[2]),
            edge2: Direction::from_signs(edge2[0], edge2[1], edge2[2]),
            corner: Direction::from_signs(corner[0], corner[1], corner[2]),
        }
    })
}

/// The AO formula: `s1`/`s2` are the two edge-neighbor AO-caster flags
/// adjacent to a corner, `c` is the corner-diagonal AO-caster flag.
pub fn compute(s1: bool, s2: bool, c: bool) -> u8 {
    if s1 && s2 {
        3
    } else if c && (s1 || s2) {
        2
    } else if c || s1 || s2 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::FACES;

    #[test]
    fn compute_matches_the_spec_table() {
        assert_eq!(compute(false, false, false), 0);
        assert_eq!(compute(true, false, false), 1);
        assert_eq!(compute(false, false, true), 1);
        assert_eq!(compute(true, false, true), 2);
        assert_eq!(compute(true, true, false), 3);
        assert_eq!(compute(true, true, true), 3);
    }

    #[test]
    fn every_face_produces_4_distinct_corners() {
        for face in FACES {
            let c = corners(face);
            let corners_only: std::collections::HashSet<_> = c.iter().map(|w| w.corner).collect();
            assert_eq!(corners_only.len(), 4, "face {face:?} has duplicate corners");
        }
    }

    #[test]
    fn corner_direction_is_the_sum_of_its_two_edges() {
        for face in FACES {
            for wiring in corners(face) {
                let expected = wiring.edge1.vec() + wiring.edge2.vec() - face_normal_vec(face);
                assert_eq!(wiring.corner.vec(), expected);
            }
        }
    }

    fn face_normal_vec(face: Face) -> bevy_math::IVec3 {
        let (x, y, z) = face.normal();
        bevy_math::IVec3::new(x, y, z)
    }

    #[test]
    fn opposite_faces_produce_opposite_corner_directions() {
        let left: std::collections::HashSet<_> = corners(Face::Left).iter().map(|w| w.corner).collect();
        let right: std::collections::HashSet<_> = corners(Face::Right)
            .iter()
            .map(|w| w.corner.opposite())
            .collect();
        assert_eq!(left, right);
    }
}
