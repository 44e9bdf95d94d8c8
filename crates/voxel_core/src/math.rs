//! Small vector helpers shared by [`crate::chunk`] and [`crate::sampler`].

use bevy_math::{IVec3, Vec3};

/// Component-wise floor, used to turn a world-space point into an integer
/// chunk/voxel coordinate.
pub fn floor(vec: Vec3) -> IVec3 {
    IVec3::new(
        vec.x.floor() as i32,
        vec.y.floor() as i32,
        vec.z.floor() as i32,
    )
}

/// Component-wise Euclidean remainder (always non-negative), used to
/// rebase a coordinate into a neighbor chunk's local frame regardless of
/// which side it overflowed from.
#[inline]
pub fn euclid_rem(vec: IVec3, div: IVec3) -> IVec3 {
    IVec3::new(
        vec.x.rem_euclid(div.x),
        vec.y.rem_euclid(div.y),
        vec.z.rem_euclid(div.z),
    )
}

#[cfg(test)]
mod tests {
    #[test]
    fn floor() {
        let floor = super::floor((14.3, -1.1, -17.0).into());
        assert_eq!(floor, (14, -2, -17).into());
    }

    #[test]
    fn euclid_rem() {
        let rem = super::euclid_rem((16, -1, -17).into(), (15, 15, 15).into());
        assert_eq!(rem, (1, 14, 13).into());

        let rem = super::euclid_rem((14, 0, 0).into(), (15, 15, 8).into());
        assert_eq!(rem, (14, 0, 0).into());

        let rem = super::euclid_rem((-15, 32, 0).into(), (15, 30, 15).into());
        assert_eq!(rem, (0, 2, 0).into());
    }
}
