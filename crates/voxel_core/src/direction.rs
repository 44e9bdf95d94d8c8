//! The 26-connected neighbor topology of a chunk.
//!
//! Directions are packed into a 27-slot table with the origin `(0, 0, 0)`
//! left as a reserved, unused hole, per the compile-time table design noted
//! in the base specification: `code = 9*(sx+1) + 3*(sy+1) + (sz+1)`. Negating
//! all three signs maps `code` to `26 - code`, so `opposite` is the trivial
//! involution `26 - code` rather than a hand-written switch.

use bevy_math::IVec3;

/// Number of slots in the raw direction table, including the unused origin.
pub const RAW_SLOTS: usize = 27;

/// Index of the reserved, always-empty `(0, 0, 0)` slot.
pub const ORIGIN_CODE: u8 = 13;

/// One of the 26 non-zero vectors in `{-1, 0, 1}^3`.
///
/// `Direction` is a thin newtype over the dense `0..27` code (minus the
/// reserved origin hole at 13) so it can be used directly as an array index
/// into a `[T; 27]` neighbor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Direction(u8);

impl Direction {
    /// Builds the direction from per-axis signs in `{-1, 0, 1}`.
    ///
    /// Panics if all three signs are zero: the origin is not a direction.
    pub const fn from_signs(sx: i32, sy: i32, sz: i32) -> Self {
        assert!(sx >= -1 && sx <= 1 && sy >= -1 && sy <= 1 && sz >= -1 && sz <= 1);
        let code = 9 * (sx + 1) + 3 * (sy + 1) + (sz + 1);
        assert!(code != ORIGIN_CODE as i32, "(0,0,0) is not a direction");
        Self(code as u8)
    }

    /// The dense `0..27` code (with a hole at [`ORIGIN_CODE`]), suitable as
    /// an index into a `[T; 27]` table.
    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// The unit vector this direction represents.
    #[inline]
    pub const fn vec(self) -> IVec3 {
        let code = self.0 as i32;
        let sx = code / 9 - 1;
        let sy = (code / 3) % 3 - 1;
        let sz = code % 3 - 1;
        IVec3::new(sx, sy, sz)
    }

    /// The direction whose vector is the negation of this one.
    ///
    /// `opposite(opposite(d)) == d` holds for every direction because
    /// negating all three signs twice is the identity, and the code
    /// transform `26 - code` is self-inverse.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self(26 - self.0)
    }

    /// All 26 directions, in ascending code order.
    pub fn all() -> impl Iterator<Item = Direction> {
        (0u8..RAW_SLOTS as u8)
            .filter(|&c| c != ORIGIN_CODE)
            .map(Direction)
    }

    /// The canonical sign-per-axis name, e.g. `X_NY_Z`, `NZ`.
    pub fn name(self) -> String {
        let v = self.vec();
        let mut parts = vec![];
        if v.x != 0 {
            parts.push(if v.x > 0 { "X" } else { "NX" });
        }
        if v.y != 0 {
            parts.push(if v.y > 0 { "Y" } else { "NY" });
        }
        if v.z != 0 {
            parts.push(if v.z > 0 { "Z" } else { "NZ" });
        }
        parts.join("_")
    }

    /// Builds a direction from a unit vector in `{-1,0,1}^3`, excluding the
    /// zero vector.
    pub fn from_vec(v: IVec3) -> Option<Self> {
        if v == IVec3::ZERO {
            return None;
        }
        if v.x.abs() > 1 || v.y.abs() > 1 || v.z.abs() > 1 {
            return None;
        }
        Some(Self::from_signs(v.x, v.y, v.z))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// All 26 directions in ascending code order, for callers that want a fixed
/// array instead of the lazy iterator from [`Direction::all`].
pub fn all_directions() -> [Direction; 26] {
    let mut out = [Direction(0); 26];
    for (slot, dir) in out.iter_mut().zip(Direction::all()) {
        *slot = dir;
    }
    out
}
