//! The voxel value itself and the narrow palette boundary the mesher reads
//! through.

/// A palette color index stored in a chunk slot.
///
/// `Voxel` carries no behavior of its own — whether it is solid, opaque,
/// transparent, an AO caster, or a light caster is entirely a property of
/// the palette entry it indexes, looked up through [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Voxel(pub u16);

impl Voxel {
    /// The reserved "air" color index. A slot holding `Voxel::AIR` is
    /// treated identically to an empty slot by every solidity predicate.
    pub const AIR: Voxel = Voxel(0);

    pub const fn new(color: u16) -> Self {
        Self(color)
    }

    pub const fn color(self) -> u16 {
        self.0
    }

    pub const fn is_air(self) -> bool {
        self.0 == Self::AIR.0
    }
}

impl From<u16> for Voxel {
    fn from(v: u16) -> Self {
        Voxel(v)
    }
}

/// The per-voxel facts the mesher needs, computed once per lookup by
/// [`Palette::classify`] so callers need a single palette lookup per
/// neighbor instead of four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub solid: bool,
    pub opaque: bool,
    pub transparent: bool,
    pub ao_caster: bool,
    pub light_caster: bool,
}

impl Classification {
    /// The classification of an empty (no-voxel) slot: not solid, and
    /// therefore a light caster but never an AO caster.
    pub const EMPTY: Classification = Classification {
        solid: false,
        opaque: false,
        transparent: false,
        ao_caster: false,
        light_caster: true,
    };
}

/// The color palette, read by the mesher only through this trait.
///
/// A real palette (out of scope for this crate) typically loads its
/// descriptions from a config asset; this crate only needs to turn a
/// [`Voxel`] into the handful of booleans and the atlas index a face
/// record carries upstream.
pub trait Palette {
    /// The atlas tile index this color should be rendered with.
    fn atlas_index(&self, voxel: Voxel) -> u16;

    /// Whether this color is classified as transparent (e.g. water, glass).
    fn is_transparent(&self, voxel: Voxel) -> bool;

    /// Whether additionally-transparent voxels should also count as AO
    /// casters. Defaults to `false`, matching the base spec's default (only
    /// opaque voxels are AO casters unless this compile-time knob flips).
    fn transparent_voxels_cast_ao(&self) -> bool {
        false
    }

    /// Classifies a voxel slot in one combined lookup.
    ///
    /// `None` (empty slot) and `Some(Voxel::AIR)` both classify as
    /// [`Classification::EMPTY`].
    fn classify(&self, voxel: Option<Voxel>) -> Classification {
        let Some(voxel) = voxel.filter(|v| !v.is_air()) else {
            return Classification::EMPTY;
        };

        let transparent = self.is_transparent(voxel);
        let opaque = !transparent;
        let ao_caster = opaque || (transparent && self.transparent_voxels_cast_ao());

        Classification {
            solid: true,
            opaque,
            transparent,
            ao_caster,
            light_caster: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPalette {
        transparent_colors: Vec<u16>,
        ao_casting_transparents: bool,
    }

    impl Palette for TestPalette {
        fn atlas_index(&self, voxel: Voxel) -> u16 {
            voxel.0
        }

        fn is_transparent(&self, voxel: Voxel) -> bool {
            self.transparent_colors.contains(&voxel.0)
        }

        fn transparent_voxels_cast_ao(&self) -> bool {
            self.ao_casting_transparents
        }
    }

    #[test]
    fn empty_slot_classifies_as_empty() {
        let palette = TestPalette {
            transparent_colors: vec![],
            ao_casting_transparents: false,
        };
        assert_eq!(palette.classify(None), Classification::EMPTY);
        assert_eq!(palette.classify(Some(Voxel::AIR)), Classification::EMPTY);
    }

    #[test]
    fn opaque_voxel_is_solid_opaque_and_ao_caster() {
        let palette = TestPalette {
            transparent_colors: vec![],
            ao_casting_transparents: false,
        };
        let c = palette.classify(Some(Voxel::new(3)));
        assert!(c.solid);
        assert!(c.opaque);
        assert!(!c.transparent);
        assert!(c.ao_caster);
        assert!(!c.light_caster);
    }

    #[test]
    fn transparent_voxel_is_not_ao_caster_by_default() {
        let palette = TestPalette {
            transparent_colors: vec![9],
            ao_casting_transparents: false,
        };
        let c = palette.classify(Some(Voxel::new(9)));
        assert!(c.solid);
        assert!(!c.opaque);
        assert!(c.transparent);
        assert!(!c.ao_caster);
    }

    #[test]
    fn transparent_voxel_can_opt_in_to_ao_casting() {
        let palette = TestPalette {
            transparent_colors: vec![9],
            ao_casting_transparents: true,
        };
        let c = palette.classify(Some(Voxel::new(9)));
        assert!(c.ao_caster);
    }
}
