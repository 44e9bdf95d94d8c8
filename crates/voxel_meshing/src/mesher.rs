//! The face-culling + AO + smooth-light pass itself.
//!
//! Grounded on the teacher's `faces_occlusion`/`generate_faces`/
//! `generate_vertices` pipeline (`crates/shaping/src/lib.rs`) and its
//! `light_smoother::smooth_lighting` 26-neighborhood gather
//! (`src/world/terraformation/shaping/light_smoother.rs`), restructured
//! into the single per-voxel pass spec §4.5 describes: one
//! [`NeighborhoodCache`] built per solid voxel and read by all 6 candidate
//! faces instead of a separate occlusion pass, light-smoothing pass, and
//! vertex-generation pass over the whole chunk.

use bevy_math::Vec3;
use voxel_core::{chunk, Chunk, ChunkLookup, Classification, Direction, Palette, Voxel};

use crate::ao;
use crate::error::MeshingError;
use crate::light::{self, SmoothingPolicy, VertexLight};
use crate::source::{OctreeLookup, OctreeSource, SamplerSource, VoxelSource};
use crate::writer::{Face, FaceRecord, FaceWriter, FACES};

/// Runtime knobs the base spec keeps as build-time constants except for
/// `smoothing`, which is kept a runtime value so one build can exercise all
/// three policies (spec §6, §9 "Compile-time knobs").
#[derive(Debug, Clone, Copy)]
pub struct MesherConfig {
    pub smoothing: SmoothingPolicy,
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            smoothing: SmoothingPolicy::Average,
        }
    }
}

/// Everything the mesher needs from the object that owns a chunk: its
/// palette, its chunk-position lookup for cross-chunk sampling, its
/// optional octree accelerator, its light grid, and the
/// draw-inner-transparent-faces option (spec §6 "To the shape").
pub trait Shape<H> {
    fn palette(&self) -> &dyn Palette;
    fn chunk_lookup(&self) -> &dyn ChunkLookup<H>;
    fn octree(&self) -> Option<&dyn OctreeLookup> {
        None
    }
    fn light_or_default(&self, x: i32, y: i32, z: i32, use_default: bool) -> VertexLight;
    fn draw_inner_transparent_faces(&self) -> bool {
        false
    }
}

/// A per-voxel cache of the full 3x3x3 neighborhood (26 directions): each
/// slot's voxel and light sample, computed once and read by every one of
/// the voxel's up-to-6 visible faces (spec §4.5.a, §9 "Large
/// stack-allocated neighbor sets").
pub struct NeighborhoodCache {
    voxel: [Option<Voxel>; 27],
    light: [VertexLight; 27],
}

impl NeighborhoodCache {
    fn build<H: Copy>(
        shape: &impl Shape<H>,
        chunk: &Chunk<H>,
        source: &impl VoxelSource<H>,
        palette: &dyn Palette,
        world_pos: (i32, i32, i32),
    ) -> Self {
        let mut voxel = [None; 27];
        let mut light = [VertexLight::default(); 27];

        for dir in voxel_core::direction::all_directions() {
            let d = dir.vec();
            let wx = world_pos.0 + d.x;
            let wy = world_pos.1 + d.y;
            let wz = world_pos.2 + d.z;
            let sampled = source.get(chunk, wx, wy, wz);
            let idx = dir.code() as usize;
            voxel[idx] = sampled;
            // No meaningful light sample exists inside solid matter either,
            // so an opaque neighbor falls back to the default the same way
            // an absent one does.
            let use_default = sampled.is_none()
                || classify_respecting_feature_opt(palette, sampled).opaque;
            light[idx] = shape.light_or_default(wx, wy, wz, use_default);
        }

        Self { voxel, light }
    }

    pub fn voxel(&self, dir: Direction) -> Option<Voxel> {
        self.voxel[dir.code() as usize]
    }

    pub fn light(&self, dir: Direction) -> VertexLight {
        self.light[dir.code() as usize]
    }
}

/// Per-invocation scratch the mesher needs, kept out of process-wide
/// statics so distinct chunks can be meshed on distinct threads without
/// sharing mutable state (spec §5, §9 "Static mutable scratch"). Reusing
/// one workspace across several `emit` calls on the same thread avoids
/// reallocating the cache for every voxel.
#[derive(Default)]
pub struct MesherWorkspace;

pub struct Mesher;

impl Mesher {
    /// Emits every visible face of `chunk` into `opaque`/`transparent`,
    /// stopping at the first writer error rather than continuing into
    /// undefined arena state (spec §7 "Writer rejection").
    #[tracing::instrument(skip_all, fields(chunk = ?chunk.pos()))]
    pub fn emit<H: Copy, S: Shape<H>, WO: FaceWriter, WT: FaceWriter>(
        shape: &S,
        chunk: &Chunk<H>,
        config: &MesherConfig,
        _workspace: &mut MesherWorkspace,
        opaque: &mut WO,
        transparent: &mut WT,
    ) -> Result<(), MeshingError> {
        let palette = shape.palette();
        let draw_inner_transparent = shape.draw_inner_transparent_faces();

        let (cx, cy, cz) = chunk.pos();
        let world_origin = (
            cx * chunk::WIDTH as i32,
            cy * chunk::HEIGHT as i32,
            cz * chunk::DEPTH as i32,
        );

        let mut emitted = 0usize;

        for (x, y, z) in chunk::voxels() {
            let Some(voxel) = chunk.get(x, y, z) else {
                continue;
            };

            let this = classify_respecting_feature(palette, voxel);
            if !this.solid {
                continue;
            }

            let world_pos = (world_origin.0 + x, world_origin.1 + y, world_origin.2 + z);

            let cache = if let Some(octree) = shape.octree() {
                NeighborhoodCache::build(shape, chunk, &OctreeSource(octree), palette, world_pos)
            } else {
                NeighborhoodCache::build(
                    shape,
                    chunk,
                    &SamplerSource(shape.chunk_lookup()),
                    palette,
                    world_pos,
                )
            };

            for face in FACES {
                let dir = face.direction();
                let neighbor_voxel = cache.voxel(dir);
                let neighbor = classify_respecting_feature_opt(palette, neighbor_voxel);

                if !face_visible(this, voxel, neighbor, neighbor_voxel, draw_inner_transparent) {
                    continue;
                }

                let axial_light = cache.light(dir);
                let (ao_values, vlights) =
                    corner_data(&cache, palette, face, axial_light, config.smoothing);

                let record = FaceRecord {
                    anchor: Vec3::new(x as f32, y as f32, z as f32) + face.anchor_offset(),
                    atlas_index: palette.atlas_index(voxel),
                    face,
                    ao: ao_values,
                    vlight: vlights,
                };

                let writer_result = if this.transparent {
                    transparent.write(record)
                } else {
                    opaque.write(record)
                };
                writer_result.map_err(|_| MeshingError::WriterFull)?;
                emitted += 1;
            }
        }

        opaque.done().map_err(|_| MeshingError::WriterFull)?;
        transparent.done().map_err(|_| MeshingError::WriterFull)?;
        tracing::trace!(emitted, "mesher emitted faces");
        Ok(())
    }
}

/// `palette.classify`, collapsed to opaque-only when the `transparency`
/// feature is off — realizes "both route to a single writer" (spec §6)
/// without threading a second code path through the hot loop.
fn classify_respecting_feature(palette: &dyn Palette, voxel: Voxel) -> Classification {
    classify_respecting_feature_opt(palette, Some(voxel))
}

fn classify_respecting_feature_opt(palette: &dyn Palette, voxel: Option<Voxel>) -> Classification {
    let mut c = palette.classify(voxel);
    if !cfg!(feature = "transparency") && c.transparent {
        c.transparent = false;
        c.opaque = true;
        // Re-derive rather than patch: "only opaque voxels are AO casters"
        // is the default rule this color now falls back under.
        c.ao_caster = true;
    }
    c
}

fn face_visible(
    this: Classification,
    this_voxel: Voxel,
    neighbor: Classification,
    neighbor_voxel: Option<Voxel>,
    draw_inner_transparent_faces: bool,
) -> bool {
    if this.opaque {
        !neighbor.opaque
    } else if this.transparent {
        if !draw_inner_transparent_faces {
            !neighbor.solid
        } else {
            !neighbor.solid || (neighbor.transparent && neighbor_voxel != Some(this_voxel))
        }
    } else {
        false
    }
}

fn corner_data(
    cache: &NeighborhoodCache,
    palette: &dyn Palette,
    face: Face,
    axial_light: VertexLight,
    policy: SmoothingPolicy,
) -> ([u8; 4], [VertexLight; 4]) {
    let mut ao_values = [0u8; 4];
    let mut vlights = [VertexLight::default(); 4];

    for (i, wiring) in ao::corners(face).into_iter().enumerate() {
        let edge1 = classify_respecting_feature_opt(palette, cache.voxel(wiring.edge1));
        let edge2 = classify_respecting_feature_opt(palette, cache.voxel(wiring.edge2));
        let corner = classify_respecting_feature_opt(palette, cache.voxel(wiring.corner));

        ao_values[i] = ao::compute(edge1.ao_caster, edge2.ao_caster, corner.ao_caster);

        vlights[i] = if cfg!(feature = "lighting-smoothing") {
            let ring = [
                light::RingSample {
                    light: cache.light(wiring.corner),
                    is_light_caster: corner.light_caster,
                },
                light::RingSample {
                    light: cache.light(wiring.edge1),
                    is_light_caster: edge1.light_caster,
                },
                light::RingSample {
                    light: cache.light(wiring.edge2),
                    is_light_caster: edge2.light_caster,
                },
            ];
            light::smooth(axial_light, ring, policy)
        } else {
            axial_light
        };
    }

    (ao_values, vlights)
}
