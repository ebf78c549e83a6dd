//! The bake dispatch: one independent shading invocation per destination
//! texel, committed to the cubemap and the auxiliary preview target.

use std::time::Instant;

use glam::{IVec2, Vec3};
use tracing::{debug, info};

use cirrus_atmosphere::{SKY_ORIGIN_DISTANCE, ScatteringModel};
use cirrus_cubemap::{Cubemap, FaceStripLayout, RenderTarget, TexelAddress, commit};

use crate::{BlendPreset, SkyDome, blend};

/// Settings for one environment-map bake.
#[derive(Clone, Debug)]
pub struct BakeSettings {
    /// Texels per cubemap face side.
    pub face_size: u32,
    /// Above-horizon blending strategy.
    pub preset: BlendPreset,
    /// Ambient sun-intensity scalar supplied by the host pipeline.
    pub sun_intensity: f32,
    /// Worker thread count; 0 selects one per CPU.
    pub threads: usize,
}

impl Default for BakeSettings {
    fn default() -> Self {
        Self {
            face_size: 128,
            preset: BlendPreset::default(),
            sun_intensity: 1.0,
            threads: 0,
        }
    }
}

/// Result of shading a single dispatch fragment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadedFragment {
    /// Clamped texel address the color belongs to.
    pub address: TexelAddress,
    /// Final blended color.
    pub color: Vec3,
    /// The evaluator's fog factor, carried for diagnostics only.
    pub fog_factor: f32,
}

/// A finished bake: the cubemap, the preview target, and aggregate
/// diagnostics.
pub struct EnvmapBake {
    /// The baked environment cubemap.
    pub cubemap: Cubemap,
    /// The auxiliary 2D target holding the same colors in strip layout.
    pub target: RenderTarget,
    /// Mean evaluator fog factor across all invocations.
    pub mean_fog: f32,
}

/// Shade one fragment of the dispatch domain.
///
/// Resolves the view direction, evaluates in-scattered sky light with the
/// far-origin convention (the direction's vertical sign is stripped first —
/// the evaluator is defined for upward geometry only; below-horizon light is
/// synthesized by the blender), samples the sky dome, and blends.
#[must_use]
pub fn shade_fragment(
    model: &dyn ScatteringModel,
    dome: &SkyDome,
    layout: &FaceStripLayout,
    preset: BlendPreset,
    sun_intensity: f32,
    fragment: IVec2,
) -> ShadedFragment {
    let resolved = layout.resolve(fragment);
    let horizon_sign = resolved.direction.z;

    let sky_direction = Vec3::new(
        resolved.direction.x,
        resolved.direction.y,
        resolved.direction.z.abs(),
    );
    let sample = model.evaluate(sky_direction * SKY_ORIGIN_DISTANCE, sky_direction);
    let sky_color = dome.sample(resolved.direction);

    ShadedFragment {
        address: resolved.address,
        color: blend(
            preset,
            horizon_sign,
            sample.inscattered,
            sky_color,
            sun_intensity,
        ),
        fog_factor: sample.fog_factor,
    }
}

/// Bake a full environment cubemap.
///
/// Every texel is shaded independently; rows are partitioned across worker
/// threads. Each invocation owns a disjoint address, so workers never touch
/// the same texel and the result is independent of the thread count.
#[must_use]
pub fn bake(
    model: &(dyn ScatteringModel + Sync),
    dome: &SkyDome,
    settings: &BakeSettings,
) -> EnvmapBake {
    let started = Instant::now();
    let layout = FaceStripLayout::new(settings.face_size);
    let size = layout.face_size() as usize;
    let width = layout.width() as usize;

    let mut cubemap = Cubemap::new(layout.face_size());
    let mut target = RenderTarget::new(layout.width(), layout.height());

    let workers = if settings.threads > 0 {
        settings.threads
    } else {
        num_cpus::get().max(1)
    };
    let rows_per_worker = size.div_ceil(workers);

    let mut total_fog = 0.0_f64;
    for (face_index, face) in cirrus_cubemap::CubeFace::ALL.into_iter().enumerate() {
        let mut row_fog = vec![0.0_f32; size];
        let face_rows = cubemap.face_mut(face).chunks_mut(size);
        let target_rows = target
            .pixels_mut()
            .chunks_mut(width)
            .map(|row| &mut row[face_index * size..(face_index + 1) * size]);

        let mut jobs: Vec<_> = face_rows
            .zip(target_rows)
            .zip(row_fog.iter_mut())
            .enumerate()
            .map(|(y, ((face_row, target_row), fog))| (y, face_row, target_row, fog))
            .collect();

        std::thread::scope(|scope| {
            for batch in jobs.chunks_mut(rows_per_worker) {
                scope.spawn(move || {
                    for (y, face_row, target_row, fog) in batch.iter_mut() {
                        for x in 0..size {
                            let fragment =
                                IVec2::new((face_index * size + x) as i32, *y as i32);
                            let shaded = shade_fragment(
                                model,
                                dome,
                                &layout,
                                settings.preset,
                                settings.sun_intensity,
                                fragment,
                            );
                            commit(&mut face_row[x], &mut target_row[x], shaded.color);
                            **fog += shaded.fog_factor;
                        }
                    }
                });
            }
        });

        total_fog += row_fog.iter().map(|f| *f as f64).sum::<f64>();
    }

    let texel_count = (6 * size * size) as f64;
    let mean_fog = (total_fog / texel_count) as f32;
    info!(
        face_size = layout.face_size(),
        texels = 6 * size * size,
        workers,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "environment bake complete"
    );
    debug!(mean_fog, "evaluator fog aggregate");

    EnvmapBake {
        cubemap,
        target,
        mean_fog,
    }
}
