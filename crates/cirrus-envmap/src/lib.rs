//! Environment-map baking: per-texel scattering evaluation, horizon blending
//! with a sky-dome sample and a stylized below-horizon tint, and write-out to
//! a cubemap plus an auxiliary preview target.

mod bake;
mod blend;
mod export;
mod skydome;
mod sun;

pub use bake::{BakeSettings, EnvmapBake, ShadedFragment, bake, shade_fragment};
pub use blend::{BlendPreset, blend, ground_tint, saturate};
pub use export::{BakeError, export_faces_png, export_target_png};
pub use skydome::{SkyDome, direction_to_dome_uv};
pub use sun::{sun_direction_from_time, sun_intensity_curve};
