//! Cubemap geometry and storage: face/texel addressing, texel-to-direction
//! resolution, and the dual write-out sink for environment-map baking.

mod face;
mod face_coord;
mod image;
mod resolver;

pub use face::CubeFace;
pub use face_coord::FaceCoord;
pub use image::{Cubemap, RenderTarget, commit};
pub use resolver::{
    FaceStripLayout, ResolvedTexel, TexelAddress, direction_to_face, direction_to_face_uv,
    texel_direction,
};
