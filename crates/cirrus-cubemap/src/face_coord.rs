//! 2D local coordinates on a cubemap face.

use crate::CubeFace;

/// A 2D coordinate on a cube face. `u` and `v` are in the range \[0, 1\].
///
/// `(u=0, v=0)` is the "bottom-left" corner of the face when viewed from
/// outside the cube looking inward; `(u=1, v=1)` is the "top-right" corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCoord {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    /// Horizontal parameter in \[0, 1\].
    pub u: f32,
    /// Vertical parameter in \[0, 1\].
    pub v: f32,
}

impl FaceCoord {
    /// Construct a `FaceCoord`, clamping `u` and `v` to \[0, 1\].
    #[must_use]
    pub fn new(face: CubeFace, u: f32, v: f32) -> Self {
        Self {
            face,
            u: u.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// The texel-center coordinate for texel `(x, y)` on a face of
    /// `face_size` texels per side.
    #[must_use]
    pub fn texel_center(face: CubeFace, x: u32, y: u32, face_size: u32) -> Self {
        let size = face_size.max(1) as f32;
        Self::new(
            face,
            (x as f32 + 0.5) / size,
            (y as f32 + 0.5) / size,
        )
    }
}
