//! Texel-to-direction resolution for the cubemap bake dispatch.
//!
//! All six faces are rasterized into one 2D domain laid out as a horizontal
//! strip (`6 * face_size` wide, `face_size` tall). The resolver maps a
//! fragment coordinate in that domain to a clamped texel address and the
//! unit-length world direction through the texel center. Out-of-range input
//! clamps onto the nearest edge texel; there is no error path.

use glam::{IVec2, Vec3};

use crate::{CubeFace, FaceCoord};

/// Integer address of one cubemap texel.
///
/// Invariant: `x` and `y` are within `[0, face_size)` for the cubemap the
/// address was resolved against. Clamping happens at construction, before any
/// write, never after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TexelAddress {
    /// The face this texel belongs to.
    pub face: CubeFace,
    /// Column within the face.
    pub x: u32,
    /// Row within the face.
    pub y: u32,
}

impl TexelAddress {
    /// Construct an address, clamping each axis into `[0, face_size)`.
    #[must_use]
    pub fn clamped(face: CubeFace, x: i32, y: i32, face_size: u32) -> Self {
        let max = face_size.max(1) as i32 - 1;
        Self {
            face,
            x: x.clamp(0, max) as u32,
            y: y.clamp(0, max) as u32,
        }
    }
}

/// A resolved dispatch fragment: the view direction through the texel center
/// and the in-range address the result will be stored at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTexel {
    /// Unit-length world-space view direction. `z > 0` is above the horizon.
    pub direction: Vec3,
    /// Clamped integer texel address for the image write.
    pub address: TexelAddress,
}

/// The 2D render-target domain used to rasterize all six cubemap faces,
/// laid out as a horizontal strip in canonical face order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceStripLayout {
    face_size: u32,
}

impl FaceStripLayout {
    /// Create a layout for faces of `face_size` texels per side.
    /// A zero size is treated as one texel.
    #[must_use]
    pub fn new(face_size: u32) -> Self {
        Self {
            face_size: face_size.max(1),
        }
    }

    /// Texels per face side.
    #[must_use]
    pub fn face_size(&self) -> u32 {
        self.face_size
    }

    /// Width of the strip domain in texels (six faces side by side).
    #[must_use]
    pub fn width(&self) -> u32 {
        self.face_size * 6
    }

    /// Height of the strip domain in texels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.face_size
    }

    /// Resolve a fragment coordinate to its view direction and texel address.
    ///
    /// The fragment's column selects the face; the remainder is the texel
    /// within that face. Coordinates outside the domain clamp onto the edge
    /// texel of the nearest face, so every input yields a valid address and
    /// distinct in-range fragments yield distinct addresses.
    #[must_use]
    pub fn resolve(&self, fragment: IVec2) -> ResolvedTexel {
        let size = self.face_size as i32;
        let fx = fragment.x.clamp(0, size * 6 - 1);
        let fy = fragment.y.clamp(0, size - 1);

        let face = CubeFace::ALL[(fx / size) as usize];
        let address = TexelAddress::clamped(face, fx % size, fy, self.face_size);

        ResolvedTexel {
            direction: texel_direction(face, address.x, address.y, self.face_size),
            address,
        }
    }
}

/// The unit-length world direction through the center of texel `(x, y)` on
/// `face`.
#[must_use]
pub fn texel_direction(face: CubeFace, x: u32, y: u32, face_size: u32) -> Vec3 {
    let fc = FaceCoord::texel_center(face, x, y, face_size);
    let s = 2.0 * fc.u - 1.0;
    let t = 2.0 * fc.v - 1.0;
    (face.normal() + s * face.tangent() + t * face.bitangent()).normalize()
}

/// Determine which cube face a direction vector belongs to.
///
/// The face is chosen by the axis with the largest absolute component.
/// Ties break with a fixed priority: X > Y > Z, positive > negative.
/// A zero vector maps to [`CubeFace::PosX`].
#[must_use]
pub fn direction_to_face(dir: Vec3) -> CubeFace {
    let ax = dir.x.abs();
    let ay = dir.y.abs();
    let az = dir.z.abs();

    if ax >= ay && ax >= az {
        if dir.x >= 0.0 {
            CubeFace::PosX
        } else {
            CubeFace::NegX
        }
    } else if ay >= az {
        if dir.y >= 0.0 {
            CubeFace::PosY
        } else {
            CubeFace::NegY
        }
    } else if dir.z >= 0.0 {
        CubeFace::PosZ
    } else {
        CubeFace::NegZ
    }
}

/// Convert a direction vector to a [`FaceCoord`] by central projection onto
/// the owning face. The direction does not need to be unit length.
#[must_use]
pub fn direction_to_face_uv(dir: Vec3) -> FaceCoord {
    let face = direction_to_face(dir);
    let d = dir.dot(face.normal());
    // Degenerate direction lying in the face plane.
    if d.abs() < 1e-20 {
        return FaceCoord::new(face, 0.5, 0.5);
    }
    let projected = dir / d;

    let s = projected.dot(face.tangent());
    let t = projected.dot(face.bitangent());

    FaceCoord::new(face, (s + 1.0) * 0.5, (t + 1.0) * 0.5)
}
