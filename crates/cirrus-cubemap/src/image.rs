//! Cubemap and render-target storage, plus the dual write-out sink.

use glam::Vec3;

use crate::{CubeFace, TexelAddress};

/// Write a final color to a cubemap texel and the auxiliary target texel.
///
/// Both destinations receive bit-identical RGB with alpha fixed to 1.0. The
/// store is direct: no blending, no filtering, no validation of the color.
pub fn commit(cubemap_texel: &mut [f32; 4], target_texel: &mut [f32; 4], rgb: Vec3) {
    let rgba = [rgb.x, rgb.y, rgb.z, 1.0];
    *cubemap_texel = rgba;
    *target_texel = rgba;
}

/// An environment cubemap: six square faces stored as RGBA f32.
pub struct Cubemap {
    face_size: u32,
    /// Six faces, each `face_size * face_size` texels, row-major.
    faces: [Vec<[f32; 4]>; 6],
}

impl Cubemap {
    /// Create a cubemap with all texels opaque black.
    /// A zero size is treated as one texel.
    #[must_use]
    pub fn new(face_size: u32) -> Self {
        let face_size = face_size.max(1);
        let texel_count = (face_size * face_size) as usize;
        Self {
            face_size,
            faces: std::array::from_fn(|_| vec![[0.0, 0.0, 0.0, 1.0]; texel_count]),
        }
    }

    /// Texels per face side.
    #[must_use]
    pub fn face_size(&self) -> u32 {
        self.face_size
    }

    /// Store `(rgb, 1.0)` at the given address. Addresses out of range for
    /// this cubemap clamp onto the edge texel.
    pub fn store(&mut self, address: TexelAddress, rgb: Vec3) {
        let idx = self.texel_index(address);
        self.faces[address.face.index()][idx] = [rgb.x, rgb.y, rgb.z, 1.0];
    }

    /// Read the texel at the given address.
    #[must_use]
    pub fn texel(&self, address: TexelAddress) -> [f32; 4] {
        let idx = self.texel_index(address);
        self.faces[address.face.index()][idx]
    }

    /// All texels of one face, row-major.
    #[must_use]
    pub fn face(&self, face: CubeFace) -> &[[f32; 4]] {
        &self.faces[face.index()]
    }

    /// Mutable access to one face's texels, row-major. Used by the bake
    /// dispatch to hand disjoint rows to worker threads.
    pub fn face_mut(&mut self, face: CubeFace) -> &mut [[f32; 4]] {
        &mut self.faces[face.index()]
    }

    /// Convert all faces to RGBA8 bytes, one byte vector per face.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<Vec<u8>> {
        self.faces.iter().map(|face| texels_to_rgba8(face)).collect()
    }

    fn texel_index(&self, address: TexelAddress) -> usize {
        let x = address.x.min(self.face_size - 1);
        let y = address.y.min(self.face_size - 1);
        (y * self.face_size + x) as usize
    }
}

/// The auxiliary 2D render target the bake also rasterizes into.
pub struct RenderTarget {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl RenderTarget {
    /// Create a target with all pixels opaque black.
    /// Zero dimensions are treated as one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![[0.0, 0.0, 0.0, 1.0]; (width * height) as usize],
        }
    }

    /// Target width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Target height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Store `(rgb, 1.0)` at `(x, y)`, clamping out-of-range coordinates onto
    /// the edge pixel.
    pub fn put(&mut self, x: u32, y: u32, rgb: Vec3) {
        let idx = self.pixel_index(x, y);
        self.pixels[idx] = [rgb.x, rgb.y, rgb.z, 1.0];
    }

    /// Read the pixel at `(x, y)`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        self.pixels[self.pixel_index(x, y)]
    }

    /// Mutable access to all pixels, row-major.
    pub fn pixels_mut(&mut self) -> &mut [[f32; 4]] {
        &mut self.pixels
    }

    /// Convert the target to RGBA8 bytes.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        texels_to_rgba8(&self.pixels)
    }

    fn pixel_index(&self, x: u32, y: u32) -> usize {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        (y * self.width + x) as usize
    }
}

fn texels_to_rgba8(texels: &[[f32; 4]]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(texels.len() * 4);
    for texel in texels {
        for channel in texel {
            bytes.push((channel.clamp(0.0, 1.0) * 255.0) as u8);
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_writes_identical_rgb_to_both_destinations() {
        let mut cubemap_texel = [0.0; 4];
        let mut target_texel = [0.0; 4];
        commit(
            &mut cubemap_texel,
            &mut target_texel,
            Vec3::new(0.3, 0.7, 1.9),
        );
        assert_eq!(
            cubemap_texel, target_texel,
            "Cubemap and target must receive bit-identical values"
        );
        assert_eq!(cubemap_texel, [0.3, 0.7, 1.9, 1.0]);
    }

    #[test]
    fn test_commit_does_not_sanitize_evaluator_defects() {
        // Negative or NaN evaluator output propagates visually, never as a
        // structured failure.
        let mut cubemap_texel = [0.0; 4];
        let mut target_texel = [0.0; 4];
        commit(
            &mut cubemap_texel,
            &mut target_texel,
            Vec3::new(-1.0, f32::NAN, 0.5),
        );
        assert_eq!(cubemap_texel[0], -1.0);
        assert!(cubemap_texel[1].is_nan());
        assert!(target_texel[1].is_nan());
    }

    #[test]
    fn test_store_fixes_alpha_to_one() {
        let mut cubemap = Cubemap::new(4);
        let address = TexelAddress::clamped(CubeFace::PosY, 2, 3, 4);
        cubemap.store(address, Vec3::new(5.0, 0.25, 0.0));
        assert_eq!(cubemap.texel(address), [5.0, 0.25, 0.0, 1.0]);
    }

    #[test]
    fn test_new_cubemap_is_opaque_black() {
        let cubemap = Cubemap::new(2);
        for face in CubeFace::ALL {
            for texel in cubemap.face(face) {
                assert_eq!(*texel, [0.0, 0.0, 0.0, 1.0]);
            }
        }
    }

    #[test]
    fn test_faces_are_independent_storage() {
        let mut cubemap = Cubemap::new(2);
        cubemap.store(
            TexelAddress::clamped(CubeFace::PosX, 0, 0, 2),
            Vec3::splat(1.0),
        );
        for face in CubeFace::ALL {
            if face != CubeFace::PosX {
                assert_eq!(
                    cubemap.face(face)[0],
                    [0.0, 0.0, 0.0, 1.0],
                    "Write to PosX leaked into {face:?}"
                );
            }
        }
    }

    #[test]
    fn test_to_rgba8_clamps_hdr_values() {
        let mut cubemap = Cubemap::new(1);
        cubemap.store(
            TexelAddress::clamped(CubeFace::PosZ, 0, 0, 1),
            Vec3::new(4.0, -2.0, 0.5),
        );
        let bytes = cubemap.to_rgba8();
        assert_eq!(bytes.len(), 6);
        assert_eq!(bytes[CubeFace::PosZ.index()], vec![255, 0, 127, 255]);
    }

    #[test]
    fn test_render_target_put_and_read_back() {
        let mut target = RenderTarget::new(6, 2);
        target.put(5, 1, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(target.pixel(5, 1), [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn test_render_target_clamps_out_of_range_writes() {
        let mut target = RenderTarget::new(3, 3);
        target.put(99, 99, Vec3::ONE);
        assert_eq!(target.pixel(2, 2), [1.0, 1.0, 1.0, 1.0]);
    }
}
