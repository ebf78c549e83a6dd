//! Precomputed sky-dome texture and its direction-based sampling.

use glam::{Vec2, Vec3};

/// Map a view direction to sky-dome UV coordinates in \[0, 1\].
///
/// `u` is the azimuth around the Z axis; `v` is the vertical component
/// remapped from \[-1, 1\]. A degenerate (zero) direction maps to the center.
#[must_use]
pub fn direction_to_dome_uv(direction: Vec3) -> Vec2 {
    if direction == Vec3::ZERO {
        return Vec2::splat(0.5);
    }
    let azimuth = direction.y.atan2(direction.x);
    let elevation = (direction.z / direction.length()).clamp(-1.0, 1.0);
    Vec2::new(
        azimuth / std::f32::consts::TAU + 0.5,
        elevation * 0.5 + 0.5,
    )
}

/// A precomputed 2D sky texture sampled by direction.
///
/// Generation of the dome belongs to the surrounding pipeline; this type only
/// holds the texels and samples them at mip level 0 (nearest texel, border
/// clamp).
pub struct SkyDome {
    width: u32,
    height: u32,
    texels: Vec<Vec3>,
}

impl SkyDome {
    /// Build a dome by evaluating `f(u, v)` at every texel center.
    /// Zero dimensions are treated as one texel.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(f32, f32) -> Vec3) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut texels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let u = (x as f32 + 0.5) / width as f32;
                let v = (y as f32 + 0.5) / height as f32;
                texels.push(f(u, v));
            }
        }
        Self {
            width,
            height,
            texels,
        }
    }

    /// A single-color dome, mainly for tests and fallbacks.
    #[must_use]
    pub fn solid(color: Vec3) -> Self {
        Self::from_fn(1, 1, |_, _| color)
    }

    /// Texture width in texels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in texels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample the dome color for a view direction (mip 0 only).
    #[must_use]
    pub fn sample(&self, direction: Vec3) -> Vec3 {
        let uv = direction_to_dome_uv(direction);
        let x = ((uv.x * self.width as f32) as i64).clamp(0, self.width as i64 - 1);
        let y = ((uv.y * self.height as f32) as i64).clamp(0, self.height as i64 - 1);
        self.texels[(y * self.width as i64 + x) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dome_uv_stays_in_unit_square() {
        let directions = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
            Vec3::new(0.3, -0.8, 0.5).normalize(),
            Vec3::new(-0.6, 0.6, -0.5).normalize(),
        ];
        for dir in directions {
            let uv = direction_to_dome_uv(dir);
            assert!(
                (0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y),
                "UV {uv:?} for {dir:?} escaped the unit square"
            );
        }
    }

    #[test]
    fn test_zenith_and_nadir_map_to_vertical_extremes() {
        assert_eq!(direction_to_dome_uv(Vec3::Z).y, 1.0);
        assert_eq!(direction_to_dome_uv(Vec3::NEG_Z).y, 0.0);
    }

    #[test]
    fn test_degenerate_direction_maps_to_center() {
        assert_eq!(direction_to_dome_uv(Vec3::ZERO), Vec2::splat(0.5));
    }

    #[test]
    fn test_sample_returns_stored_texel() {
        // Top row bright, bottom row dark: the zenith must read back bright.
        let dome = SkyDome::from_fn(4, 4, |_, v| {
            if v > 0.5 {
                Vec3::splat(1.0)
            } else {
                Vec3::splat(0.1)
            }
        });
        assert_eq!(dome.sample(Vec3::Z), Vec3::splat(1.0));
        assert_eq!(dome.sample(Vec3::NEG_Z), Vec3::splat(0.1));
    }

    #[test]
    fn test_sample_clamps_to_texture_border() {
        let dome = SkyDome::from_fn(2, 2, |u, v| Vec3::new(u, v, 0.0));
        // Zenith maps to v = 1.0, exactly on the border; the sample must land
        // on the last row rather than read out of bounds.
        let texel = dome.sample(Vec3::Z);
        assert_eq!(texel.y, 0.75);
    }

    #[test]
    fn test_solid_dome_is_direction_invariant() {
        let dome = SkyDome::solid(Vec3::new(0.2, 0.4, 0.8));
        let a = dome.sample(Vec3::X);
        let b = dome.sample(Vec3::new(-0.3, 0.9, -0.3).normalize());
        assert_eq!(a, b);
    }

    #[test]
    fn test_unnormalized_directions_sample_like_normalized() {
        let dome = SkyDome::from_fn(8, 8, |u, v| Vec3::new(u, v, 0.0));
        let dir = Vec3::new(0.2, 0.5, 0.7);
        assert_eq!(dome.sample(dir), dome.sample(dir.normalize()));
    }
}
