//! Horizon blending: combine raw in-scattered light with the sky-dome sample
//! and a stylized below-horizon ground tint.

use glam::Vec3;
use std::str::FromStr;

/// Clamp a scalar to \[0, 1\].
#[inline]
#[must_use]
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// How far below the horizon the sky attenuation reaches zero: at
/// `horizon_sign = -1/0.9` the falloff `1 + 0.9 * horizon_sign` bottoms out.
const BELOW_HORIZON_FALLOFF: f32 = 0.9;
/// Residual scale on attenuated below-horizon sky light.
const BELOW_HORIZON_SCALE: f32 = 0.2;
/// Elevation offset widening the tint band so it already glows slightly at
/// the horizon line.
const TINT_BAND_OFFSET: f32 = 0.2;
/// Combined fixed scale on the tint term (before sun intensity).
const TINT_SCALE: f32 = 0.2 * 0.1;

/// The warm bounced-ground color added below the horizon:
/// `(102, 82, 50) / 255`, gamma-adjusted by exponent `1/1.2`.
#[must_use]
pub fn ground_tint() -> Vec3 {
    (Vec3::new(102.0, 82.0, 50.0) / 255.0).powf(1.0 / 1.2)
}

/// Selects how light from above the horizon is combined.
///
/// `Scattering` is the shipping behavior; the other presets preserve earlier
/// tuning explorations as switchable strategies. Below-horizon handling is
/// identical across presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BlendPreset {
    /// Raw in-scattered light, passed through unmodified.
    #[default]
    Scattering,
    /// Average of in-scattered light and the sun-weighted sky-dome sample.
    DomeMix,
    /// Exponent-curve tone mapping applied to the in-scattered light.
    Tonemapped,
}

impl FromStr for BlendPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scattering" => Ok(BlendPreset::Scattering),
            "dome-mix" => Ok(BlendPreset::DomeMix),
            "tonemapped" => Ok(BlendPreset::Tonemapped),
            other => Err(format!(
                "unknown blend preset '{other}' (expected scattering, dome-mix, or tonemapped)"
            )),
        }
    }
}

/// Combine the raw scattering result into the final texel color.
///
/// `horizon_sign` is the un-absoluted vertical component of the view
/// direction:
/// - `> 0` (above horizon): combined per `preset`; the default preset passes
///   `inscattered` through unmodified.
/// - `< 0` (below horizon): the sky light is attenuated by
///   `saturate(1 + 0.9 * horizon_sign) * 0.2` and a warm ground tint is added,
///   scaled by `saturate(-horizon_sign + 0.2) * 0.2 * sun_intensity * 0.1`.
/// - `== 0` (exactly on the horizon): pass-through, the continuous limit of
///   both branches.
#[must_use]
pub fn blend(
    preset: BlendPreset,
    horizon_sign: f32,
    inscattered: Vec3,
    sky_color: Vec3,
    sun_intensity: f32,
) -> Vec3 {
    if horizon_sign > 0.0 {
        match preset {
            BlendPreset::Scattering => inscattered,
            BlendPreset::DomeMix => (inscattered + sky_color * sun_intensity) * 0.5,
            BlendPreset::Tonemapped => Vec3::ONE - (-inscattered * 1.2).exp(),
        }
    } else if horizon_sign < 0.0 {
        let attenuation =
            saturate(1.0 + BELOW_HORIZON_FALLOFF * horizon_sign) * BELOW_HORIZON_SCALE;
        let tint_scale = saturate(-horizon_sign + TINT_BAND_OFFSET) * TINT_SCALE * sun_intensity;
        inscattered * attenuation + ground_tint() * tint_scale
    } else {
        inscattered
    }
}
