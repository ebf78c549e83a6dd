//! Physical parameters of the scattering medium.

/// Parameters defining the atmosphere the sky light scatters through.
///
/// The planet is centered at the world origin; heights are measured from its
/// surface. Z is up.
#[derive(Clone, Debug, PartialEq)]
pub struct AtmosphereParams {
    /// Planet surface radius in meters.
    pub planet_radius: f32,
    /// Outer radius of the atmosphere in meters.
    pub atmosphere_radius: f32,
    /// Rayleigh scattering coefficients at sea level (per-wavelength, RGB).
    pub rayleigh_coefficients: [f32; 3],
    /// Rayleigh scale height in meters.
    pub rayleigh_scale_height: f32,
    /// Mie scattering coefficient at sea level (scalar).
    pub mie_coefficient: f32,
    /// Mie scale height in meters.
    pub mie_scale_height: f32,
    /// Henyey-Greenstein anisotropy parameter for the Mie phase function.
    pub mie_direction: f32,
    /// Sun intensity multiplier applied to the integrated result.
    pub sun_intensity: f32,
    /// Height of the canonical observer above the surface, in meters.
    /// Sky-only rays (see the far-origin convention) march from here.
    pub observer_height: f32,
}

impl AtmosphereParams {
    /// Earth-like defaults.
    #[must_use]
    pub fn earth() -> Self {
        Self {
            planet_radius: 6_371_000.0,
            atmosphere_radius: 6_371_000.0 * 1.025,
            rayleigh_coefficients: [5.5e-6, 13.0e-6, 22.4e-6],
            rayleigh_scale_height: 8500.0,
            mie_coefficient: 21e-6,
            mie_scale_height: 1200.0,
            mie_direction: 0.758,
            sun_intensity: 22.0,
            observer_height: 1.7,
        }
    }
}

impl Default for AtmosphereParams {
    fn default() -> Self {
        Self::earth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_atmosphere_encloses_planet() {
        let params = AtmosphereParams::earth();
        assert!(params.atmosphere_radius > params.planet_radius);
    }

    #[test]
    fn test_earth_rayleigh_favors_blue() {
        let [r, _, b] = AtmosphereParams::earth().rayleigh_coefficients;
        assert!(b > r, "Blue must scatter more strongly than red");
    }

    #[test]
    fn test_default_is_earth() {
        assert_eq!(AtmosphereParams::default(), AtmosphereParams::earth());
    }
}
