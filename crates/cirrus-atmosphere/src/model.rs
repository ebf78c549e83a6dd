//! The scattering-evaluator contract and its ray-marched implementation.

use glam::Vec3;

use crate::{AtmosphereParams, scatter_along_ray};

/// Origin magnitude that marks a sky-only ray.
///
/// The bake evaluates sky light with `origin = direction * SKY_ORIGIN_DISTANCE`:
/// a point effectively at infinity along the view ray, meaning "no nearby
/// occluder, treat the ray as starting at the atmosphere's outer edge".
/// Implementations must honor that meaning, not just the magnitude — any
/// origin outside the atmosphere is a sky-only ray.
pub const SKY_ORIGIN_DISTANCE: f32 = 1e10;

/// Result of one scattering evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatteringSample {
    /// Integrated in-scattered light along the ray. Non-negative, unbounded.
    pub inscattered: Vec3,
    /// Haze factor in \[0, 1\]. Computed for interface stability; the
    /// environment bake does not consume it.
    pub fog_factor: f32,
}

/// Integrated in-scattered light as a pure function of ray origin and
/// direction.
///
/// No side effects and no failure mode: implementations always return a
/// sample, and callers do not validate it (a defective model propagates
/// visually, not as an error).
pub trait ScatteringModel {
    /// Evaluate in-scattered light along the ray `origin + t * direction`.
    fn evaluate(&self, origin: Vec3, direction: Vec3) -> ScatteringSample;
}

/// Ray-marched single-scattering atmosphere.
#[derive(Clone, Debug)]
pub struct RayMarchedAtmosphere {
    /// Medium parameters.
    pub params: AtmosphereParams,
    /// Normalized direction toward the sun.
    pub sun_direction: Vec3,
    /// Primary march steps per ray.
    pub samples: u32,
    /// Secondary march steps toward the sun per primary sample.
    pub light_samples: u32,
}

impl RayMarchedAtmosphere {
    /// Create a model with default march resolution (16 primary, 8 light
    /// steps — the coarsest setting without visible banding).
    #[must_use]
    pub fn new(params: AtmosphereParams, sun_direction: Vec3) -> Self {
        Self {
            params,
            sun_direction: sun_direction.normalize_or(Vec3::Z),
            samples: 16,
            light_samples: 8,
        }
    }

    /// The canonical observer: on the planet surface at the configured
    /// observer height, at the zenith point.
    #[must_use]
    pub fn observer_position(&self) -> Vec3 {
        Vec3::new(
            0.0,
            0.0,
            self.params.planet_radius + self.params.observer_height,
        )
    }
}

impl ScatteringModel for RayMarchedAtmosphere {
    fn evaluate(&self, origin: Vec3, direction: Vec3) -> ScatteringSample {
        // Far-origin convention: an origin outside the atmosphere marks a
        // sky-only ray, which marches from the canonical observer instead.
        let origin = if origin.length() > self.params.atmosphere_radius {
            self.observer_position()
        } else {
            origin
        };

        let (inscattered, mie_depth) = scatter_along_ray(
            origin,
            direction,
            self.sun_direction,
            &self.params,
            self.samples,
            self.light_samples,
        );

        ScatteringSample {
            inscattered,
            fog_factor: (1.0 - (-mie_depth).exp()).clamp(0.0, 1.0),
        }
    }
}
