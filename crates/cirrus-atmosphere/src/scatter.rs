//! Single-scattering ray march through the atmosphere.

use std::f32::consts::PI;

use glam::Vec3;

use crate::AtmosphereParams;

/// Ray-sphere intersection returning `(t_near, t_far)`. Returns `(-1, -1)` on
/// a miss. The ray direction must be normalized.
#[must_use]
pub fn ray_sphere_intersect(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> (f32, f32) {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return (-1.0, -1.0);
    }
    let sqrt_disc = disc.sqrt();
    (-b - sqrt_disc, -b + sqrt_disc)
}

/// Integrate single-scattered sun light along a view ray.
///
/// Marches `samples` steps through the atmosphere with a nested
/// `light_samples`-step march toward the sun at each point. Returns the
/// in-scattered RGB intensity and the accumulated Mie optical depth along the
/// view ray (the raw material for the fog factor).
///
/// The planet is centered at the world origin. Rays that miss the atmosphere
/// contribute nothing; rays that hit the surface stop there.
#[must_use]
pub fn scatter_along_ray(
    origin: Vec3,
    dir: Vec3,
    sun_dir: Vec3,
    params: &AtmosphereParams,
    samples: u32,
    light_samples: u32,
) -> (Vec3, f32) {
    let planet_center = Vec3::ZERO;
    let samples = samples.max(1);
    let light_samples = light_samples.max(1);

    let (t_near, t_far) =
        ray_sphere_intersect(origin, dir, planet_center, params.atmosphere_radius);
    if t_far < 0.0 || t_near > t_far {
        return (Vec3::ZERO, 0.0);
    }

    let (planet_near, _) =
        ray_sphere_intersect(origin, dir, planet_center, params.planet_radius);

    let t_start = t_near.max(0.0);
    let t_end = if planet_near > 0.0 {
        t_far.min(planet_near)
    } else {
        t_far
    };
    if t_end <= t_start {
        return (Vec3::ZERO, 0.0);
    }

    let step_size = (t_end - t_start) / samples as f32;
    let cos_angle = dir.dot(sun_dir);
    let phase_r = rayleigh_phase(cos_angle);
    let phase_m = mie_phase(cos_angle, params.mie_direction);

    let rc = Vec3::from(params.rayleigh_coefficients);
    let mut total_rayleigh = Vec3::ZERO;
    let mut total_mie = Vec3::ZERO;
    let mut optical_depth_r = 0.0_f32;
    let mut optical_depth_m = 0.0_f32;

    for i in 0..samples {
        let t = t_start + (i as f32 + 0.5) * step_size;
        let sample_pos = origin + dir * t;
        let height = (sample_pos - planet_center).length() - params.planet_radius;

        let density_r = (-height / params.rayleigh_scale_height).exp() * step_size;
        let density_m = (-height / params.mie_scale_height).exp() * step_size;

        optical_depth_r += density_r;
        optical_depth_m += density_m;

        // Secondary march from the sample point toward the sun.
        let (_, light_far) =
            ray_sphere_intersect(sample_pos, sun_dir, planet_center, params.atmosphere_radius);
        let light_step = light_far.max(0.0) / light_samples as f32;
        let mut light_depth_r = 0.0_f32;
        let mut light_depth_m = 0.0_f32;

        for j in 0..light_samples {
            let lt = (j as f32 + 0.5) * light_step;
            let light_pos = sample_pos + sun_dir * lt;
            let light_height = (light_pos - planet_center).length() - params.planet_radius;
            light_depth_r += (-light_height / params.rayleigh_scale_height).exp() * light_step;
            light_depth_m += (-light_height / params.mie_scale_height).exp() * light_step;
        }

        let tau = rc * (optical_depth_r + light_depth_r)
            + Vec3::splat(params.mie_coefficient) * (optical_depth_m + light_depth_m);
        let attenuation = (-tau).exp();

        total_rayleigh += density_r * attenuation;
        total_mie += density_m * attenuation;
    }

    let inscattered = params.sun_intensity
        * (phase_r * rc * total_rayleigh + phase_m * params.mie_coefficient * total_mie);

    (inscattered, optical_depth_m * params.mie_coefficient)
}

fn rayleigh_phase(cos_angle: f32) -> f32 {
    3.0 / (16.0 * PI) * (1.0 + cos_angle * cos_angle)
}

fn mie_phase(cos_angle: f32, g: f32) -> f32 {
    let g2 = g * g;
    let num = 3.0 * (1.0 - g2) * (1.0 + cos_angle * cos_angle);
    let denom = 8.0 * PI * (2.0 + g2) * (1.0 + g2 - 2.0 * g * cos_angle).powf(1.5);
    num / denom
}
