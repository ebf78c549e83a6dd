//! Sun placement and intensity for the bake's uniform state.
//!
//! The host pipeline supplies an ambient sun-intensity scalar to the blender;
//! these helpers derive it from a normalized time-of-day value in `[0.0, 1.0)`
//! where 0.0 is midnight, 0.25 dawn, 0.5 noon, and 0.75 dusk. Z is up.

use glam::Vec3;

/// Compute the sun's direction from the time of day.
///
/// The sun orbits in the XZ plane. At `time_of_day = 0.5` (noon) it is at the
/// zenith (+Z); at `0.0` (midnight) it is at the nadir (−Z).
#[must_use]
pub fn sun_direction_from_time(time_of_day: f32) -> Vec3 {
    let angle = time_of_day * std::f32::consts::TAU;
    Vec3::new(angle.sin(), 0.0, -angle.cos()).normalize()
}

/// Compute the ambient sun intensity from the sun's elevation.
///
/// Returns a value in `[0.0, 1.0]`:
/// - 1.0 with the sun well above the horizon (elevation > 15°)
/// - 0.0 with the sun well below the horizon (elevation < −10°)
/// - a smooth transition through dawn and dusk
#[must_use]
pub fn sun_intensity_curve(sun_direction: Vec3) -> f32 {
    let sin_elevation = sun_direction.z;
    let low = (-10.0_f32).to_radians().sin();
    let high = (15.0_f32).to_radians().sin();
    smoothstep(low, high, sin_elevation)
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noon_sun_is_at_zenith() {
        let dir = sun_direction_from_time(0.5);
        assert!(
            (dir - Vec3::Z).length() < 1e-5,
            "Noon sun should point straight up, got {dir:?}"
        );
    }

    #[test]
    fn test_midnight_sun_is_at_nadir() {
        let dir = sun_direction_from_time(0.0);
        assert!(
            (dir - Vec3::NEG_Z).length() < 1e-5,
            "Midnight sun should point straight down, got {dir:?}"
        );
    }

    #[test]
    fn test_sun_directions_are_unit_length() {
        for step in 0..24 {
            let dir = sun_direction_from_time(step as f32 / 24.0);
            assert!(
                (dir.length() - 1.0).abs() < 1e-5,
                "Sun direction at step {step} is not unit length"
            );
        }
    }

    #[test]
    fn test_intensity_full_at_noon_zero_at_midnight() {
        assert_eq!(sun_intensity_curve(sun_direction_from_time(0.5)), 1.0);
        assert_eq!(sun_intensity_curve(sun_direction_from_time(0.0)), 0.0);
    }

    #[test]
    fn test_intensity_transitions_smoothly_through_dawn() {
        let mut previous = sun_intensity_curve(sun_direction_from_time(0.15));
        for step in 1..=20 {
            let t = 0.15 + 0.2 * step as f32 / 20.0;
            let intensity = sun_intensity_curve(sun_direction_from_time(t));
            assert!(
                intensity >= previous,
                "Intensity must not decrease while the sun rises (t = {t})"
            );
            assert!((0.0..=1.0).contains(&intensity));
            previous = intensity;
        }
        assert_eq!(previous, 1.0, "Sun should reach full intensity before noon");
    }
}
