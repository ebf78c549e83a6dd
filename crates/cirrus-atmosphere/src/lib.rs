//! Atmospheric in-scattering: the evaluator contract consumed by the
//! environment-map bake, and a ray-marched single-scattering model behind it.

mod model;
mod params;
mod scatter;

pub use model::{RayMarchedAtmosphere, SKY_ORIGIN_DISTANCE, ScatteringModel, ScatteringSample};
pub use params::AtmosphereParams;
pub use scatter::{ray_sphere_intersect, scatter_along_ray};
