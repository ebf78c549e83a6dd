//! Demo binary that bakes an environment cubemap and writes it to disk.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p cirrus-demo` for the defaults, or e.g.
//! `cargo run -p cirrus-demo -- --face-size 256 --time-of-day 0.5` for a
//! high-resolution noon bake.

use clap::Parser;
use glam::Vec3;
use tracing::{error, info, warn};

use cirrus_atmosphere::{AtmosphereParams, RayMarchedAtmosphere};
use cirrus_config::{CliArgs, Config};
use cirrus_envmap::{
    BakeError, BakeSettings, BlendPreset, SkyDome, bake, export_faces_png, export_target_png,
    sun_direction_from_time, sun_intensity_curve,
};

fn main() {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(Config::default_dir);

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config unavailable ({err}), continuing with defaults");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    cirrus_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    info!("Cirrus environment-lighting baker");
    info!(
        "Bake: {}x{} faces | preset: {} | time of day: {:.2}",
        config.bake.face_size, config.bake.face_size, config.bake.preset,
        config.atmosphere.time_of_day,
    );

    if let Err(err) = run(&config) {
        error!("bake failed: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), BakeError> {
    let preset: BlendPreset = config.bake.preset.parse().unwrap_or_else(|err| {
        warn!("{err}, using the default preset");
        BlendPreset::default()
    });

    let sun_direction = sun_direction_from_time(config.atmosphere.time_of_day);
    let sun_intensity = sun_intensity_curve(sun_direction);
    info!(
        "Sun: direction=({:.2}, {:.2}, {:.2}), ambient intensity={:.2}",
        sun_direction.x, sun_direction.y, sun_direction.z, sun_intensity,
    );

    let mut model = RayMarchedAtmosphere::new(AtmosphereParams::earth(), sun_direction);
    model.samples = config.atmosphere.samples;
    model.light_samples = config.atmosphere.light_samples;

    let dome = gradient_dome();
    let settings = BakeSettings {
        face_size: config.bake.face_size,
        preset,
        sun_intensity,
        threads: config.bake.threads,
    };

    let result = bake(&model, &dome, &settings);
    info!("Mean evaluator fog factor: {:.3}", result.mean_fog);

    export_faces_png(&result.cubemap, &config.bake.output_dir)?;
    export_target_png(&result.target, &config.bake.output_dir.join("preview.png"))?;

    info!("Output written to {}", config.bake.output_dir.display());
    Ok(())
}

/// A simple zenith-to-horizon gradient standing in for the pipeline's
/// precomputed sky-dome texture.
fn gradient_dome() -> SkyDome {
    let zenith = Vec3::new(0.2, 0.4, 0.8);
    let horizon = Vec3::new(0.8, 0.7, 0.6);
    SkyDome::from_fn(256, 128, move |_, v| {
        let elevation = (v * 2.0 - 1.0).max(0.0);
        horizon.lerp(zenith, elevation)
    })
}
