//! Command-line argument parsing for the Cirrus baker.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Cirrus command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "cirrus", about = "Cirrus environment-lighting baker")]
pub struct CliArgs {
    /// Cubemap face size in texels.
    #[arg(long)]
    pub face_size: Option<u32>,

    /// Above-horizon blend preset (scattering, dome-mix, tonemapped).
    #[arg(long)]
    pub preset: Option<String>,

    /// Normalized time of day in [0, 1). 0.5 is noon.
    #[arg(long)]
    pub time_of_day: Option<f32>,

    /// Output directory for baked faces and the preview target.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Worker thread count (0 = one per CPU).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(size) = args.face_size {
            self.bake.face_size = size;
        }
        if let Some(ref preset) = args.preset {
            self.bake.preset = preset.clone();
        }
        if let Some(time) = args.time_of_day {
            self.atmosphere.time_of_day = time;
        }
        if let Some(ref output) = args.output {
            self.bake.output_dir = output.clone();
        }
        if let Some(threads) = args.threads {
            self.bake.threads = threads;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_replace_config_values() {
        let args = CliArgs::parse_from([
            "cirrus",
            "--face-size",
            "256",
            "--preset",
            "dome-mix",
            "--time-of-day",
            "0.5",
            "--threads",
            "2",
            "--log-level",
            "debug",
        ]);

        let mut config = Config::default();
        config.apply_cli_overrides(&args);

        assert_eq!(config.bake.face_size, 256);
        assert_eq!(config.bake.preset, "dome-mix");
        assert_eq!(config.atmosphere.time_of_day, 0.5);
        assert_eq!(config.bake.threads, 2);
        assert_eq!(config.debug.log_level, "debug");
    }

    #[test]
    fn test_absent_flags_leave_config_untouched() {
        let args = CliArgs::parse_from(["cirrus"]);
        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_output_override() {
        let args = CliArgs::parse_from(["cirrus", "--output", "/tmp/sky"]);
        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config.bake.output_dir, PathBuf::from("/tmp/sky"));
    }
}
