//! Configuration for the Cirrus environment-lighting baker.
//!
//! Settings persist to disk as RON files with forward/backward compatible
//! serialization, and can be overridden per run via clap CLI flags.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{AtmosphereConfig, BakeConfig, Config, DebugConfig};
pub use error::ConfigError;
