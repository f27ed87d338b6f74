//! Application configuration for the isoterra renderer.
//!
//! Settings persist to disk as RON with full defaults, so a missing or
//! partial file always yields a usable configuration. CLI flags override
//! file values. The typed render parameters are derived once per render
//! via [`Config::render_parameters`].

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, GenerationConfig, LightConfig, OutputConfig, RenderConfig,
};
pub use error::ConfigError;
