//! Library half of the `devsel` binary: configuration, input parsing and
//! output rendering, split out so they can be tested without spawning a
//! process.

pub mod config;
pub mod exit;
pub mod input;
pub mod output;

pub use config::{CliConfig, ConfigError, LogFormat, OutputFormat};
