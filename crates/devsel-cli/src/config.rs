//! `devsel.toml` configuration with `DEVSEL_*` environment overrides.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, environment
//! variables, command-line flags (applied by the binary).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "devsel.toml";

/// Log output style for the stderr subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// How assignments are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `export NAME='value'`, ready for `eval`.
    Shell,
    /// `NAME=value`.
    Plain,
    /// JSON array of `{"name", "value"}` objects.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shell => write!(f, "shell"),
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" => Ok(Self::Shell),
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    /// Override: `DEVSEL_LOG_LEVEL`
    pub level: String,
    /// Override: `DEVSEL_LOG_FORMAT`
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: LogFormat::Compact }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Override: `DEVSEL_OUTPUT_FORMAT`
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Shell }
    }
}

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Errors that can occur when loading a [`CliConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("invalid environment override {key}={value}: {reason}")]
    EnvOverride { key: String, value: String, reason: String },
}

impl CliConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `./devsel.toml` is used if
    /// present and defaults otherwise. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.is_file().then_some(default)
            }
        };

        let mut cfg = match file {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
                tracing::debug!(path = %path.display(), "loaded configuration file");
                toml::from_str(&contents)?
            }
            None => Self::default(),
        };
        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from TOML string, then apply environment overrides.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut cfg: Self = toml::from_str(toml_str)?;
        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_log_filter(&self.logging.level)
            .map_err(|reason| ConfigError::Validation(format!("logging.level: {reason}")))?;
        Ok(())
    }

    /// Filter for the configured `logging.level`.
    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        parse_log_filter(&self.logging.level)
            .map_err(|reason| ConfigError::Validation(format!("logging.level: {reason}")))
    }

    /// Apply `DEVSEL_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("DEVSEL_LOG_LEVEL") {
            parse_log_filter(&val).map_err(|reason| ConfigError::EnvOverride {
                key: "DEVSEL_LOG_LEVEL".into(),
                value: val.clone(),
                reason,
            })?;
            self.logging.level = val;
        }

        if let Ok(val) = std::env::var("DEVSEL_LOG_FORMAT") {
            self.logging.format =
                val.parse::<LogFormat>().map_err(|reason| ConfigError::EnvOverride {
                    key: "DEVSEL_LOG_FORMAT".into(),
                    value: val.clone(),
                    reason,
                })?;
        }

        if let Ok(val) = std::env::var("DEVSEL_OUTPUT_FORMAT") {
            self.output.format =
                val.parse::<OutputFormat>().map_err(|reason| ConfigError::EnvOverride {
                    key: "DEVSEL_OUTPUT_FORMAT".into(),
                    value: val.clone(),
                    reason,
                })?;
        }

        Ok(())
    }
}

/// Parse a comma-separated list of log directives (`warn`,
/// `devsel_selector=debug`, ...).
///
/// Every directive must end in a known level. A bare word such as `verbose`
/// would otherwise be taken as a target name and silence everything else.
pub fn parse_log_filter(directives: &str) -> Result<EnvFilter, String> {
    if directives.trim().is_empty() {
        return Err("log level must not be empty".to_string());
    }
    for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let level = directive.rsplit_once('=').map_or(directive, |(_, level)| level);
        level
            .parse::<LevelFilter>()
            .map_err(|_| format!("unknown log level `{level}` in directive `{directive}`"))?;
    }
    EnvFilter::builder().parse(directives).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const OVERRIDES: [&str; 3] = ["DEVSEL_LOG_LEVEL", "DEVSEL_LOG_FORMAT", "DEVSEL_OUTPUT_FORMAT"];

    fn without_overrides<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars(OVERRIDES.map(|k| (k, None::<&str>)), f)
    }

    #[test]
    #[serial(devsel_env)]
    fn empty_toml_gives_defaults() {
        let cfg = without_overrides(|| CliConfig::from_toml("").unwrap());
        assert_eq!(cfg, CliConfig::default());
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.output.format, OutputFormat::Shell);
    }

    #[test]
    #[serial(devsel_env)]
    fn partial_toml_keeps_other_defaults() {
        let cfg =
            without_overrides(|| CliConfig::from_toml("[output]\nformat = \"json\"\n").unwrap());
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn empty_level_fails_validation() {
        let mut cfg = CliConfig::default();
        cfg.logging.level = "  ".into();
        assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn log_filter_accepts_levels_and_target_directives() {
        for ok in ["warn", "DEBUG", "off", "devsel_selector=debug", "info,devsel_cli=trace"] {
            assert!(parse_log_filter(ok).is_ok(), "{ok} should parse");
        }
    }

    #[test]
    fn log_filter_rejects_unknown_levels() {
        for bad in ["verbose", "bogus[", "devsel=loud", " "] {
            assert!(parse_log_filter(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn unknown_level_in_file_fails_validation() {
        let mut cfg = CliConfig::default();
        cfg.logging.level = "verbose".into();
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("verbose"));
        assert!(cfg.log_filter().is_err());
    }

    #[test]
    fn formats_parse_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
