//! devsel: print the environment variables that restrict each accelerator
//! runtime to a given set of devices.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing::error;

use devsel_cli::config::{CliConfig, ConfigError, LogFormat, OutputFormat};
use devsel_cli::exit::{EXIT_CONFIG, EXIT_GENERIC_FAIL};
use devsel_cli::{input, output};
use devsel_common::BackendFamily;
use devsel_selector::{BackendSelector, plan_visible_devices};

/// devsel - visible-device selector variables for accelerator runtimes
#[derive(Parser)]
#[command(name = "devsel")]
#[command(about = "Print the variables restricting accelerator runtimes to a device list")]
#[command(long_about = r#"
Reads a JSON array of detected devices ({"id": "...", "family": "..."}) and
prints the variable each backend runtime uses to restrict its visible devices.

Examples:
  # One variable per backend present in the list
  devsel devices.json

  # Only the oneAPI selector, for eval in a launcher script
  eval "$(devsel --family oneapi devices.json)"

  # Read from stdin, print JSON
  discover | devsel --format json
"#)]
#[command(version)]
struct Cli {
    /// Device list (JSON). `-` or omitted reads stdin.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Only format this backend family (cuda, rocm, oneapi, vulkan)
    #[arg(short, long, value_name = "FAMILY")]
    family: Option<BackendFamily>,

    /// Output format
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log format on stderr
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not set up yet.
            eprintln!("error: {e}");
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("error: {e}");
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(e) = run(&cli, &config) {
        error!("Command failed: {}", e);
        for cause in e.chain().skip(1) {
            error!("  Caused by: {}", cause);
        }
        std::process::exit(EXIT_GENERIC_FAIL);
    }
}

/// Load configuration from file and environment, then apply CLI flags.
fn load_configuration(cli: &Cli) -> Result<CliConfig, ConfigError> {
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    config.validate()?;
    Ok(config)
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn setup_logging(config: &CliConfig) -> Result<(), ConfigError> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => tracing_subscriber::EnvFilter::builder().parse(&directives).map_err(
            |e| ConfigError::EnvOverride {
                key: "RUST_LOG".into(),
                value: directives.clone(),
                reason: e.to_string(),
            },
        )?,
        Err(_) => config.log_filter()?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    match config.logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }
    Ok(())
}

fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    let devices = input::read_devices(cli.input.as_deref())?;

    let assignments = match cli.family {
        Some(family) => {
            let selector = BackendSelector::for_family(family)
                .ok_or_else(|| anyhow!("backend family {family} has no visible-devices variable"))?;
            vec![selector.build_env(&devices)]
        }
        None => plan_visible_devices(&devices),
    };

    let rendered = output::render(&assignments, config.output.format)?;
    std::io::stdout().lock().write_all(rendered.as_bytes()).context("failed to write output")?;
    Ok(())
}
