//! Reading device lists handed over by discovery.

use anyhow::{Context, Result};
use devsel_common::DeviceDescriptor;
use std::io::Read;
use std::path::Path;

/// Read a JSON array of device descriptors from `path`, or from stdin when
/// `path` is `None` or `-`.
pub fn read_devices(path: Option<&Path>) -> Result<Vec<DeviceDescriptor>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open device list {}", path.display()))?;
            parse_devices(file).with_context(|| format!("invalid device list {}", path.display()))
        }
        _ => parse_devices(std::io::stdin().lock()).context("invalid device list on stdin"),
    }
}

/// Parse a JSON array of device descriptors.
pub fn parse_devices(reader: impl Read) -> Result<Vec<DeviceDescriptor>> {
    let devices: Vec<DeviceDescriptor> = serde_json::from_reader(reader)?;
    tracing::debug!(count = devices.len(), "read device list");
    Ok(devices)
}
