//! Compute backend families that own and address accelerator devices.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseBackendFamilyError;

/// The runtime/driver stack that owns a device.
///
/// Device identifiers are only meaningful within one family, so every
/// selector works on exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendFamily {
    /// NVIDIA CUDA.
    Cuda,
    /// AMD `ROCm` / HIP.
    Rocm,
    /// Intel oneAPI (SYCL on Level-Zero).
    OneApi,
    /// Vulkan compute.
    Vulkan,
    /// Apple Metal.
    Metal,
    /// Host CPU.
    Cpu,
}

impl BackendFamily {
    /// All families, in declaration order.
    pub const ALL: [Self; 6] =
        [Self::Cuda, Self::Rocm, Self::OneApi, Self::Vulkan, Self::Metal, Self::Cpu];

    /// Canonical lowercase name, as rendered by `Display`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cuda => "cuda",
            Self::Rocm => "rocm",
            Self::OneApi => "oneapi",
            Self::Vulkan => "vulkan",
            Self::Metal => "metal",
            Self::Cpu => "cpu",
        }
    }
}

impl fmt::Display for BackendFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendFamily {
    type Err = ParseBackendFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cuda" => Ok(Self::Cuda),
            "rocm" | "hip" => Ok(Self::Rocm),
            "oneapi" | "sycl" | "level_zero" | "levelzero" => Ok(Self::OneApi),
            "vulkan" => Ok(Self::Vulkan),
            "metal" => Ok(Self::Metal),
            "cpu" => Ok(Self::Cpu),
            _ => Err(ParseBackendFamilyError { name: s.to_string() }),
        }
    }
}

// Deserialize through `FromStr` so the aliases and case-insensitivity apply to
// JSON/TOML input too.
impl<'de> Deserialize<'de> for BackendFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
