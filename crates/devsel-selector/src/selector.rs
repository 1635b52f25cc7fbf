//! Per-backend selector variables and the filter-and-format operation.

use devsel_common::{BackendFamily, DeviceDescriptor, EnvironmentAssignment};
use tracing::debug;

use crate::group::FamilyDevices;
use crate::oneapi::{LEVEL_ZERO_PREFIX, ONEAPI_DEVICE_SELECTOR};

/// Separator between device IDs in every selector value.
pub const ID_SEPARATOR: &str = ",";

/// The environment variable one backend family's runtime reads to restrict
/// its visible devices, and the token its value starts with.
///
/// | Family   | Variable                  | Prefix        |
/// |----------|---------------------------|---------------|
/// | `OneApi` | `ONEAPI_DEVICE_SELECTOR`  | `level_zero:` |
/// | `Cuda`   | `CUDA_VISIBLE_DEVICES`    |               |
/// | `Rocm`   | `HIP_VISIBLE_DEVICES`     |               |
/// | `Vulkan` | `GGML_VK_VISIBLE_DEVICES` |               |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendSelector {
    family: BackendFamily,
    variable: &'static str,
    prefix: &'static str,
}

impl BackendSelector {
    /// Intel oneAPI / SYCL over Level-Zero.
    pub const ONEAPI: Self = Self {
        family: BackendFamily::OneApi,
        variable: ONEAPI_DEVICE_SELECTOR,
        prefix: LEVEL_ZERO_PREFIX,
    };

    /// NVIDIA CUDA.
    pub const CUDA: Self =
        Self { family: BackendFamily::Cuda, variable: "CUDA_VISIBLE_DEVICES", prefix: "" };

    /// AMD `ROCm` / HIP.
    pub const ROCM: Self =
        Self { family: BackendFamily::Rocm, variable: "HIP_VISIBLE_DEVICES", prefix: "" };

    /// Vulkan compute via ggml.
    pub const VULKAN: Self =
        Self { family: BackendFamily::Vulkan, variable: "GGML_VK_VISIBLE_DEVICES", prefix: "" };

    /// Every family that has a selector variable.
    pub const ALL: [Self; 4] = [Self::CUDA, Self::ROCM, Self::ONEAPI, Self::VULKAN];

    /// Selector for `family`, or `None` when its runtime has no such
    /// variable (`Metal`, `Cpu`).
    pub const fn for_family(family: BackendFamily) -> Option<Self> {
        match family {
            BackendFamily::OneApi => Some(Self::ONEAPI),
            BackendFamily::Cuda => Some(Self::CUDA),
            BackendFamily::Rocm => Some(Self::ROCM),
            BackendFamily::Vulkan => Some(Self::VULKAN),
            BackendFamily::Metal | BackendFamily::Cpu => None,
        }
    }

    /// Family this selector targets.
    pub const fn family(&self) -> BackendFamily {
        self.family
    }

    /// Environment variable name.
    pub const fn variable(&self) -> &'static str {
        self.variable
    }

    /// Token the value starts with (may be empty).
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Restrict this backend's runtime to the matching devices in `devices`.
    ///
    /// The value is the prefix followed by the IDs of every device of this
    /// family, comma-joined in input order. Devices of another family are
    /// skipped and reported with one `debug` record each; they never affect
    /// the result. This cannot fail: empty input, or input with no matching
    /// devices, yields the bare prefix.
    pub fn build_env(&self, devices: &[DeviceDescriptor]) -> EnvironmentAssignment {
        self.format(devices)
    }

    /// Like [`build_env`](Self::build_env) for a list already known to hold
    /// only one family.
    pub fn build_env_for(&self, devices: &FamilyDevices<'_>) -> EnvironmentAssignment {
        debug_assert_eq!(
            devices.family(),
            self.family,
            "{} selector given {} devices",
            self.family,
            devices.family()
        );
        self.format(devices.iter())
    }

    fn format<'a>(
        &self,
        devices: impl IntoIterator<Item = &'a DeviceDescriptor>,
    ) -> EnvironmentAssignment {
        let ids: Vec<&str> = devices
            .into_iter()
            .filter(|device| {
                if device.is_family(self.family) {
                    return true;
                }
                // Callers pass one family at a time; a stray device here is a
                // wiring bug upstream, not bad input.
                debug!(
                    variable = self.variable,
                    expected = %self.family,
                    family = %device.family,
                    id = %device.id,
                    "skipping device from another backend family"
                );
                false
            })
            .map(|device| device.id.as_str())
            .collect();

        let mut value = String::with_capacity(
            self.prefix.len() + ids.iter().map(|id| id.len() + 1).sum::<usize>(),
        );
        value.push_str(self.prefix);
        value.push_str(&ids.join(ID_SEPARATOR));
        EnvironmentAssignment::new(self.variable, value)
    }
}
