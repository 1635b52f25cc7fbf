//! Intel oneAPI (SYCL on Level-Zero) device selector.
//!
//! The SYCL runtime reads `ONEAPI_DEVICE_SELECTOR` as `<backend>:<ids>`.
//! Devices are always addressed through the Level-Zero backend here.

use devsel_common::{DeviceDescriptor, EnvironmentAssignment};

use crate::selector::BackendSelector;

/// Variable read by the SYCL runtime to restrict visible devices.
pub const ONEAPI_DEVICE_SELECTOR: &str = "ONEAPI_DEVICE_SELECTOR";

/// Backend token prepended to the device list.
pub const LEVEL_ZERO_PREFIX: &str = "level_zero:";

/// Build `ONEAPI_DEVICE_SELECTOR=level_zero:<ids>` for the oneAPI devices in
/// `devices`, in input order.
///
/// Devices from other families are skipped with a debug record. An input
/// with no oneAPI devices yields the bare `level_zero:` prefix.
///
/// # Examples
///
/// ```
/// use devsel_common::{BackendFamily, DeviceDescriptor};
/// use devsel_selector::oneapi::build_selector_env;
///
/// let env = build_selector_env(&[]);
/// assert_eq!(env.name(), "ONEAPI_DEVICE_SELECTOR");
/// assert_eq!(env.value(), "level_zero:");
///
/// let env = build_selector_env(&[
///     DeviceDescriptor::new("0", BackendFamily::OneApi),
///     DeviceDescriptor::new("1", BackendFamily::Cuda),
///     DeviceDescriptor::new("2", BackendFamily::OneApi),
/// ]);
/// assert_eq!(env.value(), "level_zero:0,2");
/// ```
pub fn build_selector_env(devices: &[DeviceDescriptor]) -> EnvironmentAssignment {
    BackendSelector::ONEAPI.build_env(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsel_common::BackendFamily;

    #[test]
    fn single_device_has_no_separator() {
        let env = build_selector_env(&[DeviceDescriptor::new("7", BackendFamily::OneApi)]);
        assert_eq!(env.value(), "level_zero:7");
    }

    #[test]
    fn only_foreign_devices_yield_bare_prefix() {
        let env = build_selector_env(&[
            DeviceDescriptor::new("0", BackendFamily::Cuda),
            DeviceDescriptor::new("1", BackendFamily::Rocm),
        ]);
        assert_eq!(env.into_pair(), (ONEAPI_DEVICE_SELECTOR, LEVEL_ZERO_PREFIX.to_string()));
    }

    #[test]
    fn empty_ids_pass_through() {
        let env = build_selector_env(&[
            DeviceDescriptor::new("", BackendFamily::OneApi),
            DeviceDescriptor::new("1", BackendFamily::OneApi),
        ]);
        assert_eq!(env.value(), "level_zero:,1");
    }
}
