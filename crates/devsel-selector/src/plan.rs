//! One selector assignment per backend for a mixed device list.

use devsel_common::{DeviceDescriptor, EnvironmentAssignment};
use tracing::debug;

use crate::group::group_by_family;
use crate::selector::BackendSelector;

/// Build the selector variable for every backend present in `devices`.
///
/// Assignments follow the order in which each family first appears.
/// Families without a selector variable (`Metal`, `Cpu`) are skipped with a
/// debug record.
///
/// # Examples
///
/// ```
/// use devsel_common::{BackendFamily, DeviceDescriptor};
/// use devsel_selector::plan_visible_devices;
///
/// let plan = plan_visible_devices(&[
///     DeviceDescriptor::new("GPU-1", BackendFamily::Cuda),
///     DeviceDescriptor::new("0", BackendFamily::OneApi),
///     DeviceDescriptor::new("cpu", BackendFamily::Cpu),
/// ]);
/// let rendered: Vec<String> = plan.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["CUDA_VISIBLE_DEVICES=GPU-1", "ONEAPI_DEVICE_SELECTOR=level_zero:0"]);
/// ```
pub fn plan_visible_devices(devices: &[DeviceDescriptor]) -> Vec<EnvironmentAssignment> {
    group_by_family(devices)
        .iter()
        .filter_map(|group| {
            let Some(selector) = BackendSelector::for_family(group.family()) else {
                debug!(
                    family = %group.family(),
                    devices = group.len(),
                    "no visible-devices variable for backend family"
                );
                return None;
            };
            Some(selector.build_env_for(group))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsel_common::BackendFamily;

    #[test]
    fn empty_input_gives_empty_plan() {
        assert!(plan_visible_devices(&[]).is_empty());
    }

    #[test]
    fn one_assignment_per_family() {
        let plan = plan_visible_devices(&[
            DeviceDescriptor::new("0", BackendFamily::OneApi),
            DeviceDescriptor::new("1", BackendFamily::Rocm),
            DeviceDescriptor::new("2", BackendFamily::OneApi),
            DeviceDescriptor::new("3", BackendFamily::Rocm),
        ]);
        assert_eq!(
            plan,
            vec![
                EnvironmentAssignment::new("ONEAPI_DEVICE_SELECTOR", "level_zero:0,2"),
                EnvironmentAssignment::new("HIP_VISIBLE_DEVICES", "1,3"),
            ]
        );
    }

    #[test]
    fn metal_only_gives_empty_plan() {
        let plan = plan_visible_devices(&[DeviceDescriptor::new("0", BackendFamily::Metal)]);
        assert!(plan.is_empty());
    }
}
