//! Splitting mixed device lists into single-family groups.

use devsel_common::{BackendFamily, DeviceDescriptor};

/// Devices that all belong to one backend family, in their original order.
///
/// Only [`group_by_family`] and [`FamilyDevices::select`] build these, so a
/// value of this type never mixes families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyDevices<'a> {
    family: BackendFamily,
    devices: Vec<&'a DeviceDescriptor>,
}

impl<'a> FamilyDevices<'a> {
    /// The devices of `family` in `devices`, in input order. May be empty.
    pub fn select(devices: &'a [DeviceDescriptor], family: BackendFamily) -> Self {
        Self { family, devices: devices.iter().filter(|d| d.is_family(family)).collect() }
    }

    /// Family shared by every device in the group.
    pub const fn family(&self) -> BackendFamily {
        self.family
    }

    /// Number of devices in the group.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the group has no devices.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Devices in input order.
    pub fn iter(&self) -> impl Iterator<Item = &'a DeviceDescriptor> + '_ {
        self.devices.iter().copied()
    }

    /// Device IDs in input order.
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.iter().map(|d| d.id.as_str())
    }
}

/// Partition `devices` into one group per family.
///
/// Groups come out in the order their family first appears; devices keep
/// their input order inside each group. Empty input gives no groups.
///
/// # Examples
///
/// ```
/// use devsel_common::{BackendFamily, DeviceDescriptor};
/// use devsel_selector::group_by_family;
///
/// let devices = [
///     DeviceDescriptor::new("0", BackendFamily::OneApi),
///     DeviceDescriptor::new("GPU-1", BackendFamily::Cuda),
///     DeviceDescriptor::new("2", BackendFamily::OneApi),
/// ];
/// let groups = group_by_family(&devices);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].family(), BackendFamily::OneApi);
/// assert_eq!(groups[0].ids().collect::<Vec<_>>(), ["0", "2"]);
/// ```
pub fn group_by_family(devices: &[DeviceDescriptor]) -> Vec<FamilyDevices<'_>> {
    let mut groups: Vec<FamilyDevices<'_>> = Vec::new();
    for device in devices {
        match groups.iter_mut().find(|g| g.family == device.family) {
            Some(group) => group.devices.push(device),
            None => groups.push(FamilyDevices { family: device.family, devices: vec![device] }),
        }
    }
    groups
}
