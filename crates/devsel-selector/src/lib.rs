//! Visible-device selector environment variables.
//!
//! Each compute backend's runtime reads one environment variable at startup
//! to restrict which of its devices the process may use. A
//! [`BackendSelector`] narrows a device list to its own family and renders
//! that variable:
//!
//! ```
//! use devsel_common::{BackendFamily, DeviceDescriptor};
//! use devsel_selector::oneapi;
//!
//! let devices = [
//!     DeviceDescriptor::new("0", BackendFamily::OneApi),
//!     DeviceDescriptor::new("2", BackendFamily::OneApi),
//! ];
//! let env = oneapi::build_selector_env(&devices);
//! assert_eq!(env.to_string(), "ONEAPI_DEVICE_SELECTOR=level_zero:0,2");
//! ```
//!
//! Mixed lists can be split into homogeneous [`FamilyDevices`] groups with
//! [`group_by_family`], or turned into one assignment per backend with
//! [`plan_visible_devices`].

pub mod group;
pub mod oneapi;
pub mod plan;
pub mod selector;

pub use devsel_common::{BackendFamily, DeviceDescriptor, EnvironmentAssignment};
pub use group::{FamilyDevices, group_by_family};
pub use plan::plan_visible_devices;
pub use selector::{BackendSelector, ID_SEPARATOR};
