//! Shared data model for devsel.
//!
//! Device discovery hands over [`DeviceDescriptor`]s tagged with a
//! [`BackendFamily`]; selectors turn them into an [`EnvironmentAssignment`].

pub mod backend;
pub mod descriptor;
pub mod env;
pub mod error;

pub use backend::BackendFamily;
pub use descriptor::DeviceDescriptor;
pub use env::EnvironmentAssignment;
pub use error::ParseBackendFamilyError;
