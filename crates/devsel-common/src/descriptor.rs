//! Device descriptors as reported by device discovery.

use serde::{Deserialize, Serialize};

use crate::backend::BackendFamily;

/// One detected accelerator device.
///
/// `id` is opaque: it is assigned by discovery, unique within `family`, and
/// only meaningful to that family's runtime. Nothing here validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Backend-local device identifier.
    pub id: String,
    /// Backend family that owns the device.
    pub family: BackendFamily,
}

impl DeviceDescriptor {
    /// Create a descriptor.
    pub fn new(id: impl Into<String>, family: BackendFamily) -> Self {
        Self { id: id.into(), family }
    }

    /// Whether this device belongs to `family`.
    #[inline]
    pub fn is_family(&self, family: BackendFamily) -> bool {
        self.family == family
    }
}
