//! Environment variable assignments produced by selectors.

use serde::Serialize;
use std::fmt;

/// A single `NAME=value` environment variable to set for a backend runtime.
///
/// The name is always a backend-specific constant; the value is built fresh
/// on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EnvironmentAssignment {
    name: &'static str,
    value: String,
}

impl EnvironmentAssignment {
    /// Create an assignment.
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: value.into() }
    }

    /// Variable name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Variable value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into `(name, value)`.
    pub fn into_pair(self) -> (&'static str, String) {
        (self.name, self.value)
    }
}

impl fmt::Display for EnvironmentAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
