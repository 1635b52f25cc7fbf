//! Error types for the shared data model.

/// A backend family name that does not match any known family or alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown backend family: {name}")]
pub struct ParseBackendFamilyError {
    /// The name as it was given.
    pub name: String,
}
