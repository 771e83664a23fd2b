//! Registry errors.

use thiserror::Error;

/// Errors raised while assembling an [`EnumRegistry`](crate::EnumRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A table with the same qualified name was already registered.
    #[error("enum '{qualified_name}' is already registered")]
    DuplicateEnum { qualified_name: String },
}
