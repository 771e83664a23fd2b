//! Error types.
//!
//! Lookups never fail. The only error here backs the opt-in `FromStr`
//! impl emitted by `#[enum_reflect(from_str)]`.

use thiserror::Error;

/// A string did not name any enumerator of the target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not an enumerator of {type_name}")]
pub struct ParseEnumError {
    /// Target type name.
    pub type_name: &'static str,
    /// The rejected input.
    pub input: String,
}

impl ParseEnumError {
    pub fn new(type_name: &'static str, input: impl Into<String>) -> Self {
        Self {
            type_name,
            input: input.into(),
        }
    }
}
