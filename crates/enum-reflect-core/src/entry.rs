//! Descriptor entries.
//!
//! This module provides [`EnumEntry`], one (name, value) pair of a
//! descriptor table.

use crate::Enumeration;

/// One enumerator of a descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumEntry<E: 'static> {
    /// Declared identifier, or its `rename` override.
    pub name: &'static str,
    /// The enumerator itself.
    pub value: E,
}

impl<E> EnumEntry<E> {
    /// Create a new entry.
    pub const fn new(name: &'static str, value: E) -> Self {
        Self { name, value }
    }
}

impl<E: Enumeration> EnumEntry<E> {
    /// The enumerator's underlying scalar value.
    #[inline]
    pub fn repr(&self) -> E::Repr {
        self.value.to_repr()
    }
}
