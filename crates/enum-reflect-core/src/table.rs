//! Descriptor tables.
//!
//! An [`EnumTable`] is the materialized list of an enumeration's
//! enumerators, in declaration order. Derived tables live in a `static`
//! for the whole program and are never mutated.
//!
//! Lookups are linear scans. Underlying values are not required to be
//! unique, so a scan returns the first match in declaration order.

use std::fmt;
use std::slice;

use crate::{EnumEntry, Enumeration, Scalar};

/// Default sentinel returned by [`EnumTable::name_of`] for unmatched values.
pub const UNKNOWN_NAME: &str = "<unknown>";

/// Immutable, ordered name/value table for one enumeration type.
pub struct EnumTable<E: 'static> {
    type_name: &'static str,
    qualified_name: &'static str,
    unknown: &'static str,
    entries: &'static [EnumEntry<E>],
}

impl<E> EnumTable<E> {
    /// Create a table over `entries`, which must be in declaration order.
    pub const fn new(
        type_name: &'static str,
        qualified_name: &'static str,
        unknown: &'static str,
        entries: &'static [EnumEntry<E>],
    ) -> Self {
        Self {
            type_name,
            qualified_name,
            unknown,
            entries,
        }
    }

    /// Unqualified type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type name prefixed with its module path.
    #[inline]
    pub const fn qualified_name(&self) -> &'static str {
        self.qualified_name
    }

    /// The sentinel returned for values with no enumerator.
    #[inline]
    pub const fn unknown(&self) -> &'static str {
        self.unknown
    }

    /// All entries in declaration order.
    #[inline]
    pub const fn entries(&self) -> &'static [EnumEntry<E>] {
        self.entries
    }

    /// Number of declared enumerators.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a declaration index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'static EnumEntry<E>> {
        self.entries.get(index)
    }

    /// Iterate entries in declaration order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'static, EnumEntry<E>> {
        self.entries.iter()
    }

    /// First entry whose name equals `name` (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&'static EnumEntry<E>> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

impl<E: Enumeration> EnumTable<E> {
    /// First entry whose underlying value equals `repr`.
    pub fn find_by_repr(&self, repr: E::Repr) -> Option<&'static EnumEntry<E>> {
        self.entries.iter().find(|entry| entry.repr() == repr)
    }

    /// Name of the first enumerator whose value is `repr`, or the sentinel.
    ///
    /// Never fails: `repr` may be any value of the underlying type.
    pub fn name_of(&self, repr: E::Repr) -> &'static str {
        self.find_by_repr(repr).map_or(self.unknown, |entry| entry.name)
    }

    /// Name of a typed enumerator.
    #[inline]
    pub fn name_of_value(&self, value: E) -> &'static str {
        self.name_of(value.to_repr())
    }

    /// Enumerator named exactly `name`, if any.
    pub fn value_of(&self, name: &str) -> Option<E> {
        self.find_by_name(name).map(|entry| entry.value)
    }

    /// Underlying value of the enumerator named `name`, if any.
    pub fn repr_of(&self, name: &str) -> Option<E::Repr> {
        self.find_by_name(name).map(EnumEntry::repr)
    }

    /// Whether some enumerator has the underlying value `repr`.
    pub fn contains_repr(&self, repr: E::Repr) -> bool {
        self.find_by_repr(repr).is_some()
    }

    /// Name lookup from the type-erased carrier. Values outside the
    /// underlying type's range resolve to the sentinel.
    pub fn name_of_i128(&self, value: i128) -> &'static str {
        E::Repr::from_i128(value).map_or(self.unknown, |repr| self.name_of(repr))
    }
}

impl<E> Clone for EnumTable<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumTable<E> {}

impl<E: fmt::Debug> fmt::Debug for EnumTable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumTable")
            .field("type_name", &self.type_name)
            .field("qualified_name", &self.qualified_name)
            .field("unknown", &self.unknown)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<E> IntoIterator for &EnumTable<E> {
    type Item = &'static EnumEntry<E>;
    type IntoIter = slice::Iter<'static, EnumEntry<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
