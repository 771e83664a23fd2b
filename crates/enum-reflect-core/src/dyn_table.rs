//! Type-erased descriptor tables.
//!
//! [`DynEnumTable`] lets a registry hold tables of different enumeration
//! types side by side. Values travel as `i128`, which holds every supported
//! underlying type losslessly.

use std::any::TypeId;

use crate::{EnumTable, Enumeration, Scalar};

/// Object-safe view of a descriptor table.
pub trait DynEnumTable: Send + Sync {
    /// Unqualified type name.
    fn type_name(&self) -> &str;

    /// Type name prefixed with its module path.
    fn qualified_name(&self) -> &str;

    /// Sentinel for unmatched values.
    fn unknown(&self) -> &str;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Entry at a declaration index.
    fn entry(&self, index: usize) -> Option<(&str, i128)>;

    /// Name of the first entry whose value is `value`, or the sentinel.
    fn name_of(&self, value: i128) -> &str;

    /// Value of the first entry named `name`.
    fn value_of(&self, name: &str) -> Option<i128>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The Rust enum this table describes, or `None` for tables built at
    /// runtime.
    fn enum_type_id(&self) -> Option<TypeId> {
        None
    }
}

impl dyn DynEnumTable + '_ {
    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i128)> + '_ {
        (0..self.len()).filter_map(move |index| self.entry(index))
    }
}

impl<E: Enumeration> DynEnumTable for EnumTable<E> {
    fn type_name(&self) -> &str {
        EnumTable::type_name(self)
    }

    fn qualified_name(&self) -> &str {
        EnumTable::qualified_name(self)
    }

    fn unknown(&self) -> &str {
        EnumTable::unknown(self)
    }

    fn len(&self) -> usize {
        EnumTable::len(self)
    }

    fn entry(&self, index: usize) -> Option<(&str, i128)> {
        self.get(index).map(|entry| (entry.name, entry.repr().to_i128()))
    }

    fn name_of(&self, value: i128) -> &str {
        self.name_of_i128(value)
    }

    fn value_of(&self, name: &str) -> Option<i128> {
        self.repr_of(name).map(Scalar::to_i128)
    }

    fn enum_type_id(&self) -> Option<TypeId> {
        Some(TypeId::of::<E>())
    }
}
