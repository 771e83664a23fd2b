//! Build-time registrations collected with `inventory`.
//!
//! `#[derive(Enumeration)]` submits one [`EnumRegistration`] per type. The
//! global registry walks them once, on first use.

use enum_reflect_core::{DynEnumTable, Enumeration};

/// Registry entry for one enumeration type.
pub struct EnumRegistration {
    table: fn() -> &'static dyn DynEnumTable,
}

impl EnumRegistration {
    /// Registration for `E`'s descriptor table.
    pub const fn of<E: Enumeration>() -> Self {
        Self {
            table: erased_table::<E>,
        }
    }

    /// The registered table.
    pub fn table(&self) -> &'static dyn DynEnumTable {
        (self.table)()
    }
}

fn erased_table<E: Enumeration>() -> &'static dyn DynEnumTable {
    E::table()
}

inventory::collect!(EnumRegistration);

/// All submitted registrations, sorted by qualified name.
pub(crate) fn submitted_tables() -> Vec<&'static dyn DynEnumTable> {
    let mut tables = Vec::new();
    for registration in inventory::iter::<EnumRegistration> {
        tables.push(registration.table());
    }
    tables.sort_by(|a, b| a.qualified_name().cmp(b.qualified_name()));
    tables
}
