//! Core types for enum-reflect.
//!
//! - [`EnumTable`] / [`EnumEntry`] - the per-type descriptor table
//! - [`Enumeration`] - implemented by `#[derive(Enumeration)]`
//! - [`name_of`], [`value_of`], [`entries`] - generic lookups
//! - [`DynEnumTable`], [`EnumInfo`] - type-erased tables for registries
//! - [`TypeHash`] - registry identity
//! - [`const_eval`] - helpers for the generated `const fn`s

pub mod const_eval;
mod dyn_table;
mod entry;
mod enumeration;
mod error;
mod info;
mod scalar;
mod table;
mod type_hash;

#[cfg(test)]
mod test_fixtures;

pub use dyn_table::DynEnumTable;
pub use entry::EnumEntry;
pub use enumeration::{Enumeration, entries, name_of, name_of_value, repr_of, value_of};
pub use error::ParseEnumError;
pub use info::{EnumInfo, EnumValue};
pub use scalar::Scalar;
pub use table::{EnumTable, UNKNOWN_NAME};
pub use type_hash::TypeHash;
