//! EnumRegistry - process-wide table of enumeration descriptors.
//!
//! This module provides [`EnumRegistry`], a read-only map from an
//! enumeration's [`TypeHash`] to its type-erased descriptor table.
//!
//! # Storage Model
//!
//! - **Tables**: `&'static dyn DynEnumTable` in registration order. Derived
//!   tables are `static`s; owned [`EnumInfo`] tables are leaked on
//!   registration and live for the program.
//! - **Types**: derived tables are keyed by the `TypeId` of their enum, so
//!   [`EnumRegistry::of`] always answers with the table of that exact type.
//! - **Names**: indexes from the [`TypeHash`] of the qualified name, and from
//!   the unqualified name, to every table that carries it. Name lookups
//!   succeed only when the name is unambiguous.
//!
//! # Lifecycle
//!
//! A registry is assembled with [`RegistryBuilder`] and is immutable once
//! built. [`EnumRegistry::global`] builds one from every
//! `#[derive(Enumeration)]` in the program the first time it is called;
//! concurrent first calls all observe the same fully built registry.
//!
//! # Example
//!
//! ```
//! use enum_reflect_core::EnumInfo;
//! use enum_reflect_registry::EnumRegistry;
//!
//! let mut builder = EnumRegistry::builder();
//! builder
//!     .register_info(EnumInfo::new("Color").with_values([("red", 0), ("green", 1)]))
//!     .unwrap();
//! let registry = builder.build();
//!
//! assert_eq!(registry.name_of("Color", 1), Some("green"));
//! assert_eq!(registry.value_of("Color", "red"), Some(0));
//! ```

use std::any::TypeId;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use enum_reflect_core::{DynEnumTable, EnumInfo, Enumeration, TypeHash};

use crate::RegistryError;
use crate::registration::submitted_tables;

static GLOBAL: LazyLock<EnumRegistry> = LazyLock::new(|| {
    let mut builder = RegistryBuilder::new();
    for table in submitted_tables() {
        if let Err(err) = builder.register_dyn(table) {
            warn!(%err, "keeping first registration");
        }
    }
    let registry = builder.build();
    debug!(count = registry.len(), "global enum registry built");
    registry
});

/// Read-only registry of enumeration descriptor tables.
#[derive(Default)]
pub struct EnumRegistry {
    /// Tables in registration order.
    tables: Vec<&'static dyn DynEnumTable>,

    /// Derived enum type -> index into `tables`.
    by_type: FxHashMap<TypeId, usize>,

    /// Hash of the qualified name -> every index registered under it.
    by_hash: FxHashMap<TypeHash, Vec<usize>>,

    /// Unqualified name -> every index registered under it.
    by_simple_name: FxHashMap<&'static str, Vec<usize>>,
}

impl EnumRegistry {
    /// Start assembling a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry of every derived enumeration in the program.
    pub fn global() -> &'static EnumRegistry {
        &GLOBAL
    }

    // ==========================================================================
    // Table Lookup
    // ==========================================================================

    /// Get the table registered for `E`.
    pub fn of<E: Enumeration>(&self) -> Option<&'static dyn DynEnumTable> {
        self.by_type
            .get(&TypeId::of::<E>())
            .map(|&index| self.tables[index])
    }

    /// Get a table by the hash of its qualified name.
    ///
    /// Returns `None` when no table, or more than one, carries that name.
    /// Enums declared inside different functions of one module share a
    /// qualified name; reach those through [`EnumRegistry::of`].
    pub fn get(&self, hash: TypeHash) -> Option<&'static dyn DynEnumTable> {
        self.unique(self.by_hash.get(&hash))
    }

    /// Get a table by qualified name, or by simple name when exactly one
    /// registered type carries it.
    pub fn get_by_name(&self, name: &str) -> Option<&'static dyn DynEnumTable> {
        let hash = TypeHash::from_name(name);
        if self.by_hash.contains_key(&hash) {
            return self.get(hash);
        }
        self.unique(self.by_simple_name.get(name))
    }

    /// Check if any table is registered under the qualified name `hash`.
    pub fn contains(&self, hash: TypeHash) -> bool {
        self.by_hash.contains_key(&hash)
    }

    /// Check if a table is registered for `E`.
    pub fn contains_type<E: Enumeration>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<E>())
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterate tables in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn DynEnumTable> + '_ {
        self.tables.iter().copied()
    }

    fn unique(&self, indices: Option<&Vec<usize>>) -> Option<&'static dyn DynEnumTable> {
        match indices.map(Vec::as_slice) {
            Some([index]) => Some(self.tables[*index]),
            _ => None,
        }
    }

    // ==========================================================================
    // Value Lookup
    // ==========================================================================

    /// Name of `value` in the enumeration called `type_name`.
    ///
    /// `None` only when no such enumeration is registered; an unmatched value
    /// yields that table's sentinel.
    pub fn name_of(&self, type_name: &str, value: i128) -> Option<&'static str> {
        self.get_by_name(type_name).map(|table| table.name_of(value))
    }

    /// Value of the enumerator `name` in the enumeration called `type_name`.
    pub fn value_of(&self, type_name: &str, name: &str) -> Option<i128> {
        self.get_by_name(type_name)?.value_of(name)
    }
}

/// Assembles an [`EnumRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    registry: EnumRegistry,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a derived enumeration.
    pub fn register<E: Enumeration>(&mut self) -> Result<&mut Self, RegistryError> {
        self.register_dyn(E::table())
    }

    /// Register an owned table. It is leaked so that it can live alongside
    /// the `static` derived tables.
    pub fn register_info(&mut self, info: EnumInfo) -> Result<&mut Self, RegistryError> {
        if self.is_duplicate(&info) {
            return Err(RegistryError::DuplicateEnum {
                qualified_name: info.qualified_name,
            });
        }
        self.register_dyn(Box::leak(Box::new(info)))
    }

    /// Register any `'static` table.
    ///
    /// Derived tables conflict only with the same enum type. Runtime tables
    /// have no type, so they conflict with any table of the same qualified
    /// name.
    pub fn register_dyn(
        &mut self,
        table: &'static dyn DynEnumTable,
    ) -> Result<&mut Self, RegistryError> {
        let qualified_name = table.qualified_name();
        if self.is_duplicate(table) {
            return Err(RegistryError::DuplicateEnum {
                qualified_name: qualified_name.to_string(),
            });
        }

        debug!(enum_name = qualified_name, entries = table.len(), "registered enum");
        let registry = &mut self.registry;
        let index = registry.tables.len();
        registry.tables.push(table);
        if let Some(type_id) = table.enum_type_id() {
            registry.by_type.insert(type_id, index);
        }
        registry
            .by_hash
            .entry(TypeHash::from_name(qualified_name))
            .or_default()
            .push(index);
        registry
            .by_simple_name
            .entry(table.type_name())
            .or_default()
            .push(index);
        Ok(self)
    }

    fn is_duplicate(&self, table: &dyn DynEnumTable) -> bool {
        let registry = &self.registry;
        if let Some(type_id) = table.enum_type_id() {
            if registry.by_type.contains_key(&type_id) {
                return true;
            }
        }
        let hash = TypeHash::from_name(table.qualified_name());
        registry.by_hash.get(&hash).is_some_and(|indices| {
            indices.iter().any(|&index| {
                let existing = registry.tables[index].enum_type_id();
                existing.is_none() || table.enum_type_id().is_none()
            })
        })
    }

    /// Finish; the result has no mutation API.
    pub fn build(self) -> EnumRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_reflect_core::{EnumEntry, EnumTable, UNKNOWN_NAME};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    enum LineType {
        None,
        Solid,
        Dashed,
        Dotted,
    }

    impl Enumeration for LineType {
        type Repr = u8;
        const TYPE_NAME: &'static str = "LineType";
        const QUALIFIED_NAME: &'static str = concat!(module_path!(), "::LineType");
        const UNKNOWN: &'static str = UNKNOWN_NAME;

        fn table() -> &'static EnumTable<Self> {
            static TABLE: EnumTable<LineType> = EnumTable::new(
                LineType::TYPE_NAME,
                LineType::QUALIFIED_NAME,
                LineType::UNKNOWN,
                &[
                    EnumEntry::new("None", LineType::None),
                    EnumEntry::new("Solid", LineType::Solid),
                    EnumEntry::new("Dashed", LineType::Dashed),
                    EnumEntry::new("Dotted", LineType::Dotted),
                ],
            );
            &TABLE
        }

        fn to_repr(self) -> u8 {
            self as u8
        }
    }

    inventory::submit! {
        crate::EnumRegistration::of::<LineType>()
    }

    /// A different type that reports the same qualified name as `LineType`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    enum Shadow {
        Read,
        Write,
    }

    impl Enumeration for Shadow {
        type Repr = u8;
        const TYPE_NAME: &'static str = "LineType";
        const QUALIFIED_NAME: &'static str = LineType::QUALIFIED_NAME;
        const UNKNOWN: &'static str = "<no-mode>";

        fn table() -> &'static EnumTable<Self> {
            static TABLE: EnumTable<Shadow> = EnumTable::new(
                Shadow::TYPE_NAME,
                Shadow::QUALIFIED_NAME,
                Shadow::UNKNOWN,
                &[
                    EnumEntry::new("Read", Shadow::Read),
                    EnumEntry::new("Write", Shadow::Write),
                ],
            );
            &TABLE
        }

        fn to_repr(self) -> u8 {
            self as u8
        }
    }

    fn color() -> EnumInfo {
        EnumInfo::new("Color")
            .with_qualified_name("paint::Color")
            .with_unknown("<unnamed>")
            .with_values([("red", 0), ("green", 1), ("blue", 2)])
    }

    #[test]
    fn register_and_lookup() {
        let mut builder = EnumRegistry::builder();
        builder.register::<LineType>().unwrap();
        builder.register_info(color()).unwrap();
        let registry = builder.build();

        assert_eq!(registry.len(), 2);
        assert!(registry.of::<LineType>().is_some());
        assert_eq!(registry.name_of("LineType", 2), Some("Dashed"));
        assert_eq!(registry.name_of("LineType", 42), Some("<unknown>"));
        assert_eq!(registry.name_of("paint::Color", 42), Some("<unnamed>"));
        assert_eq!(registry.value_of("Color", "green"), Some(1));
        assert_eq!(registry.value_of("Color", "nope"), None);
        assert_eq!(registry.name_of("Missing", 0), None);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut builder = EnumRegistry::builder();
        builder.register::<LineType>().unwrap();
        let err = builder.register::<LineType>().err().unwrap();
        assert_eq!(
            err,
            RegistryError::DuplicateEnum {
                qualified_name: LineType::QUALIFIED_NAME.to_string()
            }
        );

        builder.register_info(color()).unwrap();
        assert!(builder.register_info(color()).is_err());
        assert_eq!(builder.build().len(), 2);
    }

    #[test]
    fn same_qualified_name_keeps_types_apart() {
        let mut builder = EnumRegistry::builder();
        builder.register::<LineType>().unwrap();
        builder.register::<Shadow>().unwrap();
        let registry = builder.build();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.of::<LineType>().unwrap().name_of(0), "None");
        assert_eq!(registry.of::<Shadow>().unwrap().name_of(0), "Read");
        assert_eq!(registry.of::<Shadow>().unwrap().name_of(9), "<no-mode>");
        assert!(registry.contains_type::<Shadow>());

        // The shared name no longer identifies a single table.
        assert!(registry.contains(LineType::type_hash()));
        assert!(registry.get(LineType::type_hash()).is_none());
        assert!(registry.get_by_name(LineType::QUALIFIED_NAME).is_none());
        assert_eq!(registry.name_of("LineType", 0), None);
    }

    #[test]
    fn runtime_table_conflicts_with_same_qualified_name() {
        let mut builder = EnumRegistry::builder();
        builder.register::<LineType>().unwrap();
        let err = builder
            .register_info(EnumInfo::new("LineType").with_qualified_name(LineType::QUALIFIED_NAME))
            .err()
            .unwrap();
        assert!(matches!(err, RegistryError::DuplicateEnum { .. }));

        let mut builder = EnumRegistry::builder();
        builder.register_info(color()).unwrap();
        builder.register::<LineType>().unwrap();
        assert_eq!(builder.build().len(), 2);
    }

    #[test]
    fn ambiguous_simple_name_needs_qualification() {
        let mut builder = EnumRegistry::builder();
        builder.register_info(color()).unwrap();
        builder
            .register_info(EnumInfo::new("Color").with_qualified_name("light::Color"))
            .unwrap();
        let registry = builder.build();

        assert!(registry.get_by_name("Color").is_none());
        assert!(registry.get_by_name("paint::Color").is_some());
        assert!(registry.get_by_name("light::Color").is_some());
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut builder = EnumRegistry::builder();
        builder.register_info(color()).unwrap();
        builder.register::<LineType>().unwrap();
        let registry = builder.build();

        let names: Vec<_> = registry.iter().map(|t| t.type_name()).collect();
        assert_eq!(names, ["Color", "LineType"]);
    }

    #[test]
    fn global_registry_collects_submissions() {
        let registry = EnumRegistry::global();
        let table = registry.of::<LineType>().unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.name_of(3), "Dotted");
        assert!(std::ptr::eq(registry, EnumRegistry::global()));
    }

    #[test]
    fn global_registry_is_built_once_across_threads() {
        let addrs: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| EnumRegistry::global() as *const _ as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
