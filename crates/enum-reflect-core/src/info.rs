//! Owned descriptor tables.
//!
//! [`EnumInfo`] describes an enumeration that has no Rust enum behind it,
//! such as a C header's constants, where several names may share one
//! value. Lookups follow the same first-match rule as [`EnumTable`].
//!
//! [`EnumTable`]: crate::EnumTable

use crate::{DynEnumTable, UNKNOWN_NAME};

/// A named constant of an [`EnumInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Integer value.
    pub value: i128,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: i128) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Owned, type-erased descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumInfo {
    /// Unqualified name.
    pub name: String,
    /// Fully qualified name (defaults to `name`).
    pub qualified_name: String,
    /// Sentinel for unmatched values.
    pub unknown: String,
    /// Values in declaration order.
    pub values: Vec<EnumValue>,
}

impl EnumInfo {
    /// Create an empty table named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            qualified_name: name.clone(),
            name,
            unknown: UNKNOWN_NAME.to_string(),
            values: Vec::new(),
        }
    }

    /// Set the qualified name.
    pub fn with_qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.qualified_name = qualified_name.into();
        self
    }

    /// Set the sentinel returned for unmatched values.
    pub fn with_unknown(mut self, unknown: impl Into<String>) -> Self {
        self.unknown = unknown.into();
        self
    }

    /// Append a value.
    pub fn with_value(mut self, name: impl Into<String>, value: i128) -> Self {
        self.values.push(EnumValue::new(name, value));
        self
    }

    /// Append several values, keeping their order.
    pub fn with_values<N: Into<String>>(
        mut self,
        values: impl IntoIterator<Item = (N, i128)>,
    ) -> Self {
        self.values
            .extend(values.into_iter().map(|(name, value)| EnumValue::new(name, value)));
        self
    }

    /// Look up a value by name.
    pub fn get_value(&self, name: &str) -> Option<i128> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    /// Look up a name by value.
    pub fn get_name(&self, value: i128) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.name.as_str())
    }
}

impl DynEnumTable for EnumInfo {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn unknown(&self) -> &str {
        &self.unknown
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn entry(&self, index: usize) -> Option<(&str, i128)> {
        self.values.get(index).map(|v| (v.name.as_str(), v.value))
    }

    fn name_of(&self, value: i128) -> &str {
        self.get_name(value).unwrap_or(&self.unknown)
    }

    fn value_of(&self, name: &str) -> Option<i128> {
        self.get_value(name)
    }
}
