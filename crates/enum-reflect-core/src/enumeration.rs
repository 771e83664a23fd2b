//! The `Enumeration` trait and the generic lookup operations.
//!
//! `#[derive(Enumeration)]` implements the trait; the free functions here
//! are the type-directed entry points most callers use:
//!
//! ```ignore
//! use enum_reflect::{name_of, value_of};
//!
//! assert_eq!(name_of::<LineType>(2), "Dashed");
//! assert_eq!(value_of::<LineType>("Dotted"), Some(LineType::Dotted));
//! ```

use crate::{EnumEntry, EnumTable, Scalar, TypeHash};

/// A fieldless enum with a build-time descriptor table.
///
/// # Contract
///
/// - `table()` returns the same `'static` table on every call.
/// - The table holds exactly one entry per declared enumerator, in
///   declaration order.
/// - `to_repr` agrees with the entries (`table().entries()[i].value.to_repr()`
///   is the declared discriminant of enumerator `i`).
pub trait Enumeration: Copy + Send + Sync + 'static {
    /// Underlying integer type (`#[repr(..)]`, `isize` by default).
    type Repr: Scalar;

    /// Unqualified type name.
    const TYPE_NAME: &'static str;

    /// Type name prefixed with the declaring module path.
    const QUALIFIED_NAME: &'static str;

    /// Sentinel returned by name lookup for values with no enumerator.
    const UNKNOWN: &'static str;

    /// The type's descriptor table.
    fn table() -> &'static EnumTable<Self>;

    /// Underlying scalar value of this enumerator.
    fn to_repr(self) -> Self::Repr;

    /// Registry identity, derived from [`Self::QUALIFIED_NAME`].
    fn type_hash() -> TypeHash {
        TypeHash::from_name(Self::QUALIFIED_NAME)
    }
}

/// Name of the first enumerator of `E` whose value is `repr`, or
/// [`Enumeration::UNKNOWN`].
#[inline]
pub fn name_of<E: Enumeration>(repr: E::Repr) -> &'static str {
    E::table().name_of(repr)
}

/// Name of a typed enumerator.
#[inline]
pub fn name_of_value<E: Enumeration>(value: E) -> &'static str {
    E::table().name_of_value(value)
}

/// Enumerator of `E` named exactly `name`.
#[inline]
pub fn value_of<E: Enumeration>(name: &str) -> Option<E> {
    E::table().value_of(name)
}

/// Underlying value of the enumerator of `E` named `name`.
#[inline]
pub fn repr_of<E: Enumeration>(name: &str) -> Option<E::Repr> {
    E::table().repr_of(name)
}

/// Every (name, value) pair of `E`, in declaration order.
#[inline]
pub fn entries<E: Enumeration>() -> &'static [EnumEntry<E>] {
    E::table().entries()
}
