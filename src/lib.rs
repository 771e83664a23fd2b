//! Enumerator name/value tables generated at build time.
//!
//! `#[derive(Enumeration)]` captures an enum's enumerator names and values
//! into a `static` descriptor table. Lookups in both directions are total:
//! an unmatched value maps to a fixed sentinel name, an unmatched name to
//! `None`.
//!
//! ```
//! use enum_reflect::{Enumeration, name_of, value_of};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
//! #[repr(u8)]
//! enum LineType {
//!     None,
//!     Solid,
//!     Dashed,
//!     Dotted,
//! }
//!
//! assert_eq!(name_of::<LineType>(2), "Dashed");
//! assert_eq!(name_of::<LineType>(42), "<unknown>");
//! assert_eq!(value_of::<LineType>("Dotted"), Some(LineType::Dotted));
//! assert_eq!(value_of::<LineType>("nope"), None);
//!
//! // The same lookups evaluate at compile time.
//! const DASHED: &str = LineType::name_of(2);
//! const _: () = assert!(LineType::COUNT == 4);
//! assert_eq!(DASHED, "Dashed");
//! ```
//!
//! # Features
//!
//! - `macros` (default): re-export `#[derive(Enumeration)]`
//! - `registry` (default): [`EnumRegistry`] and automatic registration of
//!   every derived enum
//! - `demo`: the `enum-demo` binary and its CLI and logging dependencies

// Lets the derive's `::enum_reflect` paths resolve inside this crate.
extern crate self as enum_reflect;

pub use enum_reflect_core::{
    DynEnumTable, EnumEntry, EnumInfo, EnumTable, EnumValue, Enumeration, ParseEnumError, Scalar,
    TypeHash, UNKNOWN_NAME, const_eval, entries, name_of, name_of_value, repr_of, value_of,
};

#[cfg(feature = "macros")]
pub use enum_reflect_macros::Enumeration;

#[cfg(feature = "registry")]
pub use enum_reflect_registry::{EnumRegistration, EnumRegistry, RegistryBuilder, RegistryError};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "registry")]
    pub use enum_reflect_registry::EnumRegistration;
    #[cfg(feature = "registry")]
    pub use inventory;
}

#[cfg(feature = "registry")]
#[doc(hidden)]
#[macro_export]
macro_rules! __register_enumeration {
    ($ty:ident) => {
        $crate::__private::inventory::submit! {
            $crate::__private::EnumRegistration::of::<$ty>()
        }
    };
}

#[cfg(not(feature = "registry"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __register_enumeration {
    ($ty:ident) => {};
}
