//! Deterministic hash-based enumeration identity.
//!
//! [`TypeHash`] is a 64-bit hash of an enumeration's qualified name
//! (`module::path::Name`). It keys the registry, so two enums with the same
//! simple name in different modules stay distinct.
//!
//! # Examples
//!
//! ```
//! use enum_reflect_core::TypeHash;
//!
//! let a = TypeHash::from_name("shapes::LineType");
//! let b = TypeHash::from_name("shapes::LineType");
//! assert_eq!(a, b);
//! assert_ne!(a, TypeHash::from_name("paint::LineType"));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into every enumeration hash.
const ENUM_DOMAIN: u64 = 0x2fac10b63a6cc57c;

/// A deterministic 64-bit hash identifying an enumeration type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a qualified type name.
    ///
    /// The same name always produces the same hash.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(ENUM_DOMAIN ^ xxh64(name.as_bytes(), 0))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
