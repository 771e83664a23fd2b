//! enum-reflect registry crate.
//!
//! Maps enumeration identity ([`TypeHash`](enum_reflect_core::TypeHash)) to
//! type-erased descriptor tables, for callers that only know a type by name.

mod error;
mod registration;
mod registry;

pub use error::RegistryError;
pub use registration::EnumRegistration;
pub use registry::{EnumRegistry, RegistryBuilder};
