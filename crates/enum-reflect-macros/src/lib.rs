//! enum-reflect proc macros
//!
//! This crate provides `#[derive(Enumeration)]`, which captures an enum's
//! enumerator names and values at build time.
//!
//! # Example
//!
//! ```ignore
//! use enum_reflect::Enumeration;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
//! #[repr(u8)]
//! enum LineType {
//!     None,
//!     Solid,
//!     Dashed,
//!     Dotted,
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod derive_enumeration;

/// Derive the `Enumeration` trait for a fieldless enum.
///
/// Generates:
///
/// - `impl Enumeration` with a `static` descriptor table holding one entry
///   per variant, in declaration order
/// - inherent `const fn name_of(repr)`, `const fn value_of(name)`,
///   `const fn variant_name(self)` and `const COUNT`
/// - a registration in the global `EnumRegistry`
///
/// The enum must be `Copy`. Its underlying type comes from `#[repr(..)]`
/// and defaults to `isize`.
///
/// # Attributes
///
/// - `#[enum_reflect(name = "...")]` - Override the reported type name
/// - `#[enum_reflect(unknown = "...")]` - Sentinel for unmatched values
///   (default `"<unknown>"`)
/// - `#[enum_reflect(display)]` - Implement `Display` with the enumerator name
/// - `#[enum_reflect(from_str)]` - Implement `FromStr` via `value_of`
///
/// # Variant Attributes
///
/// - `#[enum_reflect(rename = "...")]` - Override the enumerator name
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, Enumeration)]
/// #[enum_reflect(unknown = "<unnamed>", display, from_str)]
/// enum Color {
///     #[enum_reflect(rename = "red")]
///     Red,
///     #[enum_reflect(rename = "green")]
///     Green,
/// }
/// ```
#[proc_macro_derive(Enumeration, attributes(enum_reflect))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    derive_enumeration::derive_enumeration_impl(input)
}
