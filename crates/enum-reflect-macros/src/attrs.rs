//! Attribute parsing utilities for the derive.

use proc_macro2::{Ident, TokenTree};
use syn::{Attribute, LitStr};

/// Parsed `#[enum_reflect(...)]` attributes on the enum.
#[derive(Debug, Default)]
pub struct TypeAttrs {
    /// Override the reported type name (default: Rust enum name)
    pub name: Option<String>,
    /// Sentinel for unmatched values (default: `"<unknown>"`)
    pub unknown: Option<String>,
    /// Emit a `Display` impl printing the enumerator name
    pub display: bool,
    /// Emit a `FromStr` impl backed by `value_of`
    pub from_str: bool,
}

/// Parsed `#[enum_reflect(...)]` attributes on a variant.
#[derive(Debug, Default)]
pub struct VariantAttrs {
    /// Override the enumerator name
    pub rename: Option<String>,
}

impl TypeAttrs {
    /// Parse attributes from a list of `#[enum_reflect(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("enum_reflect") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.name = Some(value.value());
                } else if meta.path.is_ident("unknown") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.unknown = Some(value.value());
                } else if meta.path.is_ident("display") {
                    result.display = true;
                } else if meta.path.is_ident("from_str") {
                    result.from_str = true;
                } else {
                    return Err(meta.error(format!(
                        "unknown enum_reflect attribute: {}",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}

impl VariantAttrs {
    /// Parse attributes from a list of `#[enum_reflect(...)]` attributes.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("enum_reflect") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.rename = Some(value.value());
                } else {
                    return Err(meta.error(format!(
                        "unknown enum_reflect variant attribute: {}",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}

const INTEGER_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize", "i128",
];

/// Find the integer type in `#[repr(...)]`, if any.
///
/// Other repr hints (`C`, `align(..)`) are skipped. `u128` is rejected: its
/// values do not fit the `i128` carrier used by type-erased tables.
pub fn parse_repr(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    let mut repr = None;

    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if ident == "u128" {
                    return Err(
                        meta.error("#[repr(u128)] is not supported by #[derive(Enumeration)]")
                    );
                }
                if INTEGER_REPRS.iter().any(|ty| ident == ty) {
                    repr = Some(ident.clone());
                }
            }
            if meta.input.peek(syn::token::Paren) {
                let _: TokenTree = meta.input.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(repr)
}
