//! Implementation of the `#[derive(Enumeration)]` macro.

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

use crate::attrs::{TypeAttrs, VariantAttrs, parse_repr};

/// Sentinel used when `#[enum_reflect(unknown = "...")]` is absent.
const DEFAULT_UNKNOWN: &str = "<unknown>";

pub fn derive_enumeration_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_enumeration_inner(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// One enumerator, in declaration order.
struct Enumerator<'a> {
    ident: &'a Ident,
    name: String,
}

fn derive_enumeration_inner(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(data) => {
            return Err(syn::Error::new(
                data.struct_token.span,
                "#[derive(Enumeration)] can only be used on enums",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "#[derive(Enumeration)] can only be used on enums",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Enumeration)] does not support generic enums",
        ));
    }

    let attrs = TypeAttrs::from_attrs(&input.attrs)?;
    let repr = parse_repr(&input.attrs)?
        .unwrap_or_else(|| Ident::new("isize", Span::call_site()));
    let enumerators = collect_enumerators(data)?;

    let trait_impl = generate_trait_impl(input, &attrs, &repr, &enumerators);
    let const_fns = generate_const_fns(input, &attrs, &repr, &enumerators);
    let registration = generate_registration(input);
    let display = attrs.display.then(|| generate_display(input));
    let from_str = attrs.from_str.then(|| generate_from_str(input));

    Ok(quote! {
        #trait_impl
        #const_fns
        #registration
        #display
        #from_str
    })
}

/// Validate variants and resolve their names.
fn collect_enumerators(data: &DataEnum) -> syn::Result<Vec<Enumerator<'_>>> {
    let mut seen = HashSet::new();
    let mut enumerators = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "#[derive(Enumeration)] requires fieldless variants",
            ));
        }

        let variant_attrs = VariantAttrs::from_attrs(&variant.attrs)?;
        let name = variant_attrs
            .rename
            .unwrap_or_else(|| variant.ident.to_string());

        if !seen.insert(name.clone()) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate enumerator name `{name}`"),
            ));
        }

        enumerators.push(Enumerator {
            ident: &variant.ident,
            name,
        });
    }

    Ok(enumerators)
}

/// Generate the `Enumeration` impl and its `static` descriptor table.
fn generate_trait_impl(
    input: &DeriveInput,
    attrs: &TypeAttrs,
    repr: &Ident,
    enumerators: &[Enumerator<'_>],
) -> TokenStream2 {
    let name = &input.ident;
    let ident_str = name.to_string();
    let type_name = attrs.name.clone().unwrap_or_else(|| ident_str.clone());
    let unknown = attrs.unknown.as_deref().unwrap_or(DEFAULT_UNKNOWN);

    let entries = enumerators.iter().map(|e| {
        let ident = e.ident;
        let entry_name = &e.name;
        quote! { ::enum_reflect::EnumEntry::new(#entry_name, #name::#ident) }
    });

    let to_repr_body = if enumerators.is_empty() {
        quote! { match self {} }
    } else {
        quote! { self as #repr }
    };

    quote! {
        impl ::enum_reflect::Enumeration for #name {
            type Repr = #repr;
            const TYPE_NAME: &'static str = #type_name;
            const QUALIFIED_NAME: &'static str =
                ::core::concat!(::core::module_path!(), "::", #ident_str);
            const UNKNOWN: &'static str = #unknown;

            fn table() -> &'static ::enum_reflect::EnumTable<Self> {
                static TABLE: ::enum_reflect::EnumTable<#name> = ::enum_reflect::EnumTable::new(
                    <#name as ::enum_reflect::Enumeration>::TYPE_NAME,
                    <#name as ::enum_reflect::Enumeration>::QUALIFIED_NAME,
                    <#name as ::enum_reflect::Enumeration>::UNKNOWN,
                    &[#(#entries),*],
                );
                &TABLE
            }

            #[inline]
            fn to_repr(self) -> #repr {
                #to_repr_body
            }
        }
    }
}

/// Generate inherent `const fn` lookups, usable in constant evaluation.
fn generate_const_fns(
    input: &DeriveInput,
    attrs: &TypeAttrs,
    repr: &Ident,
    enumerators: &[Enumerator<'_>],
) -> TokenStream2 {
    let name = &input.ident;
    let count = enumerators.len();
    let unknown = attrs.unknown.as_deref().unwrap_or(DEFAULT_UNKNOWN);
    let idents: Vec<_> = enumerators.iter().map(|e| e.ident).collect();
    let names: Vec<_> = enumerators.iter().map(|e| e.name.as_str()).collect();

    let variant_name_body = if enumerators.is_empty() {
        quote! { match self {} }
    } else {
        quote! { Self::name_of(self as #repr) }
    };

    quote! {
        impl #name {
            /// Number of declared enumerators.
            pub const COUNT: usize = #count;

            /// Name of the first enumerator whose value is `repr`, or the
            /// unknown sentinel.
            #[allow(unused_variables)]
            pub const fn name_of(repr: #repr) -> &'static str {
                #(
                    if repr == #name::#idents as #repr {
                        return #names;
                    }
                )*
                #unknown
            }

            /// Enumerator named exactly `name`.
            #[allow(unused_variables)]
            pub const fn value_of(name: &str) -> ::core::option::Option<Self> {
                #(
                    if ::enum_reflect::const_eval::str_eq(name, #names) {
                        return ::core::option::Option::Some(#name::#idents);
                    }
                )*
                ::core::option::Option::None
            }

            /// This enumerator's name.
            pub const fn variant_name(self) -> &'static str {
                #variant_name_body
            }
        }
    }
}

/// Submit the table to the global registry (a no-op when the facade's
/// `registry` feature is off).
fn generate_registration(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    quote! {
        ::enum_reflect::__register_enumeration!(#name);
    }
}

fn generate_display(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    quote! {
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(#name::variant_name(*self))
            }
        }
    }
}

fn generate_from_str(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    quote! {
        impl ::core::str::FromStr for #name {
            type Err = ::enum_reflect::ParseEnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                #name::value_of(s).ok_or_else(|| {
                    ::enum_reflect::ParseEnumError::new(
                        <#name as ::enum_reflect::Enumeration>::TYPE_NAME,
                        s,
                    )
                })
            }
        }
    }
}
