//! Derive macros for the Uniflow state container
//!
//! This crate provides procedural macros to reduce boilerplate when defining
//! actions for a Uniflow store.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `uniflow_core::Action` for an enum,
//!   mapping each variant to its name as the discriminant
//!
//! # Example
//!
//! ```ignore
//! use uniflow_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo { title: String },
//!     ToggleTodo { index: usize },
//!
//!     #[kind("todos/clear")]
//!     ClearCompleted,
//! }
//!
//! // Generated discriminants:
//! assert_eq!(TodoAction::ToggleTodo { index: 0 }.kind(), Some("ToggleTodo"));
//! assert_eq!(TodoAction::ClearCompleted.kind(), Some("todos/clear"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derive macro implementing `uniflow_core::Action` for an enum.
///
/// Each variant's discriminant defaults to the variant name; `#[kind("...")]`
/// on a variant overrides it. The enum must also implement `Debug` (the
/// `Action` supertrait), which is usually another derive away.
///
/// # Attributes
///
/// - `#[kind("name")]` - Override the discriminant for one variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A `#[kind]` attribute does not contain a string literal
#[proc_macro_derive(Action, attributes(kind))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    // Generate one match arm per variant, honoring #[kind] overrides.
    let mut kind_arms = Vec::new();
    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let mut kind = variant_name.to_string();
        for attr in &variant.attrs {
            if attr.path().is_ident("kind") {
                match attr.parse_args::<LitStr>() {
                    Ok(literal) => kind = literal.value(),
                    Err(_) => {
                        return syn::Error::new_spanned(
                            attr,
                            "#[kind] expects a string literal, e.g. #[kind(\"todos/clear\")]",
                        )
                        .to_compile_error()
                        .into();
                    },
                }
            }
        }

        let arm = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #kind, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #kind, },
            Fields::Unit => quote! { Self::#variant_name => #kind, },
        };
        kind_arms.push(arm);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics uniflow_core::Action for #name #ty_generics #where_clause {
            fn kind(&self) -> ::core::option::Option<&str> {
                ::core::option::Option::Some(match self {
                    #(#kind_arms)*
                })
            }
        }
    };

    TokenStream::from(expanded)
}

#[cfg(test)]
mod tests {
    // The derive is exercised by the test files in tests/.
}
