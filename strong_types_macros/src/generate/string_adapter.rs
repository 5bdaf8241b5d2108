//! The string adapter: `Display`/`FromStr` for binding layers that
//! round-trip values through strings (configuration, CLI arguments, path
//! parameters). Parsing delegates to the value type's `FromStr` and wraps
//! its failure with the wrapper's type name.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::ValidatedStrongType;

pub(super) fn generate(descriptor: &ValidatedStrongType) -> TokenStream {
    let name = &descriptor.ident;
    let name_str = name.to_string();
    let value_ty = &descriptor.value_ty;
    let construct = descriptor.construct_expr();

    quote! {
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.value, f)
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = ::strong_types::ParseStrongTypeError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match <#value_ty as ::core::str::FromStr>::from_str(s) {
                    ::core::result::Result::Ok(value) => ::core::result::Result::Ok(#construct),
                    ::core::result::Result::Err(source) => ::core::result::Result::Err(
                        ::strong_types::ParseStrongTypeError::new(#name_str, source),
                    ),
                }
            }
        }
    }
}
