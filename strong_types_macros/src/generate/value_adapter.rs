//! The value adapter: bidirectional conversion between a wrapper and its raw
//! value. Construction always goes through the declaration's validated
//! constructor; extraction reads the `value` field. Pure and total.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::ValidatedStrongType;

pub(super) fn generate(descriptor: &ValidatedStrongType) -> TokenStream {
    let name = &descriptor.ident;
    let value_ty = &descriptor.value_ty;
    let construct = descriptor.construct_expr();

    quote! {
        impl ::strong_types::StrongType for #name {
            type Value = #value_ty;

            fn from_value(value: #value_ty) -> Self {
                #construct
            }

            fn value(&self) -> &#value_ty {
                &self.value
            }

            fn into_value(self) -> #value_ty {
                self.value
            }
        }

        impl ::core::convert::From<#value_ty> for #name {
            fn from(value: #value_ty) -> Self {
                #construct
            }
        }

        impl ::core::convert::From<#name> for #value_ty {
            fn from(wrapper: #name) -> Self {
                wrapper.value
            }
        }
    }
}
