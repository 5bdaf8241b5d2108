//! Contract behavior impls.
//!
//! Equality, cloning, debug and the total order (comparable variant only)
//! are defined strictly in terms of the wrapped value, so a wrapper behaves
//! exactly like its value against instances of the same wrapper type and
//! not at all against anything else.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::{StrongVariant, ValidatedStrongType};

pub(super) fn generate(descriptor: &ValidatedStrongType) -> TokenStream {
    let name = &descriptor.ident;
    let name_str = name.to_string();

    let ordering = match descriptor.variant {
        StrongVariant::Plain => TokenStream::new(),
        StrongVariant::Ordered => quote! {
            impl ::core::cmp::PartialOrd for #name {
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
                }
            }

            impl ::core::cmp::Ord for #name {
                fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                    ::core::cmp::Ord::cmp(&self.value, &other.value)
                }
            }
        },
    };

    quote! {
        impl ::core::clone::Clone for #name {
            fn clone(&self) -> Self {
                Self { value: ::core::clone::Clone::clone(&self.value) }
            }
        }

        impl ::core::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(#name_str).field(&self.value).finish()
            }
        }

        impl ::core::cmp::PartialEq for #name {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl ::core::cmp::Eq for #name {}

        #ordering
    }
}
