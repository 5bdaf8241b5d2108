//! The serde adapter.
//!
//! A wrapper serializes as its value's own form, never as a nested object.
//! When the value type is `u64` the impls delegate to the shared integer
//! token codec in the runtime crate, which accepts exactly an integer token
//! (or null, mapped to the wrapper's default) and rejects every other token
//! kind with an error naming the expected and actual kinds. A `u64` wrapper
//! additionally gets `FromUInt64` and `Default` so that mapping is defined.
//!
//! Alias spellings of `u64` are not resolvable at expansion time; they take
//! the transparent path like any other value type.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::parse::ValidatedStrongType;

pub(super) fn generate(descriptor: &ValidatedStrongType) -> TokenStream {
    if is_u64(&descriptor.value_ty) {
        generate_uint64(descriptor)
    } else {
        generate_transparent(descriptor)
    }
}

fn is_u64(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("u64"))
}

fn generate_uint64(descriptor: &ValidatedStrongType) -> TokenStream {
    let name = &descriptor.ident;
    let construct = descriptor.construct_expr();

    quote! {
        impl ::strong_types::FromUInt64 for #name {
            fn from_u64(value: u64) -> Self {
                #construct
            }
        }

        impl ::core::default::Default for #name {
            fn default() -> Self {
                <#name as ::strong_types::FromUInt64>::from_u64(0)
            }
        }

        impl ::strong_types::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::strong_types::serde::Serializer,
            {
                serializer.serialize_u64(self.value)
            }
        }

        impl<'de> ::strong_types::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::strong_types::serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(::strong_types::UInt64Visitor::<#name>::new())
            }
        }
    }
}

fn generate_transparent(descriptor: &ValidatedStrongType) -> TokenStream {
    let name = &descriptor.ident;
    let value_ty = &descriptor.value_ty;

    quote! {
        impl ::strong_types::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::strong_types::serde::Serializer,
            {
                ::strong_types::serde::Serialize::serialize(&self.value, serializer)
            }
        }

        impl<'de> ::strong_types::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::strong_types::serde::Deserializer<'de>,
            {
                ::core::result::Result::map(
                    <#value_ty as ::strong_types::serde::Deserialize<'de>>::deserialize(deserializer),
                    <#name as ::strong_types::StrongType>::from_value,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use crate::parse::StrongVariant;

    use super::*;

    #[test]
    fn u64_wrappers_use_the_integer_codec() {
        let descriptor = ValidatedStrongType {
            ident: parse_quote!(OrderId),
            value_ty: parse_quote!(u64),
            variant: StrongVariant::Ordered,
            has_constructor: true,
        };
        let tokens = generate(&descriptor).to_string();
        assert!(tokens.contains("UInt64Visitor"));
        assert!(tokens.contains("serialize_u64"));
        assert!(tokens.contains("Default for OrderId"));
    }

    #[test]
    fn other_value_types_serialize_transparently() {
        let descriptor = ValidatedStrongType {
            ident: parse_quote!(RequestId),
            value_ty: parse_quote!(Uuid),
            variant: StrongVariant::Plain,
            has_constructor: true,
        };
        let tokens = generate(&descriptor).to_string();
        assert!(!tokens.contains("UInt64Visitor"));
        assert!(!tokens.contains("Default"));
        assert!(tokens.contains("from_value"));
    }
}
